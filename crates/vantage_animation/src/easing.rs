//! Easing functions
//!
//! Map normalized time in [0, 1] to eased progress in [0, 1].

use serde::{Deserialize, Serialize};

/// An easing curve
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// CSS `ease-in`, cubic-bezier(0.42, 0, 1, 1)
    EaseIn,
    /// CSS `ease-out`, cubic-bezier(0, 0, 0.58, 1)
    #[default]
    EaseOut,
    /// CSS `ease-in-out`, cubic-bezier(0.42, 0, 0.58, 1)
    EaseInOut,
    /// Polynomial cubic ease-in-out: 4t³ below the midpoint, mirrored above
    EaseInOutCubic,
    /// Custom cubic-bezier with control points (x1, y1, x2, y2)
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply the easing to `t`, clamped into [0, 1]
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Easing::EaseInOutCubic => ease_in_out_cubic(t),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

/// Cubic ease-in-out used to scrub the model clip
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Evaluate a CSS-style cubic-bezier curve with endpoints (0,0) and (1,1)
pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, u: f32) -> f32 {
    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample = |a: f32, b: f32, c: f32, t: f32| ((a * t + b) * t + c) * t;

    if u <= 0.0 {
        return 0.0;
    }
    if u >= 1.0 {
        return 1.0;
    }

    // Newton-Raphson, then bisection if the slope flattens out
    let mut t = u;
    for _ in 0..8 {
        let x = sample(ax, bx, cx, t) - u;
        if x.abs() < 1e-6 {
            return sample(ay, by, cy, t);
        }
        let dx = (3.0 * ax * t + 2.0 * bx) * t + cx;
        if dx.abs() < 1e-6 {
            break;
        }
        t -= x / dx;
        if !(0.0..=1.0).contains(&t) {
            break;
        }
    }

    let mut lo = 0.0;
    let mut hi = 1.0;
    t = u;
    for _ in 0..24 {
        let x = sample(ax, bx, cx, t);
        if (x - u).abs() < 1e-7 {
            break;
        }
        if x < u {
            lo = t;
        } else {
            hi = t;
        }
        t = 0.5 * (lo + hi);
    }

    sample(ay, by, cy, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 6] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::EaseInOutCubic,
        Easing::CubicBezier(0.25, 0.1, 0.25, 1.0),
    ];

    #[test]
    fn test_easing_boundaries() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-3, "{:?} at t=0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-3, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_clamps_input() {
        for easing in ALL {
            assert_eq!(easing.apply(-1.0), easing.apply(0.0));
            assert_eq!(easing.apply(2.0), easing.apply(1.0));
        }
    }

    #[test]
    fn test_ease_in_out_cubic_values() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert!((ease_in_out_cubic(0.25) - 0.0625).abs() < 1e-6);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
        assert!((ease_in_out_cubic(0.75) - 0.9375).abs() < 1e-6);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
    }

    #[test]
    fn test_easing_is_monotonic() {
        for easing in ALL {
            let mut prev = easing.apply(0.0);
            for i in 1..=100 {
                let v = easing.apply(i as f32 / 100.0);
                assert!(v + 1e-5 >= prev, "{:?} decreased at {}", easing, i);
                prev = v;
            }
        }
    }

    #[test]
    fn test_ease_out_front_loads_progress() {
        assert!(Easing::EaseOut.apply(0.3) > 0.3);
        assert!(Easing::EaseIn.apply(0.3) < 0.3);
    }
}
