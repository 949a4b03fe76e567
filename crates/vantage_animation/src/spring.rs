//! Spring physics animation
//!
//! RK4-integrated spring physics used to smooth raw scroll progress so that
//! downstream mappers never see wheel or touch jitter.

use serde::{Deserialize, Serialize};

/// Configuration for a spring animation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Distance from target below which the spring may settle
    pub rest_delta: f32,
    /// Speed below which the spring may settle
    pub rest_speed: f32,
}

impl SpringConfig {
    /// Create a new spring configuration with progress-scale rest thresholds
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            ..Self::molasses()
        }
    }

    /// A stiff, snappy spring
    pub fn stiff() -> Self {
        Self {
            stiffness: 400.0,
            damping: 30.0,
            ..Self::molasses()
        }
    }

    /// A slow spring with no overshoot (critically damped).
    ///
    /// This is the scroll smoothing spring: stiffness 100, damping 20.
    pub fn molasses() -> Self {
        Self {
            stiffness: 100.0,
            damping: 20.0,
            mass: 1.0,
            rest_delta: 0.0005,
            rest_speed: 0.005,
        }
    }

    /// Calculate critical damping for this spring's stiffness and mass
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Check if the spring is underdamped (will oscillate)
    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }

    /// Check if the spring is critically damped (no oscillation, fastest settling)
    pub fn is_critically_damped(&self) -> bool {
        (self.damping - self.critical_damping()).abs() < 0.01
    }

    /// Check that every parameter is finite and positive
    pub fn is_valid(&self) -> bool {
        [
            self.stiffness,
            self.damping,
            self.mass,
            self.rest_delta,
            self.rest_speed,
        ]
        .iter()
        .all(|v| v.is_finite() && *v > 0.0)
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::molasses()
    }
}

/// A spring-based animator
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump straight to `value` and stop
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Check if the spring has settled (within rest delta of target with minimal velocity)
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
    }

    /// Step the spring simulation using RK4 integration
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let k1_v = self.acceleration(self.value, self.velocity);
        let k1_x = self.velocity;

        let k2_v = self.acceleration(
            self.value + k1_x * dt * 0.5,
            self.velocity + k1_v * dt * 0.5,
        );
        let k2_x = self.velocity + k1_v * dt * 0.5;

        let k3_v = self.acceleration(
            self.value + k2_x * dt * 0.5,
            self.velocity + k2_v * dt * 0.5,
        );
        let k3_x = self.velocity + k2_v * dt * 0.5;

        let k4_v = self.acceleration(self.value + k3_x * dt, self.velocity + k3_v * dt);
        let k4_x = self.velocity + k3_v * dt;

        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_settles_to_target() {
        let mut spring = Spring::new(SpringConfig::molasses(), 0.0);
        spring.set_target(1.0);

        // 2 seconds at 60fps
        for _ in 0..120 {
            spring.step(1.0 / 60.0);
        }

        assert!(spring.is_settled());
        assert!((spring.value() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_scroll_spring_is_critically_damped() {
        let config = SpringConfig::molasses();
        assert_eq!(config.stiffness, 100.0);
        assert_eq!(config.damping, 20.0);
        assert!(config.is_critically_damped());
        assert!(SpringConfig::stiff().is_underdamped());
    }

    #[test]
    fn test_critically_damped_spring_never_overshoots() {
        let mut spring = Spring::new(SpringConfig::molasses(), 0.0);
        spring.set_target(0.8);

        for _ in 0..240 {
            spring.step(1.0 / 60.0);
            assert!(spring.value() <= 0.8 + 1e-4);
        }
    }

    #[test]
    fn test_spring_lags_behind_target() {
        let mut spring = Spring::new(SpringConfig::molasses(), 0.0);
        spring.set_target(0.5);
        spring.step(1.0 / 60.0);

        assert!(spring.value() > 0.0);
        assert!(spring.value() < 0.5);
    }

    #[test]
    fn test_spring_inherits_velocity() {
        let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
        spring.set_target(1.0);

        for _ in 0..10 {
            spring.step(1.0 / 60.0);
        }

        let velocity = spring.velocity();
        assert!(velocity > 0.0);

        spring.set_target(0.5);
        assert_eq!(spring.velocity(), velocity);
    }

    #[test]
    fn test_spring_rk4_stability() {
        let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
        spring.set_target(1.0);

        for _ in 0..100 {
            spring.step(0.1);
            assert!(spring.value().is_finite());
            assert!(spring.value() < 2.0);
            assert!(spring.value() > -0.5);
        }
    }

    #[test]
    fn test_snap_to_stops_motion() {
        let mut spring = Spring::new(SpringConfig::molasses(), 0.0);
        spring.set_target(1.0);
        spring.step(1.0 / 60.0);

        spring.snap_to(0.3);
        assert_eq!(spring.value(), 0.3);
        assert_eq!(spring.velocity(), 0.0);
        assert!(spring.is_settled());
    }

    #[test]
    fn test_config_validation() {
        assert!(SpringConfig::molasses().is_valid());
        assert!(!SpringConfig::new(0.0, 20.0, 1.0).is_valid());
        assert!(!SpringConfig::new(100.0, f32::NAN, 1.0).is_valid());
    }
}
