//! Scene configuration
//!
//! Every timing constant of the scroll scene lives here. `SceneConfig::default()`
//! is the canonical timing table; a TOML file may override any part of it.
//!
//! ```toml
//! [camera]
//! thresholds = [0.25, 0.5, 0.9, 1.1]
//! follow = 0.1
//!
//! [model]
//! mobile_breakpoint = 768.0
//! ```

use crate::error::SceneError;
use serde::{Deserialize, Serialize};
use vantage_animation::{Easing, LatchConfig, SpringConfig};
use vantage_core::Vec3;

/// Complete scene configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Spring used to smooth raw scroll progress
    pub spring: SpringConfig,
    pub camera: CameraConfig,
    pub model: ModelConfig,
    pub visibility: VisibilityConfig,
    pub hero: HeroConfig,
}

impl SceneConfig {
    /// Check every constant. Called by `SceneAnimator::mount`.
    pub fn validate(&self) -> Result<(), SceneError> {
        if !self.spring.is_valid() {
            return Err(SceneError::InvalidSpring);
        }
        self.camera.validate()?;
        self.model.validate()?;
        self.visibility.validate()?;
        self.hero.validate()
    }
}

// =============================================================================
// Camera
// =============================================================================

/// Camera waypoints and filter settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub start: Vec3,
    pub mid: Vec3,
    pub end: Vec3,
    pub close_zoom: Vec3,
    /// Fixed point the camera always aims at
    pub look_at: Vec3,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Progress at which the camera reaches mid, leaves mid, reaches end,
    /// and reaches close zoom
    pub thresholds: [f32; 4],
    /// Fraction of the remaining distance covered each frame
    pub follow: f32,
    /// Progress below which the high-water mark resets
    pub reset_below: f32,
    /// Multiplier applied to smoothed progress before mapping
    pub progress_scale: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            start: Vec3::new(6.0, 6.0, 6.0),
            mid: Vec3::new(0.0, 10.0, 8.0),
            end: Vec3::new(0.0, 10.0, 4.0),
            close_zoom: Vec3::new(0.0, 8.0, 1.0),
            look_at: Vec3::new(1.0, 1.9, 1.5),
            fov: 45.0,
            thresholds: [0.25, 0.5, 0.9, 1.1],
            follow: 0.1,
            reset_below: 0.01,
            progress_scale: 1.0,
        }
    }
}

impl CameraConfig {
    fn validate(&self) -> Result<(), SceneError> {
        let points = [
            ("camera.start", self.start),
            ("camera.mid", self.mid),
            ("camera.end", self.end),
            ("camera.close_zoom", self.close_zoom),
            ("camera.look_at", self.look_at),
        ];
        for (name, point) in points {
            if !point.is_finite() {
                return Err(SceneError::NonFinite(name));
            }
        }
        if !(self.fov.is_finite() && self.fov > 0.0 && self.fov < 180.0) {
            return Err(SceneError::NonPositive {
                name: "camera.fov",
                value: self.fov,
            });
        }
        // Threshold ordering is checked when the path is built
        check_factor("camera.follow", self.follow)?;
        check_finite("camera.reset_below", self.reset_below)?;
        check_positive("camera.progress_scale", self.progress_scale)
    }
}

// =============================================================================
// Model
// =============================================================================

/// Model scrub, depth, and responsive scale settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Multiplier applied to smoothed progress before mapping
    pub progress_scale: f32,
    /// Progress range scrubbed through the clip
    pub clip_start: f32,
    pub clip_end: f32,
    /// Depth travelled while the clip plays
    pub depth_from: f32,
    pub depth_to: f32,
    /// Depth reached at the end of the extended zone
    pub extended_depth: f32,
    /// Width of the extended zone past `clip_end`
    pub extended_span: f32,
    pub follow: f32,
    /// Resting position of the model group; only z is animated
    pub position: Vec3,
    pub desktop_scale: f32,
    pub mobile_scale: f32,
    /// Viewport width (px) at or below which the mobile scale applies
    pub mobile_breakpoint: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            progress_scale: 1.1,
            clip_start: 0.0,
            clip_end: 1.0,
            depth_from: -1.0,
            depth_to: 1.0,
            extended_depth: 4.0,
            extended_span: 0.1,
            follow: 0.1,
            position: Vec3::new(0.0, -1.0, -1.0),
            desktop_scale: 1.5,
            mobile_scale: 1.0,
            mobile_breakpoint: 768.0,
        }
    }
}

impl ModelConfig {
    fn validate(&self) -> Result<(), SceneError> {
        check_positive("model.progress_scale", self.progress_scale)?;
        check_finite("model.clip_start", self.clip_start)?;
        check_finite("model.clip_end", self.clip_end)?;
        if self.clip_end <= self.clip_start {
            return Err(SceneError::EmptyClipRange {
                start: self.clip_start,
                end: self.clip_end,
            });
        }
        check_finite("model.depth_from", self.depth_from)?;
        check_finite("model.depth_to", self.depth_to)?;
        check_finite("model.extended_depth", self.extended_depth)?;
        check_positive("model.extended_span", self.extended_span)?;
        check_factor("model.follow", self.follow)?;
        if !self.position.is_finite() {
            return Err(SceneError::NonFinite("model.position"));
        }
        check_positive("model.desktop_scale", self.desktop_scale)?;
        check_positive("model.mobile_scale", self.mobile_scale)?;
        check_finite("model.mobile_breakpoint", self.mobile_breakpoint)
    }
}

// =============================================================================
// UI visibility
// =============================================================================

/// Reveal thresholds and entrance timing for the auxiliary UI
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityConfig {
    pub latches: LatchConfig,
    /// Delay between consecutive groups and between items within a group (s)
    pub stagger: f32,
    /// Entrance duration of one text item (s)
    pub item_duration: f32,
    /// Horizontal distance a text item slides in from (px)
    pub item_offset: f32,
    pub item_easing: Easing,
    pub left_items: usize,
    pub right_items: usize,
    /// Logo overlay entrance duration (s)
    pub logo_duration: f32,
    /// Logo overlay scale at the start of its entrance
    pub logo_initial_scale: f32,
    pub logo_easing: Easing,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            latches: LatchConfig::default(),
            stagger: 0.2,
            item_duration: 0.6,
            item_offset: 60.0,
            item_easing: Easing::EaseOut,
            left_items: 3,
            right_items: 3,
            logo_duration: 1.0,
            logo_initial_scale: 0.5,
            logo_easing: Easing::EaseOut,
        }
    }
}

impl VisibilityConfig {
    fn validate(&self) -> Result<(), SceneError> {
        check_positive("visibility.latches.scale", self.latches.scale)?;
        check_finite("visibility.latches.reveal", self.latches.reveal)?;
        check_finite("visibility.latches.overlay", self.latches.overlay)?;
        check_finite(
            "visibility.latches.section_reveal",
            self.latches.section_reveal,
        )?;
        check_non_negative("visibility.stagger", self.stagger)?;
        check_non_negative("visibility.item_duration", self.item_duration)?;
        check_finite("visibility.item_offset", self.item_offset)?;
        check_non_negative("visibility.logo_duration", self.logo_duration)?;
        check_finite("visibility.logo_initial_scale", self.logo_initial_scale)
    }
}

// =============================================================================
// Hero
// =============================================================================

/// Page-level hero settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Scroll distance past the hero's height before the navbar logo shows (px)
    pub nav_logo_offset: f32,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            nav_logo_offset: 2000.0,
        }
    }
}

impl HeroConfig {
    fn validate(&self) -> Result<(), SceneError> {
        check_finite("hero.nav_logo_offset", self.nav_logo_offset)
    }
}

// =============================================================================
// Checks
// =============================================================================

fn check_finite(name: &'static str, value: f32) -> Result<(), SceneError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SceneError::NonFinite(name))
    }
}

fn check_positive(name: &'static str, value: f32) -> Result<(), SceneError> {
    check_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(SceneError::NonPositive { name, value })
    }
}

fn check_non_negative(name: &'static str, value: f32) -> Result<(), SceneError> {
    check_finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(SceneError::NonPositive { name, value })
    }
}

fn check_factor(name: &'static str, value: f32) -> Result<(), SceneError> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(SceneError::InvalidFactor { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(SceneConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_config_toml_round_trip() {
        let config = SceneConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: SceneConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let parsed: SceneConfig = toml::from_str(
            r#"
            [camera]
            follow = 0.2

            [model]
            mobile_breakpoint = 600.0
            "#,
        )
        .unwrap();

        assert_eq!(parsed.camera.follow, 0.2);
        assert_eq!(parsed.camera.thresholds, [0.25, 0.5, 0.9, 1.1]);
        assert_eq!(parsed.model.mobile_breakpoint, 600.0);
        assert_eq!(parsed.model.progress_scale, 1.1);
        assert_eq!(parsed.spring.stiffness, 100.0);
    }

    #[test]
    fn test_rejects_bad_follow_factor() {
        let mut config = SceneConfig::default();
        config.camera.follow = 1.5;
        assert!(matches!(
            config.validate(),
            Err(SceneError::InvalidFactor {
                name: "camera.follow",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_empty_clip_range() {
        let mut config = SceneConfig::default();
        config.model.clip_end = 0.0;
        assert!(matches!(
            config.validate(),
            Err(SceneError::EmptyClipRange { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_spring() {
        let mut config = SceneConfig::default();
        config.spring.damping = -1.0;
        assert_eq!(config.validate(), Err(SceneError::InvalidSpring));
    }
}
