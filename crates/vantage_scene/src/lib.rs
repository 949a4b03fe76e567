//! Vantage Scene
//!
//! Maps scroll progress to everything the landing scene animates:
//!
//! - **Camera**: waypoint path keyed by a progress high-water mark, with a
//!   trailing filter
//! - **Model**: scroll-scrubbed clip time, depth offset, responsive scale
//! - **UI Visibility**: side text reveal with staggered entrance, logo overlay
//! - **Hero**: page-level layout transforms and navbar state
//!
//! [`SceneAnimator`] ties them together and emits one [`FrameState`] per
//! display frame.

pub mod animator;
pub mod camera;
pub mod config;
pub mod error;
pub mod hero;
pub mod model;
pub mod visibility;

pub use animator::{
    FrameState, PageLayout, ProgressSnapshot, RenderAdapter, SceneAnimator, Viewport,
};
pub use camera::{CameraMapper, CameraPath, CameraPose, CameraWaypoint, ProgressRatchet};
pub use config::{CameraConfig, HeroConfig, ModelConfig, SceneConfig, VisibilityConfig};
pub use error::SceneError;
pub use hero::{HeroFrame, HeroTimeline, NavBarState};
pub use model::{clip_cursor, AnimationClip, ModelMapper, ModelPose};
pub use visibility::{LogoOverlayState, TextItemState, TextSide, UiFrame, UiVisibilityMapper};
