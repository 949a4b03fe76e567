//! Auxiliary UI visibility
//!
//! Side text groups and the centered logo overlay are driven by the tracker's
//! latches. The latches decide *whether* something is shown; this module adds
//! the staggered text entrance and the logo fade/scale-in on top.

use crate::config::VisibilityConfig;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use vantage_animation::{ScrollLatches, StaggerGroup, Tween};
use vantage_core::lerp;

/// Which side of the model a text item sits on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSide {
    Left,
    Right,
}

/// One side text item for one frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextItemState {
    pub side: TextSide,
    /// Position within its group
    pub index: usize,
    pub opacity: f32,
    /// Horizontal offset from the resting position (px)
    pub offset_x: f32,
}

/// Logo overlay for one frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LogoOverlayState {
    pub visible: bool,
    pub opacity: f32,
    pub scale: f32,
}

/// Auxiliary UI state for one frame
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiFrame {
    pub latches: ScrollLatches,
    pub text: SmallVec<[TextItemState; 8]>,
    pub logo: LogoOverlayState,
}

/// Derives side text and logo overlay state from scroll latches
#[derive(Clone, Debug)]
pub struct UiVisibilityMapper {
    sides: SmallVec<[(TextSide, usize); 8]>,
    text: StaggerGroup,
    logo: Tween,
    item_offset: f32,
    logo_initial_scale: f32,
}

impl UiVisibilityMapper {
    pub fn new(config: &VisibilityConfig) -> Self {
        let sides = (0..config.left_items)
            .map(|i| (TextSide::Left, i))
            .chain((0..config.right_items).map(|i| (TextSide::Right, i)))
            .collect();

        Self {
            sides,
            text: StaggerGroup::nested(
                &[config.left_items, config.right_items],
                config.stagger,
                config.item_duration,
                config.item_easing,
            ),
            logo: Tween::new(config.logo_duration, config.logo_easing),
            item_offset: config.item_offset,
            logo_initial_scale: config.logo_initial_scale,
        }
    }

    /// Advance the entrances by `dt` seconds under this frame's latches
    pub fn update(&mut self, latches: ScrollLatches, dt: f32) -> UiFrame {
        self.text.set_visible(latches.reveal);
        self.text.tick(dt);

        if latches.show_overlay {
            if !self.logo.is_playing() {
                self.logo.play();
            }
            self.logo.tick(dt);
        } else {
            self.logo.reset();
        }

        let text = self
            .sides
            .iter()
            .enumerate()
            .map(|(slot, &(side, index))| {
                let value = self.text.value(slot);
                let from = match side {
                    TextSide::Left => -self.item_offset,
                    TextSide::Right => self.item_offset,
                };
                TextItemState {
                    side,
                    index,
                    opacity: value,
                    offset_x: lerp(from, 0.0, value),
                }
            })
            .collect();

        let logo = if latches.show_overlay {
            let value = self.logo.value();
            LogoOverlayState {
                visible: true,
                opacity: value,
                scale: lerp(self.logo_initial_scale, 1.0, value),
            }
        } else {
            LogoOverlayState::default()
        };

        UiFrame {
            latches,
            text,
            logo,
        }
    }
}
