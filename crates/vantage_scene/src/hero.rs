//! Hero section layout
//!
//! The landing hero is driven by whole-page scroll progress, unsmoothed. Each
//! property is a clamped piecewise-linear transform of that progress.

use crate::config::HeroConfig;
use crate::error::SceneError;
use serde::{Deserialize, Serialize};
use vantage_animation::ScrollTransform;

/// Hero layout for one frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroFrame {
    /// Title block width (% of container)
    pub title_width_pct: f32,
    /// Decorative underline width (% of container)
    pub line_width_pct: f32,
    pub content_opacity: f32,
    pub button_opacity: f32,
    /// Buttons are removed from layout once fully transparent
    pub buttons_hidden: bool,
    /// Sliding boxes (vw)
    pub box_left_x_vw: f32,
    pub box_right_x_vw: f32,
    /// Hero logo translation (px)
    pub logo_x_px: f32,
    pub logo_y_px: f32,
    /// Hero image width (% of container)
    pub image_width_pct: f32,
    /// Marquee strip offset (vw)
    pub marquee_x_vw: f32,
    pub nav: NavBarState,
}

/// Navigation bar appearance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavBarState {
    /// The small navbar logo is shown and the bar gets a solid background
    pub logo_visible: bool,
}

/// Piecewise transforms for every hero property
#[derive(Clone, Debug)]
pub struct HeroTimeline {
    title_width: ScrollTransform,
    line_width: ScrollTransform,
    content_opacity: ScrollTransform,
    button_opacity: ScrollTransform,
    box_left_x: ScrollTransform,
    box_right_x: ScrollTransform,
    logo_x: ScrollTransform,
    logo_y: ScrollTransform,
    image_width: ScrollTransform,
    marquee_x: ScrollTransform,
    nav_logo_offset: f32,
}

impl HeroTimeline {
    pub fn new(config: &HeroConfig) -> Result<Self, SceneError> {
        Ok(Self {
            title_width: ScrollTransform::new(&[0.0, 0.2, 0.5], &[20.0, 30.0, 70.0])?,
            line_width: ScrollTransform::new(&[0.0, 0.4], &[52.0, 0.0])?,
            content_opacity: ScrollTransform::new(&[0.0, 0.4, 0.6], &[1.0, 1.0, 0.0])?,
            button_opacity: ScrollTransform::new(&[0.0, 0.03], &[1.0, 0.0])?,
            box_left_x: ScrollTransform::new(&[0.4, 0.5], &[-100.0, 0.0])?,
            box_right_x: ScrollTransform::new(&[0.5, 0.6], &[100.0, 0.0])?,
            logo_x: ScrollTransform::new(&[0.0, 0.4], &[0.0, -578.0])?,
            logo_y: ScrollTransform::new(&[0.0, 0.4], &[0.0, -396.0])?,
            image_width: ScrollTransform::new(&[0.0, 0.2], &[100.0 / 3.0, 100.0 / 32.0])?,
            marquee_x: ScrollTransform::new(&[0.2, 0.4], &[-800.0, -20.0])?,
            nav_logo_offset: config.nav_logo_offset,
        })
    }

    /// Sample every property.
    ///
    /// `page_progress` is the whole-page scroll progress; `scroll_y` and
    /// `hero_height` (px) decide the navbar state.
    pub fn sample(&self, page_progress: f32, scroll_y: f32, hero_height: f32) -> HeroFrame {
        let p = page_progress;
        let button_opacity = self.button_opacity.sample(p);

        HeroFrame {
            title_width_pct: self.title_width.sample(p),
            line_width_pct: self.line_width.sample(p),
            content_opacity: self.content_opacity.sample(p),
            button_opacity,
            buttons_hidden: button_opacity <= 0.0,
            box_left_x_vw: self.box_left_x.sample(p),
            box_right_x_vw: self.box_right_x.sample(p),
            logo_x_px: self.logo_x.sample(p),
            logo_y_px: self.logo_y.sample(p),
            image_width_pct: self.image_width.sample(p),
            marquee_x_vw: self.marquee_x.sample(p),
            nav: NavBarState {
                logo_visible: scroll_y > hero_height + self.nav_logo_offset,
            },
        }
    }
}
