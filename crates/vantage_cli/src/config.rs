//! Vantage configuration file handling
//!
//! `vantage.toml` holds the scene tuning (`[scene]`), the page geometry used
//! for replays (`[page]`) and an optional clip description (`[clip]`). Every
//! field has a default, so an empty file is valid.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use vantage_animation::SectionBounds;
use vantage_scene::{AnimationClip, PageLayout, SceneConfig, Viewport};

pub const CONFIG_FILE: &str = "vantage.toml";

/// Top-level configuration stored in vantage.toml
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VantageConfig {
    #[serde(default)]
    pub scene: SceneConfig,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub clip: Option<ClipConfig>,
}

/// Page geometry in CSS pixels
#[derive(Debug, Deserialize, Serialize)]
pub struct PageConfig {
    #[serde(default = "default_document_height")]
    pub document_height: f32,
    #[serde(default = "default_hero_height")]
    pub hero_height: f32,
    /// Top of the section that drives the 3D scene
    #[serde(default = "default_section_top")]
    pub section_top: f32,
    #[serde(default = "default_section_height")]
    pub section_height: f32,
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f32,
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f32,
}

fn default_document_height() -> f32 {
    6000.0
}

fn default_hero_height() -> f32 {
    900.0
}

fn default_section_top() -> f32 {
    900.0
}

fn default_section_height() -> f32 {
    3000.0
}

fn default_viewport_width() -> f32 {
    1280.0
}

fn default_viewport_height() -> f32 {
    800.0
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            document_height: default_document_height(),
            hero_height: default_hero_height(),
            section_top: default_section_top(),
            section_height: default_section_height(),
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
        }
    }
}

impl PageConfig {
    pub fn layout(&self) -> PageLayout {
        PageLayout {
            document_height: self.document_height,
            hero_height: self.hero_height,
            section: SectionBounds::new(self.section_top, self.section_height),
        }
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport_width, self.viewport_height)
    }

    /// Largest reachable scroll offset
    pub fn max_scroll(&self) -> f32 {
        (self.document_height - self.viewport_height).max(0.0)
    }
}

/// Animation clip bound to the model
#[derive(Debug, Deserialize, Serialize)]
pub struct ClipConfig {
    #[serde(default = "default_clip_name")]
    pub name: String,
    pub duration: f32,
}

fn default_clip_name() -> String {
    "Action".to_string()
}

impl ClipConfig {
    pub fn to_clip(&self) -> Result<AnimationClip> {
        AnimationClip::new(self.name.clone(), self.duration)
            .with_context(|| format!("Invalid clip '{}'", self.name))
    }
}

impl VantageConfig {
    /// Load from an explicit file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Load `path` if given, else `vantage.toml` from `dir` if present, else
    /// the defaults
    pub fn load_or_default(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let local = dir.join(CONFIG_FILE);
        if local.exists() {
            Self::load(&local)
        } else {
            Ok(Self::default())
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Check everything the animator would reject on mount
    pub fn validate(&self) -> Result<()> {
        self.scene.validate().context("Invalid scene configuration")?;

        let page = &self.page;
        let extents = [
            ("page.document_height", page.document_height),
            ("page.section_height", page.section_height),
            ("page.viewport_width", page.viewport_width),
            ("page.viewport_height", page.viewport_height),
        ];
        for (name, value) in extents {
            if !(value.is_finite() && value > 0.0) {
                anyhow::bail!("{} must be positive, got {}", name, value);
            }
        }
        if !page.hero_height.is_finite() || !page.section_top.is_finite() {
            anyhow::bail!("page offsets must be finite");
        }

        if let Some(clip) = &self.clip {
            clip.to_clip()?;
        }
        Ok(())
    }

    pub fn clip(&self) -> Result<Option<AnimationClip>> {
        self.clip.as_ref().map(ClipConfig::to_clip).transpose()
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
