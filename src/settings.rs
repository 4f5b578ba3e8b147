//! Render settings
//!
//! Plain configuration consumed by the caster. Built in code (`Default`,
//! `from_preset`) or loaded from JSON.

use std::f64::consts::FRAC_PI_4;

use serde::{Deserialize, Serialize};

use crate::HyperError;
use crate::consts::{DEFAULT_FOV, PRIMARY_RAY_MAX_DISTANCE, PRIMARY_RAY_STEPS, SHADOW_RAY_STEPS};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Tiles a column ray may cross
    pub fn primary_steps(&self) -> u32 {
        match self {
            QualityPreset::Low => 4,
            QualityPreset::Medium => PRIMARY_RAY_STEPS,
            QualityPreset::High => 8,
        }
    }

    /// Tiles a shadow ray may cross
    pub fn shadow_steps(&self) -> u32 {
        match self {
            QualityPreset::Low => 2,
            QualityPreset::Medium => SHADOW_RAY_STEPS,
            QualityPreset::High => 4,
        }
    }

    /// Whether to sample ground shadows at all
    pub fn shadows_enabled(&self) -> bool {
        match self {
            QualityPreset::Low => false,
            QualityPreset::Medium => true,
            QualityPreset::High => true,
        }
    }

    /// Hops of surroundings to enumerate for the minimap
    pub fn visible_depth(&self) -> usize {
        match self {
            QualityPreset::Low => 2,
            QualityPreset::Medium => 3,
            QualityPreset::High => 4,
        }
    }
}

/// Directional light, angles in radians
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    /// Heading of the light in the ground plane
    pub horizontal: f64,
    /// Elevation above the ground
    pub vertical: f64,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            horizontal: FRAC_PI_4,
            vertical: FRAC_PI_4,
        }
    }
}

/// Caster configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Step budgets and shadow sampling
    pub quality: QualityPreset,

    // === Viewport ===
    /// Horizontal field of view (radians)
    pub fov: f64,
    /// Columns (one ray each)
    pub width: u32,
    /// Rows; the lower half is sampled for ground shadows
    pub height: u32,

    // === Scene ===
    pub camera_height: f64,
    pub wall_height: f64,
    pub light: Light,
    /// Exponential fog coefficient per unit of hyperbolic distance
    pub fog_density: f64,
    /// Distance cap for column rays
    pub max_distance: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,

            // Viewport
            fov: DEFAULT_FOV,
            width: 160,
            height: 80,

            // Scene
            camera_height: 0.1,
            wall_height: 0.3,
            light: Light::default(),
            fog_density: 0.9,
            max_distance: PRIMARY_RAY_MAX_DISTANCE,
        }
    }
}

impl RenderSettings {
    /// Create settings from a quality preset (applies preset defaults)
    pub fn from_preset(preset: QualityPreset) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    pub fn apply_preset(&mut self, preset: QualityPreset) {
        self.quality = preset;
    }

    /// Parse and validate settings from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, HyperError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        log::info!(
            "Loaded render settings: {}x{}, quality {}",
            settings.width,
            settings.height,
            settings.quality.as_str()
        );
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, HyperError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), HyperError> {
        if self.width == 0 || self.height == 0 {
            return Err(HyperError::Settings(format!(
                "viewport must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.fov > 0.0 && self.fov < std::f64::consts::PI) {
            return Err(HyperError::Settings(format!(
                "fov must be in (0, π), got {}",
                self.fov
            )));
        }
        if self.camera_height <= 0.0 || self.wall_height <= 0.0 {
            return Err(HyperError::Settings(
                "camera and wall heights must be positive".to_string(),
            ));
        }
        if !(self.light.vertical > 0.0 && self.light.vertical < std::f64::consts::FRAC_PI_2) {
            return Err(HyperError::Settings(format!(
                "light elevation must be in (0, π/2), got {}",
                self.light.vertical
            )));
        }
        Ok(())
    }

    /// Ground rows sampled for shadows per column
    pub fn shadow_rows(&self) -> u32 {
        if self.quality.shadows_enabled() {
            self.height / 2
        } else {
            0
        }
    }

    /// Elevation angle of the lowest sampled row (looking straight down is 0)
    pub fn min_vertical_angle(&self) -> f64 {
        let vertical_fov = self.fov * (self.height as f64 / self.width as f64);
        std::f64::consts::FRAC_PI_2 - vertical_fov / 2.0
    }

    /// Ray angle of screen column `i`
    pub fn column_angle(&self, i: u32) -> f64 {
        self.fov * (0.5 - i as f64 / self.width as f64) + std::f64::consts::FRAC_PI_2
    }
}
