//! Renderer configuration structures
//!
//! This module provides configurable settings for the renderer that can be
//! serialized and loaded from RON configuration files.

use std::path::Path;

use ek_core::Rgb;
use serde::{Deserialize, Serialize};

/// Colors used by the previewer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorConfig {
    /// Canvas clear color
    pub background: Rgb,
    /// Wireframe edges of additive triangles
    pub additive_edge: Rgb,
    /// Wireframe edges of subtractive triangles
    pub subtractive_edge: Rgb,
    /// Boundary outline drawn over solid faces
    pub outline: Rgb,
    /// Cross drawn at the model origin
    pub origin_marker: Rgb,
    /// X axis
    pub x_axis: Rgb,
    /// Y axis
    pub y_axis: Rgb,
    /// Z axis
    pub z_axis: Rgb,
    /// Rotation / scale read-out
    pub overlay_text: Rgb,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::light()
    }
}

impl ColorConfig {
    /// White background with black lines
    pub fn light() -> Self {
        Self {
            background: Rgb::WHITE,
            additive_edge: Rgb::BLACK,
            subtractive_edge: Rgb::RED,
            outline: Rgb::BLACK,
            origin_marker: Rgb::RED,
            x_axis: Rgb::RED,
            y_axis: Rgb::GREEN,
            z_axis: Rgb::BLUE,
            overlay_text: Rgb::BLACK,
        }
    }

    /// Dark background with light lines
    pub fn dark() -> Self {
        Self {
            background: Rgb::new(38, 38, 46),
            additive_edge: Rgb::new(220, 220, 220),
            outline: Rgb::new(220, 220, 220),
            overlay_text: Rgb::new(220, 220, 220),
            ..Self::light()
        }
    }
}

/// Flat shading configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LightingConfig {
    /// Direction towards the light (normalized before use)
    pub direction: [f64; 3],
    /// Brightness of faces turned away from the light, in [0, 1]
    pub ambient: f64,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            direction: [0.0, 0.0, 1.0],
            ambient: 0.2,
        }
    }
}

/// Initial view and interaction settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewConfig {
    /// Initial rotation about the vertical axis, in degrees
    pub initial_yaw: f64,
    /// Initial rotation about the horizontal axis, in degrees
    pub initial_pitch: f64,
    /// Initial pixels per model unit
    pub initial_scale: f64,
    /// Smallest allowed scale
    pub min_scale: f64,
    /// Largest allowed scale
    pub max_scale: f64,
    /// Degrees of rotation per pixel dragged
    pub drag_sensitivity: f64,
    /// Scale factor per wheel notch
    pub zoom_factor: f64,
    /// Interval between change checks, in milliseconds
    pub repaint_interval_ms: u64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            initial_yaw: -30.0,
            initial_pitch: 20.0,
            initial_scale: 10.0,
            min_scale: 1.0,
            max_scale: 100.0,
            drag_sensitivity: 0.5,
            zoom_factor: 1.1,
            repaint_interval_ms: 16,
        }
    }
}

/// Origin marker and axis geometry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReferenceConfig {
    /// Axis length in model units
    pub axis_length: f64,
    /// Half-size of the origin cross, in pixels
    pub marker_size: i32,
    /// Top-left anchor of the overlay text, in pixels
    pub overlay_position: [i32; 2],
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            axis_length: 50.0,
            marker_size: 10,
            overlay_position: [10, 20],
        }
    }
}

/// Complete renderer configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RendererConfig {
    /// Color settings
    #[serde(default)]
    pub colors: ColorConfig,
    /// Shading settings
    #[serde(default)]
    pub lighting: LightingConfig,
    /// View settings
    #[serde(default)]
    pub view: ViewConfig,
    /// Origin marker and axes
    #[serde(default)]
    pub reference: ReferenceConfig,
}

impl RendererConfig {
    /// Create a new renderer configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply dark theme colors
    pub fn apply_dark_theme(&mut self) {
        self.colors = ColorConfig::dark();
    }

    /// Apply light theme colors
    pub fn apply_light_theme(&mut self) {
        self.colors = ColorConfig::light();
    }

    /// Parse from RON text
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        ron::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize to pretty RON text
    pub fn to_ron(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_ron(&content)
    }

    /// Save to a RON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        std::fs::write(path.as_ref(), self.to_ron()?).map_err(|e| ConfigError::Io(e.to_string()))
    }
}

/// Configuration loading errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read or written
    #[error("IO error: {0}")]
    Io(String),
    /// Text is not valid configuration RON
    #[error("Parse error: {0}")]
    Parse(String),
    /// Configuration could not be serialized
    #[error("Serialize error: {0}")]
    Serialize(String),
}
