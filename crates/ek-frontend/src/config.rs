//! Application configuration
//!
//! Read once at startup from a RON file. The path comes from the `EK_CONFIG`
//! environment variable, or `enclosure-kit.ron` in the working directory.
//! A missing or unreadable file falls back to defaults.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use ek_core::{ExportOptions, ModelVariant};
use ek_renderer::{ConfigError, RendererConfig};
use serde::{Deserialize, Serialize};

/// Environment variable naming the configuration file
pub const CONFIG_ENV_VAR: &str = "EK_CONFIG";

/// Configuration file looked up when the environment variable is unset
pub const DEFAULT_CONFIG_FILE: &str = "enclosure-kit.ron";

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Previewer colors, lighting and view settings
    pub renderer: RendererConfig,
    /// Model shown at startup
    pub initial_variant: ModelVariant,
    /// File name proposed by the export dialog
    pub export_file_name: String,
    /// STL encoding and solid name
    pub export: ExportOptions,
    /// Initial window size in points
    pub window_size: [f32; 2],
    /// Dark egui visuals and dark renderer colors
    pub dark_mode: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            renderer: RendererConfig::default(),
            initial_variant: ModelVariant::default(),
            export_file_name: "model.stl".to_string(),
            export: ExportOptions::default(),
            window_size: [900.0, 700.0],
            dark_mode: false,
        }
    }
}

impl AppConfig {
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

    /// Load from the configured location, falling back to defaults
    pub fn load_or_default() -> Self {
        Self::load_from(&config_path(std::env::var_os(CONFIG_ENV_VAR)))
    }

    /// Load from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::load(path) {
            Ok(mut config) => {
                tracing::info!("Loaded config from {:?}", path);
                if config.dark_mode {
                    config.renderer.apply_dark_theme();
                }
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}

/// Configuration file path for an optional `EK_CONFIG` value
pub fn config_path(env_value: Option<OsString>) -> PathBuf {
    env_value
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}
