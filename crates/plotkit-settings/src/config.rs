//! Configuration for shape and overlay presentation.
//!
//! Configuration is organized into logical sections:
//! - Layer style applied to finished shapes
//! - Draw style used for the live preview while dragging
//! - Frame style for the dashed bounding box shown while editing
//! - Handle icons for the delete and scale handles
//! - Marker icon and its native pixel size
//! - Selection hit tolerance and viewport size

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Stroke style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeSettings {
    /// CSS color string
    pub color: String,
    /// Line width in pixels
    pub width: f64,
    /// Dash pattern in pixels, empty for a solid line
    #[serde(default)]
    pub line_dash: Vec<f64>,
}

impl StrokeSettings {
    /// Solid stroke with the given color and width
    pub fn solid(color: &str, width: f64) -> Self {
        Self {
            color: color.to_string(),
            width,
            line_dash: Vec::new(),
        }
    }
}

/// Style of finished shapes on the vector layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSettings {
    pub fill: String,
    pub stroke: StrokeSettings,
    /// Radius of the circle drawn for point geometries without an icon
    pub point_radius: f64,
    pub point_fill: String,
}

impl Default for LayerSettings {
    fn default() -> Self {
        Self {
            fill: "rgba(255, 255, 255, 0.2)".to_string(),
            stroke: StrokeSettings::solid("#00f", 4.0),
            point_radius: 32.0,
            point_fill: "#ffcc33".to_string(),
        }
    }
}

/// Style of the in-progress geometry while drawing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawSettings {
    pub stroke: StrokeSettings,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            stroke: StrokeSettings::solid("#f00", 2.0),
        }
    }
}

/// Style of the dashed bounding frame shown while a shape is being modified
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSettings {
    pub fill: String,
    pub stroke: StrokeSettings,
}

impl Default for FrameSettings {
    fn default() -> Self {
        Self {
            fill: "rgba(0, 100, 0, 0.1)".to_string(),
            stroke: StrokeSettings {
                color: "#f00".to_string(),
                width: 1.0,
                line_dash: vec![5.0, 5.0, 5.0, 5.0],
            },
        }
    }
}

/// Icons of the editing handles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandleSettings {
    pub delete_icon: String,
    pub scale_icon: String,
}

impl Default for HandleSettings {
    fn default() -> Self {
        Self {
            delete_icon: "close.png".to_string(),
            scale_icon: "scale.png".to_string(),
        }
    }
}

/// Marker icon presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSettings {
    pub icon: String,
    /// Native icon width in pixels
    pub icon_width: f64,
    /// Native icon height in pixels
    pub icon_height: f64,
    /// Scale applied when the marker is placed
    pub initial_scale: f64,
}

impl Default for MarkerSettings {
    fn default() -> Self {
        Self {
            icon: "cat.png".to_string(),
            icon_width: 32.0,
            icon_height: 32.0,
            initial_scale: 1.0,
        }
    }
}

/// Selection behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionSettings {
    /// Hit tolerance in pixels
    pub hit_tolerance: f64,
}

impl Default for SelectionSettings {
    fn default() -> Self {
        Self {
            hit_tolerance: 10.0,
        }
    }
}

/// Size of the drawing surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportSettings {
    pub width: f64,
    pub height: f64,
    pub zoom: f64,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            zoom: 1.0,
        }
    }
}

/// Complete configuration
///
/// Aggregates all settings sections and provides file I/O operations.
/// Missing sections fall back to their defaults when loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub layer: LayerSettings,
    pub draw: DrawSettings,
    pub frame: FrameSettings,
    pub handles: HandleSettings,
    pub marker: MarkerSettings,
    pub selection: SelectionSettings,
    pub viewport: ViewportSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config location, e.g. `~/.config/plotkit/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("plotkit").join("config.json"))
    }

    /// Load config from file (JSON or TOML, chosen by extension)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML, chosen by extension)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let strokes = [
            ("layer.stroke.width", self.layer.stroke.width),
            ("draw.stroke.width", self.draw.stroke.width),
            ("frame.stroke.width", self.frame.stroke.width),
        ];
        for (key, width) in strokes {
            if !(width > 0.0) {
                return Err(SettingsError::invalid(key, "must be > 0"));
            }
        }

        if !(self.layer.point_radius > 0.0) {
            return Err(SettingsError::invalid("layer.point_radius", "must be > 0"));
        }

        if !(self.marker.icon_width > 0.0) || !(self.marker.icon_height > 0.0) {
            return Err(SettingsError::invalid("marker.icon_size", "must be > 0"));
        }

        if !(self.marker.initial_scale > 0.0) {
            return Err(SettingsError::invalid("marker.initial_scale", "must be > 0"));
        }

        if !(self.selection.hit_tolerance >= 0.0) {
            return Err(SettingsError::invalid(
                "selection.hit_tolerance",
                "must be >= 0",
            ));
        }

        if !(self.viewport.width > 0.0) || !(self.viewport.height > 0.0) {
            return Err(SettingsError::invalid("viewport.size", "must be > 0"));
        }

        if !(self.viewport.zoom > 0.0) {
            return Err(SettingsError::invalid("viewport.zoom", "must be > 0"));
        }

        Ok(())
    }
}

enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
