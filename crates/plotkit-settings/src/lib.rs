//! Configuration and settings management for PlotKit
//!
//! Holds the visual styles applied to shapes and editing overlays, the
//! marker icon, and the selection hit tolerance. Configuration files may be
//! JSON or TOML.

pub mod config;
pub mod error;

pub use config::{
    Config, DrawSettings, FrameSettings, HandleSettings, LayerSettings, MarkerSettings,
    SelectionSettings, StrokeSettings, ViewportSettings,
};
pub use error::{SettingsError, SettingsResult};
