//! # PlotKit
//!
//! Drawing and handle-based reshaping of annotation shapes on an
//! interactive map surface.
//!
//! ## Architecture
//!
//! PlotKit is organized as a workspace with multiple crates:
//!
//! 1. **plotkit-core** - Error types and feature/interaction identifiers
//! 2. **plotkit-settings** - Styles, icons, hit tolerance and viewport configuration
//! 3. **plotkit-designer** - Geometry strategies, draw sessions, handle sets,
//!    modify sessions, the in-memory canvas, and the `Plot` orchestration layer
//! 4. **plotkit** - This facade crate
//!
//! ## Shapes
//!
//! - **Arrow**: shaft with two barbs, scaled from its start point
//! - **Ellipse** / **Rectangle**: box shapes, scaled from their top-left corner
//! - **FreeLine**: freehand polyline, scaled about its top-left corner
//! - **Marker**: icon on a point, scaled in screen pixels
//! - **Star**: six-pointed star, scaled about its center

pub use plotkit_designer as designer;
pub use plotkit_settings as settings;

pub use plotkit_core::{Error, FeatureId, InteractionId, Result, ShapeError};

pub use plotkit_designer::{
    BoundingFrame, Canvas, DragInput, DrawSession, DrawingSurface, Extent, Feature, Geometry,
    GeometryStrategy, GestureKind, Handle, HandleRole, HandleSet, HandleSpec, IconPresentation,
    ModifyCommand, ModifyController, ModifyOutcome, Plot, Point, SelectionManager, Shape,
    ShapeDefaults, ShapeFactory, ShapeStyle, ShapeType, TranslateEvent, TranslateInteraction,
    Viewport,
};

pub use plotkit_settings::{Config, SettingsError, SettingsResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support, defaulting to `info`
///
/// Logs the library version once the subscriber is installed.
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::info!("PlotKit {} (built {})", VERSION, BUILD_DATE);
    Ok(())
}
