//! # PlotKit Designer
//!
//! Drawing and editing of map annotation shapes: arrows, ellipses, free-hand
//! lines, markers, rectangles and stars.
//!
//! ## Core Components
//!
//! - **Model**: points, drag input, geometries, and one pure geometry
//!   strategy per shape type
//! - **Factory**: draw sessions that feed a gesture into a strategy and keep
//!   a live preview
//! - **Handles**: the editing overlay of a selected shape (bounding frame,
//!   delete handle, scale handle) and the per-type rules behind it
//! - **Modify**: the activate/deactivate/drag/delete state machine
//! - **Canvas**: an in-memory [`DrawingSurface`] with a viewport,
//!   hit-testing and a translate drag primitive
//! - **Plot**: tool selection, selection and gesture routing
//!
//! ## Architecture
//!
//! ```text
//! Plot
//!   ├── ShapeFactory ── DrawSession ── GeometryStrategy
//!   ├── SelectionManager
//!   └── ModifyController (one per shape)
//!         └── HandleSet ── DrawingSurface (Canvas + Viewport)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use plotkit_designer::{Plot, Point};
//!
//! let mut plot = Plot::new();
//! plot.plot("Rectangle").unwrap();
//! plot.begin_draw(Point::new(0.0, 0.0)).unwrap();
//! plot.extend_draw(Point::new(40.0, 20.0)).unwrap();
//! let id = plot.finish_draw().unwrap();
//!
//! plot.select(id);
//! assert_eq!(plot.canvas().overlay_count(), 3);
//! ```

pub mod canvas;
pub mod commands;
pub mod extent;
pub mod factory;
pub mod handles;
pub mod model;
pub mod modify;
pub mod plot;
pub mod selection_manager;
pub mod surface;
pub mod viewport;

pub use canvas::{
    BoundingFrame, Canvas, Feature, FrameStyle, Handle, HandleRole, TranslateEvent,
    TranslateInteraction,
};
pub use commands::{ModifyCommand, ModifyOutcome};
pub use extent::Extent;
pub use factory::{DrawSession, ShapeDefaults, ShapeFactory};
pub use handles::{HandleLayout, HandleSet, HandleSpec, OverlayStyle, ScaleRule};
pub use model::{
    DragInput, Geometry, GeometryStrategy, GestureKind, IconPresentation, Point, Shape,
    ShapeStyle, ShapeType,
};
pub use modify::{ModifyController, ModifySession};
pub use plot::Plot;
pub use selection_manager::{SelectionHit, SelectionManager};
pub use surface::DrawingSurface;
pub use viewport::Viewport;

pub use plotkit_core::{FeatureId, InteractionId};
