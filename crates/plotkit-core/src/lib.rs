//! # PlotKit Core
//!
//! Core types and error handling shared by the PlotKit crates.
//! Provides the identifier newtypes used for features on the drawing
//! surface and for registered drag interactions.

pub mod error;
pub mod types;

pub use error::{Error, Result, ShapeError};
pub use types::{FeatureId, InteractionId};
