//! Error handling for PlotKit
//!
//! The geometry core absorbs degenerate input and stale state instead of
//! failing, so the error surface is narrow:
//! - Shape errors (orchestration boundary: unknown tool names, missing shapes)
//! - I/O errors
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::types::FeatureId;

/// Shape error type
///
/// Raised by the orchestration layer, never by geometry generation or the
/// modify state machine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// Requested shape type is not one of the supported annotation shapes
    #[error("Unknown shape type: {name}")]
    UnknownShapeType {
        /// The name that failed to parse.
        name: String,
    },

    /// No shape with the given id exists on the surface
    #[error("Shape {id} not found")]
    ShapeNotFound {
        /// The missing feature id.
        id: FeatureId,
    },

    /// A draw gesture was started with no active shape tool
    #[error("No active shape tool")]
    NoActiveTool,

    /// A draw update arrived without a draw gesture in progress
    #[error("No draw gesture in progress")]
    NoDrawInProgress,
}

/// Main error type for PlotKit
///
/// A unified error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Shape error
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a shape error
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Error::Shape(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
