//! Identifier newtypes.
//!
//! Features (shapes and their editing overlays) and translate interactions
//! are addressed by opaque ids so that overlays never hold references into
//! the surface that owns them.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifies one feature on a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FeatureId(Uuid);

impl FeatureId {
    /// Create a new unique feature id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FeatureId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Feature({})", &self.0.to_string()[..8])
    }
}

/// Handle for a registered translate interaction.
///
/// Returned on registration and used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InteractionId(Uuid);

impl InteractionId {
    /// Create a new unique interaction id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InteractionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InteractionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Interaction({})", &self.0.to_string()[..8])
    }
}
