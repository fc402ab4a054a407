//! Common type definitions.

mod ids;

pub use ids::{FeatureId, InteractionId};
