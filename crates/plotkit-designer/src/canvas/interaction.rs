//! Translate interactions: the drag primitive's registrations and events.

use smallvec::SmallVec;

use plotkit_core::{FeatureId, InteractionId};

use crate::model::Point;

/// Registration that moves a set of features together while dragged.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslateInteraction {
    /// Shape whose modify session registered this interaction.
    pub owner: FeatureId,
    /// Features moved by a drag.
    pub features: SmallVec<[FeatureId; 4]>,
    /// Features that may not start a drag even though they are moved.
    pub excluded: SmallVec<[FeatureId; 2]>,
}

impl TranslateInteraction {
    pub fn new(owner: FeatureId, features: impl IntoIterator<Item = FeatureId>) -> Self {
        Self {
            owner,
            features: features.into_iter().collect(),
            excluded: SmallVec::new(),
        }
    }

    pub fn with_filter(mut self, excluded: impl IntoIterator<Item = FeatureId>) -> Self {
        self.excluded = excluded.into_iter().collect();
        self
    }

    /// Whether a drag starting on `target` belongs to this interaction.
    pub fn accepts(&self, target: FeatureId) -> bool {
        self.features.contains(&target) && !self.excluded.contains(&target)
    }
}

/// One intermediate pointer position of a translate gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranslateEvent {
    pub interaction: InteractionId,
    pub owner: FeatureId,
    /// Current pointer coordinate in map space.
    pub coordinate: Point,
    /// Movement since the previous event.
    pub delta: (f64, f64),
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct ActiveDrag {
    pub interaction: InteractionId,
    pub last: Point,
}
