//! Messages handled by a modify session and what they did.

use plotkit_core::InteractionId;

use crate::canvas::TranslateEvent;
use crate::model::Shape;

/// Input to [`ModifyController::apply`](crate::modify::ModifyController::apply).
#[derive(Debug, Clone, PartialEq)]
pub enum ModifyCommand {
    /// An intermediate pointer position of a translate gesture.
    Translating(TranslateEvent),
    /// The pointer was released at the end of a translate gesture.
    TranslateEnded(InteractionId),
    /// The delete handle was activated.
    DeleteRequested,
}

#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::large_enum_variant)]
pub enum ModifyOutcome {
    /// Stale or foreign message; nothing changed.
    Unchanged,
    /// Shape and overlay were moved or recomputed.
    Updated,
    /// The shape was removed from the surface together with its overlay.
    Removed(Shape),
}

impl ModifyOutcome {
    pub fn is_removed(&self) -> bool {
        matches!(self, ModifyOutcome::Removed(_))
    }
}
