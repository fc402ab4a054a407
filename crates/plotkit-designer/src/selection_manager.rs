use plotkit_core::FeatureId;

use crate::canvas::{Canvas, Feature, HandleRole};
use crate::model::Point;
use crate::surface::DrawingSurface;

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionHit {
    /// The delete handle of the given shape.
    DeleteHandle(FeatureId),
    /// A frame or scale handle of the given shape.
    Overlay(FeatureId),
    Shape(FeatureId),
    Empty,
}

/// Tracks the single selected shape.
///
/// Selection is exclusive: selecting a shape replaces the previous
/// selection. Hit-testing is delegated to the [`Canvas`], which returns the
/// topmost feature, so a click inside a selected shape lands on its frame.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected_id: Option<FeatureId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use plotkit_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.selected_id(), None);
    /// ```
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    pub fn selected_id(&self) -> Option<FeatureId> {
        self.selected_id
    }

    /// Sets the selected shape ID. Does not touch modify sessions.
    pub fn set_selected_id(&mut self, id: Option<FeatureId>) {
        self.selected_id = id;
    }

    /// Clears the selection if it is `id`.
    pub fn forget(&mut self, id: FeatureId) {
        if self.selected_id == Some(id) {
            self.selected_id = None;
        }
    }

    /// Classifies the topmost feature under `point`.
    ///
    /// # Arguments
    ///
    /// * `canvas` - The surface to hit-test
    /// * `point` - Click position in map coordinates
    /// * `tolerance` - Hit tolerance in map units
    pub fn hit_test(canvas: &Canvas, point: Point, tolerance: f64) -> SelectionHit {
        let Some(feature) = canvas
            .feature_at(point, tolerance)
            .and_then(|id| canvas.feature(id))
        else {
            return SelectionHit::Empty;
        };

        match feature {
            Feature::Handle(handle) if handle.role == HandleRole::Delete => {
                SelectionHit::DeleteHandle(handle.owner)
            }
            Feature::Handle(handle) => SelectionHit::Overlay(handle.owner),
            Feature::Frame(frame) => SelectionHit::Overlay(frame.owner),
            Feature::Shape(shape) => SelectionHit::Shape(shape.id()),
        }
    }
}
