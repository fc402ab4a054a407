//! In-memory drawing surface.
//!
//! Holds shapes and editing overlays in draw order, converts between pixel
//! and map coordinates through a [`Viewport`], hit-tests features, and
//! provides the translate drag primitive that modify sessions register with.

mod interaction;
mod store;
mod types;

pub use interaction::{TranslateEvent, TranslateInteraction};
pub use store::FeatureStore;
pub use types::{BoundingFrame, Feature, FrameStyle, Handle, HandleRole};

use plotkit_core::{FeatureId, InteractionId};
use plotkit_settings::ViewportSettings;

use crate::model::{Point, Shape};
use crate::surface::DrawingSurface;
use crate::viewport::Viewport;
use interaction::ActiveDrag;

/// Surface state: features, registered interactions, and viewport.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    store: FeatureStore,
    interactions: Vec<(InteractionId, TranslateInteraction)>,
    drag: Option<ActiveDrag>,
    viewport: Viewport,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_viewport(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    pub fn from_settings(settings: &ViewportSettings) -> Self {
        Self::with_viewport(Viewport::from_settings(settings))
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Shapes and overlays.
    pub fn feature_count(&self) -> usize {
        self.store.len()
    }

    pub fn shape_count(&self) -> usize {
        self.shapes().count()
    }

    pub fn overlay_count(&self) -> usize {
        self.store.iter().filter(|f| f.is_overlay()).count()
    }

    pub fn features(&self) -> impl DoubleEndedIterator<Item = &Feature> {
        self.store.iter()
    }

    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.store.iter().filter_map(Feature::as_shape)
    }

    pub fn interaction_count(&self) -> usize {
        self.interactions.len()
    }

    pub fn interaction(&self, id: InteractionId) -> Option<&TranslateInteraction> {
        self.interactions
            .iter()
            .find(|(other, _)| *other == id)
            .map(|(_, interaction)| interaction)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Removes every feature and interaction.
    pub fn clear(&mut self) {
        self.store.clear();
        self.interactions.clear();
        self.drag = None;
    }

    /// Topmost feature under `point`, tolerance in map units.
    pub fn feature_at(&self, point: Point, tolerance: f64) -> Option<FeatureId> {
        self.hits(point, tolerance).next()
    }

    /// Topmost shape under `point`, ignoring overlays.
    pub fn shape_at(&self, point: Point, tolerance: f64) -> Option<FeatureId> {
        self.hits(point, tolerance)
            .find(|id| self.store.get(*id).is_some_and(|f| !f.is_overlay()))
    }

    fn hits(&self, point: Point, tolerance: f64) -> impl Iterator<Item = FeatureId> + '_ {
        self.store
            .iter()
            .rev()
            .filter(move |feature| self.hit(feature, point, tolerance))
            .map(Feature::id)
    }

    fn hit(&self, feature: &Feature, point: Point, tolerance: f64) -> bool {
        match feature {
            Feature::Handle(handle) => handle.position.distance_to(&point) <= tolerance,
            Feature::Frame(frame) => frame.extent.contains(point, 0.0),
            Feature::Shape(shape) => match (&shape.icon, shape.geometry().vertex(0)) {
                (Some(icon), Some(anchor)) => {
                    self.icon_extent(anchor, icon).contains(point, tolerance)
                }
                _ => shape.geometry().contains_point(point, tolerance),
            },
        }
    }

    /// Starts a translate gesture on the topmost feature under `at`.
    ///
    /// Only the topmost feature is considered, so a filtered handle never
    /// lets the drag fall through to a feature beneath it. The most
    /// recently registered interaction that accepts the target wins.
    pub fn pointer_down(&mut self, at: Point, tolerance: f64) -> Option<InteractionId> {
        let target = self.feature_at(at, tolerance)?;
        let interaction = self
            .interactions
            .iter()
            .rev()
            .find(|(_, interaction)| interaction.accepts(target))
            .map(|(id, _)| *id)?;

        tracing::trace!("Translate {} started at ({}, {})", interaction, at.x, at.y);
        self.drag = Some(ActiveDrag {
            interaction,
            last: at,
        });
        Some(interaction)
    }

    /// Moves every feature of the active interaction to follow the pointer.
    pub fn pointer_move(&mut self, to: Point) -> Option<TranslateEvent> {
        let drag = self.drag?;
        let Some(interaction) = self.interaction(drag.interaction).cloned() else {
            self.drag = None;
            return None;
        };

        let delta = (to.x - drag.last.x, to.y - drag.last.y);
        for id in &interaction.features {
            if let Some(feature) = self.store.get_mut(*id) {
                feature.translate(delta.0, delta.1);
            }
        }
        self.drag = Some(ActiveDrag {
            interaction: drag.interaction,
            last: to,
        });

        Some(TranslateEvent {
            interaction: drag.interaction,
            owner: interaction.owner,
            coordinate: to,
            delta,
        })
    }

    /// Ends the current gesture.
    pub fn pointer_up(&mut self) -> Option<InteractionId> {
        self.drag.take().map(|drag| drag.interaction)
    }
}

impl DrawingSurface for Canvas {
    fn add_feature(&mut self, feature: Feature) {
        self.store.insert(feature);
    }

    fn remove_feature(&mut self, id: FeatureId) -> Option<Feature> {
        self.store.remove(id)
    }

    fn feature(&self, id: FeatureId) -> Option<&Feature> {
        self.store.get(id)
    }

    fn feature_mut(&mut self, id: FeatureId) -> Option<&mut Feature> {
        self.store.get_mut(id)
    }

    fn pixel_from_coordinate(&self, coordinate: Point) -> Point {
        self.viewport.map_to_pixel(coordinate)
    }

    fn coordinate_from_pixel(&self, pixel: Point) -> Point {
        self.viewport.pixel_to_map(pixel)
    }

    fn add_interaction(&mut self, interaction: TranslateInteraction) -> InteractionId {
        let id = InteractionId::new();
        self.interactions.push((id, interaction));
        id
    }

    fn remove_interaction(&mut self, id: InteractionId) -> bool {
        let before = self.interactions.len();
        self.interactions.retain(|(other, _)| *other != id);
        if self.drag.is_some_and(|drag| drag.interaction == id) {
            self.drag = None;
        }
        self.interactions.len() != before
    }
}
