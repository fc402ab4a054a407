//! The drawing surface consumed by the editing core.
//!
//! A host (map engine, canvas widget, test double) implements
//! [`DrawingSurface`]; the modify controller receives it as an explicit
//! parameter for every operation.

use plotkit_core::{FeatureId, InteractionId};

use crate::canvas::{Feature, TranslateInteraction};
use crate::extent::Extent;
use crate::model::{IconPresentation, Point, Shape};

pub trait DrawingSurface {
    fn add_feature(&mut self, feature: Feature);

    fn remove_feature(&mut self, id: FeatureId) -> Option<Feature>;

    fn feature(&self, id: FeatureId) -> Option<&Feature>;

    fn feature_mut(&mut self, id: FeatureId) -> Option<&mut Feature>;

    fn pixel_from_coordinate(&self, coordinate: Point) -> Point;

    fn coordinate_from_pixel(&self, pixel: Point) -> Point;

    fn add_interaction(&mut self, interaction: TranslateInteraction) -> InteractionId;

    /// Returns `false` when the interaction was not registered.
    fn remove_interaction(&mut self, id: InteractionId) -> bool;

    fn shape(&self, id: FeatureId) -> Option<&Shape> {
        self.feature(id).and_then(Feature::as_shape)
    }

    fn shape_mut(&mut self, id: FeatureId) -> Option<&mut Shape> {
        match self.feature_mut(id) {
            Some(Feature::Shape(shape)) => Some(shape),
            _ => None,
        }
    }

    fn move_handle(&mut self, id: FeatureId, position: Point) {
        if let Some(Feature::Handle(handle)) = self.feature_mut(id) {
            handle.position = position;
        }
    }

    fn set_frame_extent(&mut self, id: FeatureId, extent: Extent) {
        if let Some(Feature::Frame(frame)) = self.feature_mut(id) {
            frame.extent = extent;
        }
    }

    /// Map extent covered by an icon centred on `anchor`.
    ///
    /// The icon box is laid out in pixels and its corners are converted
    /// back to map coordinates.
    fn icon_extent(&self, anchor: Point, icon: &IconPresentation) -> Extent {
        let center = self.pixel_from_coordinate(anchor);
        let (width, height) = icon.pixel_size();
        let a = Point::new(center.x - width / 2.0, center.y - height / 2.0);
        let b = Point::new(center.x + width / 2.0, center.y + height / 2.0);
        Extent::from_corners(self.coordinate_from_pixel(a), self.coordinate_from_pixel(b))
    }
}
