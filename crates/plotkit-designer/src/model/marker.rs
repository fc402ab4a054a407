use super::{DragInput, Geometry, GeometryStrategy, GestureKind};

/// Single point shown as an icon. Resizing changes the icon scale, not the
/// geometry.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerStrategy;

impl GeometryStrategy for MarkerStrategy {
    fn gesture(&self) -> GestureKind {
        GestureKind::Point
    }

    fn generate(&self, input: &DragInput) -> Geometry {
        Geometry::Point(input.first())
    }
}
