use super::{DragInput, Geometry, GeometryStrategy, GestureKind};

/// Freehand polyline; the input is kept as drawn.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreeLineStrategy;

impl GeometryStrategy for FreeLineStrategy {
    fn gesture(&self) -> GestureKind {
        GestureKind::FreehandPolyline
    }

    fn generate(&self, input: &DragInput) -> Geometry {
        Geometry::LineString(input.points().to_vec())
    }
}
