use super::{DragInput, Geometry, GeometryStrategy, GestureKind};
use crate::extent::Extent;

/// Axis-aligned box around every input point.
///
/// The ring is top-left, top-right, bottom-right, bottom-left and is closed
/// implicitly.
#[derive(Debug, Clone, Copy, Default)]
pub struct RectangleStrategy;

impl GeometryStrategy for RectangleStrategy {
    fn gesture(&self) -> GestureKind {
        GestureKind::FreehandBox
    }

    fn generate(&self, input: &DragInput) -> Geometry {
        let ring = Extent::bounding(input.points())
            .map(|extent| extent.corners().to_vec())
            .unwrap_or_default();
        Geometry::Polygon(vec![ring])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;

    #[test]
    fn test_rectangle_corners() {
        let input = DragInput::pair(Point::new(8.0, 1.0), Point::new(2.0, 6.0));
        let geometry = RectangleStrategy.generate(&input);
        assert_eq!(
            geometry.vertices(),
            &[
                Point::new(2.0, 6.0),
                Point::new(8.0, 6.0),
                Point::new(8.0, 1.0),
                Point::new(2.0, 1.0),
            ]
        );
    }

    #[test]
    fn test_rectangle_is_idempotent() {
        let input = DragInput::pair(Point::new(-3.0, 4.0), Point::new(5.0, -1.0));
        let first = RectangleStrategy.generate(&input);
        let again = RectangleStrategy
            .generate(&DragInput::from_points(first.vertices().to_vec()).unwrap());
        assert_eq!(first, again);
    }
}
