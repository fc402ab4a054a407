use std::f64::consts::PI;

use super::{DragInput, Geometry, GeometryStrategy, GestureKind, Point};

/// Vertices before the closing duplicate.
pub const STAR_POINTS: usize = 12;
/// Vertex index of the outer point opposite the first vertex. It lands on
/// the drag's edge point.
pub const STAR_SCALE_VERTEX: usize = 6;

/// Six-pointed star around a center, sized by the distance to the edge point.
#[derive(Debug, Clone, Copy, Default)]
pub struct StarStrategy;

impl StarStrategy {
    pub fn generate_points(center: Point, edge: Point) -> Vec<Point> {
        let dx = center.x - edge.x;
        let dy = center.y - edge.y;
        let radius = (dx * dx + dy * dy).sqrt();
        if radius == 0.0 {
            tracing::debug!("Zero-radius star at ({}, {})", center.x, center.y);
        }
        let rotation = dy.atan2(dx);

        let mut points: Vec<Point> = (0..STAR_POINTS)
            .map(|i| {
                let angle = rotation + (i as f64 * 2.0 * PI) / STAR_POINTS as f64;
                let fraction = if i % 2 == 0 { 1.0 } else { 0.5 };
                center.offset(
                    radius * fraction * angle.cos(),
                    radius * fraction * angle.sin(),
                )
            })
            .collect();
        points.push(points[0]);
        points
    }
}

impl GeometryStrategy for StarStrategy {
    fn gesture(&self) -> GestureKind {
        GestureKind::FreehandBox
    }

    fn generate(&self, input: &DragInput) -> Geometry {
        Geometry::Polygon(vec![Self::generate_points(input.first(), input.last())])
    }
}
