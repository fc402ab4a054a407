use std::f64::consts::PI;

use super::{DragInput, Geometry, GeometryStrategy, GestureKind, Point};

/// Angular steps around the ellipse; the ring has one more point.
pub const ELLIPSE_SEGMENTS: usize = 100;

/// Axis-aligned ellipse inscribed in the box spanned by two corners.
#[derive(Debug, Clone, Copy, Default)]
pub struct EllipseStrategy;

impl EllipseStrategy {
    pub fn generate_points(center: Point, major_radius: f64, minor_radius: f64) -> Vec<Point> {
        (0..=ELLIPSE_SEGMENTS)
            .map(|i| {
                let angle = PI * 2.0 * i as f64 / ELLIPSE_SEGMENTS as f64;
                Point::new(
                    center.x + major_radius * angle.cos(),
                    center.y + minor_radius * angle.sin(),
                )
            })
            .collect()
    }
}

impl GeometryStrategy for EllipseStrategy {
    fn gesture(&self) -> GestureKind {
        GestureKind::FreehandBox
    }

    fn generate(&self, input: &DragInput) -> Geometry {
        let (start, end) = (input.first(), input.last());
        let center = start.midpoint(&end);
        let major_radius = ((start.x - end.x) / 2.0).abs();
        let minor_radius = ((start.y - end.y) / 2.0).abs();
        Geometry::Polygon(vec![Self::generate_points(center, major_radius, minor_radius)])
    }
}
