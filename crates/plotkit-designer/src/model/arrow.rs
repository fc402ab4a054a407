use std::f64::consts::PI;

use super::{DragInput, Geometry, GeometryStrategy, GestureKind, Point};

/// Upper bound on the barb length in map units.
pub const MAX_ARROW_LENGTH: f64 = 3_000_000.0;
/// Barb length is the shaft length divided by this.
pub const ARROW_LENGTH_SCALE: f64 = 5.0;
/// Angle between the shaft and each barb.
pub const BARB_ANGLE: f64 = PI / 6.0;

/// Two-point arrow: shaft from start to end with two barbs at the end.
///
/// Output is `[start, end, left_barb, end, right_barb]`; `end` is visited
/// twice so both barbs are drawn as one continuous line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrowStrategy;

impl ArrowStrategy {
    /// Bearing from `end` back toward `start`, selected by quadrant.
    ///
    /// Coincident points are treated as a zero angle.
    pub fn azimuth(start: Point, end: Point) -> f64 {
        let distance = start.distance_to(&end);
        let angle = if distance > 0.0 {
            ((end.y - start.y).abs() / distance).clamp(0.0, 1.0).asin()
        } else {
            0.0
        };

        if end.y >= start.y && end.x >= start.x {
            angle + PI
        } else if end.y >= start.y && end.x < start.x {
            PI * 2.0 - angle
        } else if end.y < start.y && end.x < start.x {
            angle
        } else {
            PI - angle
        }
    }

    /// Point at `distance` from `end`, rotated `angle` off the azimuth.
    pub fn barb_point(
        start: Point,
        end: Point,
        angle: f64,
        distance: f64,
        clockwise: bool,
    ) -> Point {
        let azimuth = Self::azimuth(start, end);
        let alpha = if clockwise {
            azimuth + angle
        } else {
            azimuth - angle
        };
        end.offset(distance * alpha.cos(), distance * alpha.sin())
    }

    pub fn barb_length(start: Point, end: Point) -> f64 {
        (start.distance_to(&end) / ARROW_LENGTH_SCALE).min(MAX_ARROW_LENGTH)
    }

    pub fn generate_points(start: Point, end: Point) -> Vec<Point> {
        if start == end {
            tracing::debug!("Zero-length arrow at ({}, {}), using a zero azimuth", end.x, end.y);
        }
        let len = Self::barb_length(start, end);
        let left = Self::barb_point(start, end, BARB_ANGLE, len, false);
        let right = Self::barb_point(start, end, BARB_ANGLE, len, true);
        vec![start, end, left, end, right]
    }
}

impl GeometryStrategy for ArrowStrategy {
    fn gesture(&self) -> GestureKind {
        GestureKind::FreehandBox
    }

    fn generate(&self, input: &DragInput) -> Geometry {
        Geometry::LineString(Self::generate_points(input.first(), input.last()))
    }
}
