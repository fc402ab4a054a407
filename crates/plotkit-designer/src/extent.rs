//! Axis-aligned bounding extents in map space.
//!
//! Map y grows upward, so the top-left corner is `(min_x, max_y)` and the
//! bottom-right corner is `(max_x, min_y)`.

use crate::model::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Extent {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Smallest extent containing every point, `None` when there are none.
    pub fn bounding<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut extent = Extent::new(first.x, first.y, first.x, first.y);
        for p in iter {
            extent.min_x = extent.min_x.min(p.x);
            extent.min_y = extent.min_y.min(p.y);
            extent.max_x = extent.max_x.max(p.x);
            extent.max_y = extent.max_y.max(p.y);
        }
        Some(extent)
    }

    /// Extent spanned by two arbitrary corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Extent::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.min_x, self.max_y)
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.max_x, self.max_y)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.max_x, self.min_y)
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Corners in ring order: top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.top_left(),
            self.top_right(),
            self.bottom_right(),
            self.bottom_left(),
        ]
    }

    pub fn contains(&self, p: Point, tolerance: f64) -> bool {
        p.x >= self.min_x - tolerance
            && p.x <= self.max_x + tolerance
            && p.y >= self.min_y - tolerance
            && p.y <= self.max_y + tolerance
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.min_x += dx;
        self.max_x += dx;
        self.min_y += dy;
        self.max_y += dy;
    }
}
