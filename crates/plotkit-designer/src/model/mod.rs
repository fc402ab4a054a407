//! Annotation shape model: points, drag input, geometries, and the closed
//! set of shape types with their geometry strategies.

use std::fmt;
use std::str::FromStr;

use plotkit_core::{FeatureId, ShapeError};
use plotkit_settings::{LayerSettings, MarkerSettings};

use crate::extent::Extent;

mod arrow;
mod ellipse;
mod free_line;
mod marker;
mod rectangle;
mod star;

pub use arrow::{ArrowStrategy, MAX_ARROW_LENGTH};
pub use ellipse::{EllipseStrategy, ELLIPSE_SEGMENTS};
pub use free_line::FreeLineStrategy;
pub use marker::MarkerStrategy;
pub use rectangle::RectangleStrategy;
pub use star::{StarStrategy, STAR_POINTS, STAR_SCALE_VERTEX};

/// A coordinate in map space. Map y grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Ordered pointer coordinates captured by a draw or handle-drag gesture.
///
/// Always holds at least one point.
#[derive(Debug, Clone, PartialEq)]
pub struct DragInput {
    points: Vec<Point>,
}

impl DragInput {
    /// Input consisting of a single point.
    pub fn new(first: Point) -> Self {
        Self {
            points: vec![first],
        }
    }

    /// Two-point input, as produced by box gestures.
    pub fn pair(start: Point, end: Point) -> Self {
        Self {
            points: vec![start, end],
        }
    }

    /// Returns `None` for an empty point list.
    pub fn from_points(points: Vec<Point>) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(Self { points })
        }
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Replaces everything after the first point with `point`.
    pub fn set_end(&mut self, point: Point) {
        self.points.truncate(1);
        self.points.push(point);
    }

    pub fn first(&self) -> Point {
        self.points[0]
    }

    pub fn last(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Finished geometry of a shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(Vec<Point>),
    /// Sequence of rings; shapes produced here carry exactly one ring.
    Polygon(Vec<Vec<Point>>),
}

impl Geometry {
    /// Vertices of a point, a line string, or the outer ring of a polygon.
    pub fn vertices(&self) -> &[Point] {
        match self {
            Geometry::Point(p) => std::slice::from_ref(p),
            Geometry::LineString(points) => points,
            Geometry::Polygon(rings) => rings.first().map(Vec::as_slice).unwrap_or(&[]),
        }
    }

    pub fn vertex(&self, index: usize) -> Option<Point> {
        self.vertices().get(index).copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Bounding extent of every coordinate, `None` for empty geometry.
    pub fn extent(&self) -> Option<Extent> {
        match self {
            Geometry::Polygon(rings) => Extent::bounding(rings.iter().flatten()),
            _ => Extent::bounding(self.vertices()),
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Geometry::Point(p) => *p = p.offset(dx, dy),
            Geometry::LineString(points) => {
                for p in points.iter_mut() {
                    *p = p.offset(dx, dy);
                }
            }
            Geometry::Polygon(rings) => {
                for p in rings.iter_mut().flatten() {
                    *p = p.offset(dx, dy);
                }
            }
        }
    }

    /// Hit test with a tolerance in map units.
    ///
    /// Line strings are hit near any segment; polygons inside the outer
    /// ring or near its boundary; points within the tolerance.
    pub fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        match self {
            Geometry::Point(center) => center.distance_to(&p) <= tolerance,
            Geometry::LineString(points) => near_polyline(points, p, tolerance, false),
            Geometry::Polygon(rings) => match rings.first() {
                Some(ring) => {
                    point_in_ring(ring, p) || near_polyline(ring, p, tolerance, true)
                }
                None => false,
            },
        }
    }
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return p.distance_to(&a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance_to(&Point::new(a.x + t * dx, a.y + t * dy))
}

fn near_polyline(points: &[Point], p: Point, tolerance: f64, closed: bool) -> bool {
    match points {
        [] => false,
        [single] => single.distance_to(&p) <= tolerance,
        _ => {
            let open = points
                .windows(2)
                .any(|w| distance_to_segment(p, w[0], w[1]) <= tolerance);
            let closing = closed
                && distance_to_segment(p, points[points.len() - 1], points[0]) <= tolerance;
            open || closing
        }
    }
}

// Even-odd ray casting.
fn point_in_ring(ring: &[Point], p: Point) -> bool {
    if ring.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (a, b) = (ring[i], ring[j]);
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Raw gesture that feeds a strategy while drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    /// Every pointer position is appended.
    FreehandPolyline,
    /// Drag start plus the current pointer position.
    FreehandBox,
    /// A single click position.
    Point,
}

/// Pure mapping from drag input to finished geometry.
pub trait GeometryStrategy {
    /// Gesture that produces this strategy's input.
    fn gesture(&self) -> GestureKind;

    /// Deterministic, side-effect free geometry generation.
    fn generate(&self, input: &DragInput) -> Geometry;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Arrow,
    Ellipse,
    FreeLine,
    Marker,
    Rectangle,
    Star,
}

impl ShapeType {
    pub const ALL: [ShapeType; 6] = [
        ShapeType::Arrow,
        ShapeType::Ellipse,
        ShapeType::FreeLine,
        ShapeType::Marker,
        ShapeType::Rectangle,
        ShapeType::Star,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShapeType::Arrow => "Arrow",
            ShapeType::Ellipse => "Ellipse",
            ShapeType::FreeLine => "FreeLine",
            ShapeType::Marker => "Marker",
            ShapeType::Rectangle => "Rectangle",
            ShapeType::Star => "Star",
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeType {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeType::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| ShapeError::UnknownShapeType {
                name: s.to_string(),
            })
    }
}

impl GeometryStrategy for ShapeType {
    fn gesture(&self) -> GestureKind {
        match self {
            ShapeType::Arrow => ArrowStrategy.gesture(),
            ShapeType::Ellipse => EllipseStrategy.gesture(),
            ShapeType::FreeLine => FreeLineStrategy.gesture(),
            ShapeType::Marker => MarkerStrategy.gesture(),
            ShapeType::Rectangle => RectangleStrategy.gesture(),
            ShapeType::Star => StarStrategy.gesture(),
        }
    }

    fn generate(&self, input: &DragInput) -> Geometry {
        match self {
            ShapeType::Arrow => ArrowStrategy.generate(input),
            ShapeType::Ellipse => EllipseStrategy.generate(input),
            ShapeType::FreeLine => FreeLineStrategy.generate(input),
            ShapeType::Marker => MarkerStrategy.generate(input),
            ShapeType::Rectangle => RectangleStrategy.generate(input),
            ShapeType::Star => StarStrategy.generate(input),
        }
    }
}

/// Visual style of a finished shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeStyle {
    pub stroke_color: String,
    pub stroke_width: f64,
    pub fill: String,
    /// Circle drawn for a point geometry that carries no icon.
    pub point_radius: f64,
    pub point_fill: String,
}

impl From<&LayerSettings> for ShapeStyle {
    fn from(layer: &LayerSettings) -> Self {
        Self {
            stroke_color: layer.stroke.color.clone(),
            stroke_width: layer.stroke.width,
            fill: layer.fill.clone(),
            point_radius: layer.point_radius,
            point_fill: layer.point_fill.clone(),
        }
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self::from(&LayerSettings::default())
    }
}

/// Icon drawn in place of a point geometry. Its footprint is defined in
/// screen pixels, not map units.
#[derive(Debug, Clone, PartialEq)]
pub struct IconPresentation {
    pub src: String,
    /// Native width in pixels
    pub width: f64,
    /// Native height in pixels
    pub height: f64,
    pub scale: f64,
}

impl IconPresentation {
    /// Rendered (width, height) in pixels.
    pub fn pixel_size(&self) -> (f64, f64) {
        (self.width * self.scale, self.height * self.scale)
    }
}

impl From<&MarkerSettings> for IconPresentation {
    fn from(marker: &MarkerSettings) -> Self {
        Self {
            src: marker.icon.clone(),
            width: marker.icon_width,
            height: marker.icon_height,
            scale: marker.initial_scale,
        }
    }
}

/// A placed annotation shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    id: FeatureId,
    shape_type: ShapeType,
    geometry: Geometry,
    pub style: ShapeStyle,
    pub icon: Option<IconPresentation>,
}

impl Shape {
    pub fn new(shape_type: ShapeType, geometry: Geometry, style: ShapeStyle) -> Self {
        Self {
            id: FeatureId::new(),
            shape_type,
            geometry,
            style,
            icon: None,
        }
    }

    pub fn id(&self) -> FeatureId {
        self.id
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Re-derives the geometry through this shape type's strategy.
    pub fn regenerate(&mut self, input: &DragInput) {
        self.geometry = self.shape_type.generate(input);
    }

    /// Moves the shape as a whole. Used by the translate primitive.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.geometry.translate(dx, dy);
    }

    pub fn extent(&self) -> Option<Extent> {
        self.geometry.extent()
    }
}
