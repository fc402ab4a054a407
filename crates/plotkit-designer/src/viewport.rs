//! Viewport and coordinate transformation for the drawing surface.
//!
//! Handles conversion between pixel coordinates (screen space) and map
//! coordinates. Icon-based shapes size themselves in pixels, so their map
//! extent is only known through this conversion.

use std::fmt;

use plotkit_settings::ViewportSettings;

use crate::model::Point;

const MIN_ZOOM: f64 = 1e-9;

/// Zoom and pan state of the surface.
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    width: f64,
    height: f64,
}

impl Viewport {
    /// Creates a viewport whose map origin sits at the bottom-left pixel.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            width,
            height,
        }
    }

    pub fn from_settings(settings: &ViewportSettings) -> Self {
        let mut viewport = Self::new(settings.width, settings.height);
        viewport.set_zoom(settings.zoom);
        viewport
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Pixels per map unit.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Ignores non-finite or non-positive zoom levels.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() && zoom > MIN_ZOOM {
            self.zoom = zoom;
        }
    }

    pub fn pan(&self) -> (f64, f64) {
        (self.pan_x, self.pan_y)
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Converts pixel coordinates to map coordinates.
    ///
    /// ```text
    /// map_x = (pixel_x - pan_x) / zoom
    /// map_y = (height - pixel_y - pan_y) / zoom   // Y flips
    /// ```
    pub fn pixel_to_map(&self, pixel: Point) -> Point {
        Point::new(
            (pixel.x - self.pan_x) / self.zoom,
            (self.height - pixel.y - self.pan_y) / self.zoom,
        )
    }

    /// Converts map coordinates to pixel coordinates.
    ///
    /// ```text
    /// pixel_x = map_x * zoom + pan_x
    /// pixel_y = height - (map_y * zoom + pan_y)
    /// ```
    pub fn map_to_pixel(&self, map: Point) -> Point {
        Point::new(
            map.x * self.zoom + self.pan_x,
            self.height - (map.y * self.zoom + self.pan_y),
        )
    }

    /// Converts a pixel distance (e.g. a hit tolerance) to map units.
    pub fn pixels_to_map_distance(&self, pixels: f64) -> f64 {
        pixels / self.zoom
    }

    /// Places the map point at the centre of the surface.
    pub fn center_on(&mut self, map: Point) {
        self.pan_x = self.width / 2.0 - map.x * self.zoom;
        self.pan_y = self.height / 2.0 - map.y * self.zoom;
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_settings(&ViewportSettings::default())
    }
}
