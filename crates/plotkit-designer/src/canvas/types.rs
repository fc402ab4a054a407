//! Canvas type definitions: Feature, BoundingFrame, Handle, HandleRole, FrameStyle.

use plotkit_core::FeatureId;
use plotkit_settings::FrameSettings;

use crate::extent::Extent;
use crate::model::{Point, Shape};

/// Role of an editing handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleRole {
    Delete,
    Scale,
}

/// Small icon overlay used to delete or resize its owning shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Handle {
    pub id: FeatureId,
    pub owner: FeatureId,
    pub role: HandleRole,
    pub position: Point,
    pub icon: String,
}

impl Handle {
    pub fn new(owner: FeatureId, role: HandleRole, position: Point, icon: &str) -> Self {
        Self {
            id: FeatureId::new(),
            owner,
            role,
            position,
            icon: icon.to_string(),
        }
    }
}

/// Dash, stroke and fill of the bounding frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameStyle {
    pub fill: String,
    pub stroke_color: String,
    pub stroke_width: f64,
    pub line_dash: Vec<f64>,
}

impl From<&FrameSettings> for FrameStyle {
    fn from(frame: &FrameSettings) -> Self {
        Self {
            fill: frame.fill.clone(),
            stroke_color: frame.stroke.color.clone(),
            stroke_width: frame.stroke.width,
            line_dash: frame.stroke.line_dash.clone(),
        }
    }
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self::from(&FrameSettings::default())
    }
}

/// Dashed rectangle drawn around a shape while it is being modified.
/// Derived from the shape, never the source of truth.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingFrame {
    pub id: FeatureId,
    pub owner: FeatureId,
    pub extent: Extent,
    pub style: FrameStyle,
}

impl BoundingFrame {
    pub fn new(owner: FeatureId, extent: Extent, style: FrameStyle) -> Self {
        Self {
            id: FeatureId::new(),
            owner,
            extent,
            style,
        }
    }

    /// Polygon ring: top-left, top-right, bottom-right, bottom-left.
    pub fn ring(&self) -> [Point; 4] {
        self.extent.corners()
    }
}

/// Anything rendered on the surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Feature {
    Shape(Shape),
    Frame(BoundingFrame),
    Handle(Handle),
}

impl Feature {
    pub fn id(&self) -> FeatureId {
        match self {
            Feature::Shape(s) => s.id(),
            Feature::Frame(f) => f.id,
            Feature::Handle(h) => h.id,
        }
    }

    pub fn is_overlay(&self) -> bool {
        !matches!(self, Feature::Shape(_))
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Feature::Shape(s) => s.translate(dx, dy),
            Feature::Frame(f) => f.extent.translate(dx, dy),
            Feature::Handle(h) => h.position = h.position.offset(dx, dy),
        }
    }

    pub fn as_shape(&self) -> Option<&Shape> {
        match self {
            Feature::Shape(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_handle(&self) -> Option<&Handle> {
        match self {
            Feature::Handle(h) => Some(h),
            _ => None,
        }
    }

    pub fn as_frame(&self) -> Option<&BoundingFrame> {
        match self {
            Feature::Frame(f) => Some(f),
            _ => None,
        }
    }
}
