//! Editing overlay of a selected shape: a bounding frame plus one delete
//! handle and one scale handle.
//!
//! Where the frame comes from, where each handle sits, and how a scale drag
//! is turned back into geometry differ per shape type. Those differences
//! live in [`HandleSpec`]; everything else is shared.

use plotkit_core::FeatureId;
use plotkit_settings::Config;

use crate::canvas::{BoundingFrame, Feature, FrameStyle, Handle, HandleRole};
use crate::extent::Extent;
use crate::model::{Point, Shape, ShapeType, STAR_SCALE_VERTEX};
use crate::surface::DrawingSurface;

/// How the bounding frame is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSource {
    /// Extent of the shape's geometry.
    Geometry,
    /// The shape's icon box, laid out in pixels and converted to map units.
    IconPixels,
}

/// Position rule for a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlePlacement {
    Vertex(usize),
    FrameTopLeft,
    FrameBottomRight,
}

/// How a scale-handle drag recomputes the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleRule {
    /// First vertex stays fixed, the cursor becomes the second point.
    AnchorFirstVertex,
    /// Frame top-left stays fixed, the cursor becomes the opposite corner.
    AnchorTopLeft,
    /// Extent center stays fixed, the cursor becomes the edge point.
    AnchorCenter,
    /// Every vertex is scaled about the frame top-left so the frame's
    /// bottom-right follows the cursor.
    PivotTopLeft,
    /// The icon scale follows the pixel distance from the anchor to the
    /// cursor; geometry is left untouched.
    IconScale,
}

impl ScaleRule {
    /// Whether the scale handle jumps to its derived position after a
    /// recompute instead of staying under the cursor.
    pub fn snaps_handle(&self) -> bool {
        matches!(self, ScaleRule::IconScale)
    }
}

/// Per-type handle behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleSpec {
    pub frame: FrameSource,
    pub delete: HandlePlacement,
    pub scale: HandlePlacement,
    pub rule: ScaleRule,
}

impl HandleSpec {
    pub const fn for_type(shape_type: ShapeType) -> Self {
        match shape_type {
            ShapeType::Arrow => Self {
                frame: FrameSource::Geometry,
                delete: HandlePlacement::Vertex(0),
                scale: HandlePlacement::Vertex(1),
                rule: ScaleRule::AnchorFirstVertex,
            },
            ShapeType::Ellipse | ShapeType::Rectangle => Self {
                frame: FrameSource::Geometry,
                delete: HandlePlacement::FrameTopLeft,
                scale: HandlePlacement::FrameBottomRight,
                rule: ScaleRule::AnchorTopLeft,
            },
            ShapeType::FreeLine => Self {
                frame: FrameSource::Geometry,
                delete: HandlePlacement::FrameTopLeft,
                scale: HandlePlacement::FrameBottomRight,
                rule: ScaleRule::PivotTopLeft,
            },
            ShapeType::Marker => Self {
                frame: FrameSource::IconPixels,
                delete: HandlePlacement::FrameTopLeft,
                scale: HandlePlacement::FrameBottomRight,
                rule: ScaleRule::IconScale,
            },
            ShapeType::Star => Self {
                frame: FrameSource::Geometry,
                delete: HandlePlacement::Vertex(0),
                scale: HandlePlacement::Vertex(STAR_SCALE_VERTEX),
                rule: ScaleRule::AnchorCenter,
            },
        }
    }
}

/// Derived positions of the frame and both handles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleLayout {
    pub frame: Extent,
    pub delete: Point,
    pub scale: Point,
}

impl HandleLayout {
    /// `None` only for a shape without coordinates.
    pub fn derive(shape: &Shape, surface: &dyn DrawingSurface) -> Option<Self> {
        let spec = HandleSpec::for_type(shape.shape_type());
        let frame = match (spec.frame, &shape.icon, shape.geometry().vertex(0)) {
            (FrameSource::IconPixels, Some(icon), Some(anchor)) => {
                surface.icon_extent(anchor, icon)
            }
            _ => shape.extent()?,
        };

        let place = |placement: HandlePlacement| match placement {
            HandlePlacement::Vertex(index) => shape
                .geometry()
                .vertex(index)
                .unwrap_or_else(|| frame.top_left()),
            HandlePlacement::FrameTopLeft => frame.top_left(),
            HandlePlacement::FrameBottomRight => frame.bottom_right(),
        };

        Some(Self {
            frame,
            delete: place(spec.delete),
            scale: place(spec.scale),
        })
    }
}

/// Styling shared by every overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    pub frame: FrameStyle,
    pub delete_icon: String,
    pub scale_icon: String,
}

impl From<&Config> for OverlayStyle {
    fn from(config: &Config) -> Self {
        Self {
            frame: FrameStyle::from(&config.frame),
            delete_icon: config.handles.delete_icon.clone(),
            scale_icon: config.handles.scale_icon.clone(),
        }
    }
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// Overlay features placed on the surface for one shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleSet {
    pub owner: FeatureId,
    pub frame: FeatureId,
    pub delete: FeatureId,
    pub scale: FeatureId,
}

impl HandleSet {
    /// Adds the frame and handles for `owner`. Nothing is added when the
    /// shape is missing or has no coordinates.
    pub fn build(
        owner: FeatureId,
        surface: &mut dyn DrawingSurface,
        style: &OverlayStyle,
    ) -> Option<Self> {
        let shape = surface.shape(owner)?;
        let layout = HandleLayout::derive(shape, &*surface)?;

        let frame = BoundingFrame::new(owner, layout.frame, style.frame.clone());
        let delete = Handle::new(owner, HandleRole::Delete, layout.delete, &style.delete_icon);
        let scale = Handle::new(owner, HandleRole::Scale, layout.scale, &style.scale_icon);
        let set = Self {
            owner,
            frame: frame.id,
            delete: delete.id,
            scale: scale.id,
        };

        surface.add_feature(Feature::Frame(frame));
        surface.add_feature(Feature::Handle(delete));
        surface.add_feature(Feature::Handle(scale));
        Some(set)
    }

    /// Moves the overlay to `layout`. With `scale_at` the scale handle is
    /// placed there instead of its derived position.
    pub fn update(
        &self,
        surface: &mut dyn DrawingSurface,
        layout: &HandleLayout,
        scale_at: Option<Point>,
    ) {
        surface.set_frame_extent(self.frame, layout.frame);
        surface.move_handle(self.delete, layout.delete);
        surface.move_handle(self.scale, scale_at.unwrap_or(layout.scale));
    }

    /// Returns the number of features actually removed.
    pub fn remove(&self, surface: &mut dyn DrawingSurface) -> usize {
        self.ids()
            .into_iter()
            .filter_map(|id| surface.remove_feature(id))
            .count()
    }

    pub fn ids(&self) -> [FeatureId; 3] {
        [self.frame, self.delete, self.scale]
    }

    pub fn role_of(&self, id: FeatureId) -> Option<HandleRole> {
        if id == self.delete {
            Some(HandleRole::Delete)
        } else if id == self.scale {
            Some(HandleRole::Scale)
        } else {
            None
        }
    }
}
