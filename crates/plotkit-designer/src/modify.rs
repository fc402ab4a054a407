//! Modify sessions.
//!
//! A [`ModifyController`] belongs to one shape. While active it keeps a
//! [`HandleSet`] on the surface and two translate registrations: a group
//! translate that moves the shape with its overlay, and a scale translate
//! on the scale handle that recomputes the shape on every pointer move.
//! Every move of a scale gesture is computed against the geometry the shape
//! had when the gesture began, so collapsing an axis mid-drag is recoverable.
//! The surface is passed in explicitly for every operation.

use plotkit_core::{FeatureId, InteractionId};

use crate::canvas::{Feature, HandleRole, TranslateEvent, TranslateInteraction};
use crate::commands::{ModifyCommand, ModifyOutcome};
use crate::extent::Extent;
use crate::handles::{HandleLayout, HandleSet, HandleSpec, OverlayStyle, ScaleRule};
use crate::model::{DragInput, Geometry, Point, Shape};
use crate::surface::DrawingSurface;

/// Icons never shrink below this factor of their native size.
pub const MIN_ICON_SCALE: f64 = 0.05;

const MIN_FRAME_SPAN: f64 = 1e-12;

/// Overlay and registrations owned by an active session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModifySession {
    pub handles: HandleSet,
    pub group: InteractionId,
    pub scale: InteractionId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ModifyState {
    #[default]
    Inactive,
    Active(ModifySession),
}

/// Geometry at the start of a scale gesture and the last geometry it produced.
#[derive(Debug, Clone, PartialEq)]
struct ScaleGesture {
    origin: Geometry,
    last: Geometry,
}

/// Activate/deactivate/drag/delete state machine for one shape.
#[derive(Debug, Clone)]
pub struct ModifyController {
    shape: FeatureId,
    overlay: OverlayStyle,
    state: ModifyState,
    gesture: Option<ScaleGesture>,
}

impl ModifyController {
    pub fn new(shape: FeatureId, overlay: OverlayStyle) -> Self {
        Self {
            shape,
            overlay,
            state: ModifyState::Inactive,
            gesture: None,
        }
    }

    pub fn shape_id(&self) -> FeatureId {
        self.shape
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, ModifyState::Active(_))
    }

    pub fn session(&self) -> Option<&ModifySession> {
        match &self.state {
            ModifyState::Active(session) => Some(session),
            ModifyState::Inactive => None,
        }
    }

    /// Places the overlay and registers both translate interactions.
    ///
    /// Returns `false` without touching the surface when the session is
    /// already active or the shape is no longer on the surface.
    pub fn activate(&mut self, surface: &mut dyn DrawingSurface) -> bool {
        if self.is_active() {
            return false;
        }
        let Some(handles) = HandleSet::build(self.shape, surface, &self.overlay) else {
            tracing::debug!("Cannot activate modify session, {} is not on the surface", self.shape);
            return false;
        };

        let group = surface.add_interaction(
            TranslateInteraction::new(
                self.shape,
                [self.shape, handles.frame, handles.scale, handles.delete],
            )
            .with_filter([handles.delete, handles.scale]),
        );
        let scale = surface.add_interaction(TranslateInteraction::new(self.shape, [handles.scale]));

        self.state = ModifyState::Active(ModifySession {
            handles,
            group,
            scale,
        });
        tracing::debug!("Modify session activated for {}", self.shape);
        true
    }

    /// Removes the overlay and every registration. Safe to call repeatedly.
    pub fn deactivate(&mut self, surface: &mut dyn DrawingSurface) {
        self.gesture = None;
        let ModifyState::Active(session) = std::mem::take(&mut self.state) else {
            return;
        };
        surface.remove_interaction(session.group);
        surface.remove_interaction(session.scale);
        session.handles.remove(surface);
        tracing::debug!("Modify session deactivated for {}", self.shape);
    }

    /// Role of an overlay feature owned by the active session.
    pub fn handle_role(&self, feature: FeatureId) -> Option<HandleRole> {
        self.session()
            .and_then(|session| session.handles.role_of(feature))
    }

    pub fn apply(
        &mut self,
        command: ModifyCommand,
        surface: &mut dyn DrawingSurface,
    ) -> ModifyOutcome {
        match command {
            ModifyCommand::Translating(event) => self.on_translating(&event, surface),
            ModifyCommand::TranslateEnded(interaction) => {
                self.on_translate_end(interaction);
                ModifyOutcome::Unchanged
            }
            ModifyCommand::DeleteRequested => match self.request_delete(surface) {
                Some(shape) => ModifyOutcome::Removed(shape),
                None => ModifyOutcome::Unchanged,
            },
        }
    }

    /// Handles one intermediate position of a translate gesture.
    ///
    /// The surface has already moved the dragged features. Group moves need
    /// nothing more; scale moves recompute the shape and realign the overlay.
    pub fn on_translating(
        &mut self,
        event: &TranslateEvent,
        surface: &mut dyn DrawingSurface,
    ) -> ModifyOutcome {
        let Some(session) = self.session().copied() else {
            tracing::trace!("Ignoring translate for inactive session of {}", self.shape);
            return ModifyOutcome::Unchanged;
        };
        if event.owner != self.shape {
            return ModifyOutcome::Unchanged;
        }

        if event.interaction == session.group {
            ModifyOutcome::Updated
        } else if event.interaction == session.scale {
            self.rescale(&session, event.coordinate, surface)
        } else {
            tracing::trace!("Ignoring stale interaction {} for {}", event.interaction, self.shape);
            ModifyOutcome::Unchanged
        }
    }

    /// Ends the scale gesture started on `interaction`, if any.
    pub fn on_translate_end(&mut self, interaction: InteractionId) {
        let Some(scale) = self.session().map(|session| session.scale) else {
            return;
        };
        if interaction == scale && self.gesture.take().is_some() {
            tracing::trace!("Scale gesture ended for {}", self.shape);
        }
    }

    /// Deactivates, then removes the shape itself. Returns the removed
    /// shape, or `None` when it was already gone.
    pub fn request_delete(&mut self, surface: &mut dyn DrawingSurface) -> Option<Shape> {
        self.deactivate(surface);
        let shape = surface
            .remove_feature(self.shape)
            .and_then(|feature| match feature {
                Feature::Shape(shape) => Some(shape),
                _ => None,
            })?;
        tracing::info!("Deleted {} {}", shape.shape_type(), self.shape);
        Some(shape)
    }

    fn rescale(
        &mut self,
        session: &ModifySession,
        cursor: Point,
        surface: &mut dyn DrawingSurface,
    ) -> ModifyOutcome {
        let Some(shape) = surface.shape(self.shape) else {
            return ModifyOutcome::Unchanged;
        };
        let rule = HandleSpec::for_type(shape.shape_type()).rule;

        match rule {
            ScaleRule::IconScale => {
                let Some(scale) = icon_scale(shape, cursor, &*surface) else {
                    return ModifyOutcome::Unchanged;
                };
                if let Some(icon) = surface.shape_mut(self.shape).and_then(|s| s.icon.as_mut()) {
                    icon.scale = scale;
                }
            }
            _ => {
                // Anything else that reshaped the geometry starts a new gesture.
                let current = shape.geometry();
                let gesture = match self.gesture.take() {
                    Some(gesture) if gesture.last == *current => gesture,
                    _ => ScaleGesture {
                        origin: current.clone(),
                        last: current.clone(),
                    },
                };
                let Some(input) = rescaled_input(&gesture.origin, rule, cursor) else {
                    self.gesture = Some(gesture);
                    return ModifyOutcome::Unchanged;
                };
                let Some(shape) = surface.shape_mut(self.shape) else {
                    return ModifyOutcome::Unchanged;
                };
                shape.regenerate(&input);
                self.gesture = Some(ScaleGesture {
                    last: shape.geometry().clone(),
                    origin: gesture.origin,
                });
            }
        }

        let Some(layout) = surface
            .shape(self.shape)
            .and_then(|shape| HandleLayout::derive(shape, &*surface))
        else {
            return ModifyOutcome::Unchanged;
        };
        let scale_at = (!rule.snaps_handle()).then_some(cursor);
        session.handles.update(surface, &layout, scale_at);
        ModifyOutcome::Updated
    }
}

/// Drag input that regenerates `origin` with the scale handle at `cursor`.
fn rescaled_input(origin: &Geometry, rule: ScaleRule, cursor: Point) -> Option<DragInput> {
    match rule {
        ScaleRule::AnchorFirstVertex => Some(DragInput::pair(origin.vertex(0)?, cursor)),
        ScaleRule::AnchorTopLeft => Some(DragInput::pair(origin.extent()?.top_left(), cursor)),
        ScaleRule::AnchorCenter => Some(DragInput::pair(origin.extent()?.center(), cursor)),
        ScaleRule::PivotTopLeft => {
            let extent = origin.extent()?;
            let (sx, sy) = pivot_factors(&extent, cursor);
            let pivot = extent.top_left();
            let points = origin
                .vertices()
                .iter()
                .map(|p| {
                    Point::new(
                        pivot.x + (p.x - pivot.x) * sx,
                        pivot.y + (p.y - pivot.y) * sy,
                    )
                })
                .collect();
            DragInput::from_points(points)
        }
        ScaleRule::IconScale => None,
    }
}

// A zero span leaves that axis unscaled.
fn pivot_factors(extent: &Extent, cursor: Point) -> (f64, f64) {
    let top_left = extent.top_left();
    let sx = if extent.width() > MIN_FRAME_SPAN {
        (cursor.x - top_left.x) / extent.width()
    } else {
        1.0
    };
    let sy = if extent.height() > MIN_FRAME_SPAN {
        (top_left.y - cursor.y) / extent.height()
    } else {
        1.0
    };
    (sx, sy)
}

/// Icon scale whose box corner lies at the cursor's pixel distance from
/// the marker. The box is square, so its half side is `sqrt(d² / 2)`.
fn icon_scale(shape: &Shape, cursor: Point, surface: &dyn DrawingSurface) -> Option<f64> {
    let icon = shape.icon.as_ref()?;
    if icon.width <= 0.0 {
        return None;
    }
    let anchor = shape.geometry().vertex(0)?;
    let distance = surface
        .pixel_from_coordinate(anchor)
        .distance_to(&surface.pixel_from_coordinate(cursor));
    let half_box = (distance * distance / 2.0).sqrt();
    Some((2.0 * half_box / icon.width).max(MIN_ICON_SCALE))
}
