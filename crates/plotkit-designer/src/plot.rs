//! Plot state for UI integration.
//!
//! Owns the canvas and one [`ModifyController`] per placed shape, picks the
//! active drawing tool, and routes selection clicks and translate gestures
//! to the right modify session.

use std::collections::HashMap;

use plotkit_core::{FeatureId, Result, ShapeError};
use plotkit_settings::Config;

use crate::canvas::{Canvas, Feature, TranslateEvent};
use crate::commands::{ModifyCommand, ModifyOutcome};
use crate::factory::{DrawSession, ShapeDefaults, ShapeFactory};
use crate::handles::OverlayStyle;
use crate::model::{Geometry, Point, Shape, ShapeStyle, ShapeType};
use crate::modify::ModifyController;
use crate::selection_manager::{SelectionHit, SelectionManager};
use crate::surface::DrawingSurface;

#[derive(Debug, Clone)]
pub struct Plot {
    config: Config,
    canvas: Canvas,
    defaults: ShapeDefaults,
    overlay: OverlayStyle,
    controllers: HashMap<FeatureId, ModifyController>,
    selection: SelectionManager,
    tool: Option<ShapeFactory>,
    draw: Option<DrawSession>,
}

impl Plot {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            canvas: Canvas::from_settings(&config.viewport),
            defaults: ShapeDefaults::from(&config),
            overlay: OverlayStyle::from(&config),
            controllers: HashMap::new(),
            selection: SelectionManager::new(),
            tool: None,
            draw: None,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn active_tool(&self) -> Option<ShapeType> {
        self.tool.map(|factory| factory.shape_type())
    }

    pub fn selected(&self) -> Option<FeatureId> {
        self.selection.selected_id()
    }

    pub fn shape(&self, id: FeatureId) -> Option<&Shape> {
        self.canvas.shape(id)
    }

    pub fn shape_count(&self) -> usize {
        self.canvas.shape_count()
    }

    pub fn controller(&self, id: FeatureId) -> Option<&ModifyController> {
        self.controllers.get(&id)
    }

    /// Hit tolerance in map units at the current zoom.
    pub fn hit_tolerance(&self) -> f64 {
        self.canvas
            .viewport()
            .pixels_to_map_distance(self.config.selection.hit_tolerance)
    }

    /// Activates the drawing tool named `name`, dropping any unfinished draw.
    pub fn plot(&mut self, name: &str) -> Result<ShapeType> {
        let shape_type = name.parse::<ShapeType>().inspect_err(|_| {
            tracing::warn!("Unknown shape type requested: {}", name);
        })?;
        self.tool = Some(ShapeFactory::new(shape_type));
        self.draw = None;
        tracing::debug!("Drawing tool set to {}", shape_type);
        Ok(shape_type)
    }

    /// Disables drawing.
    pub fn clear_tool(&mut self) {
        self.tool = None;
        self.draw = None;
    }

    pub fn begin_draw(&mut self, at: Point) -> Result<()> {
        let factory = self.tool.ok_or(ShapeError::NoActiveTool)?;
        self.draw = Some(factory.begin_draw(at));
        Ok(())
    }

    pub fn extend_draw(&mut self, to: Point) -> Result<()> {
        let session = self.draw.as_mut().ok_or(ShapeError::NoDrawInProgress)?;
        session.update(to);
        Ok(())
    }

    /// Live geometry of the draw in progress.
    pub fn preview(&self) -> Option<&Geometry> {
        self.draw.as_ref().map(DrawSession::preview)
    }

    pub fn preview_style(&self) -> &ShapeStyle {
        &self.defaults.preview_style
    }

    /// Stores the drawn shape and gives it an inactive modify session.
    ///
    /// A marker is editable at once: its session is activated and the
    /// marker tool is switched off.
    pub fn finish_draw(&mut self) -> Result<FeatureId> {
        let session = self.draw.take().ok_or(ShapeError::NoDrawInProgress)?;
        let shape = session.finish(&self.defaults);
        let (id, shape_type) = (shape.id(), shape.shape_type());

        self.canvas.add_feature(Feature::Shape(shape));
        self.controllers
            .insert(id, ModifyController::new(id, self.overlay.clone()));
        tracing::info!("Created {} {}", shape_type, id);

        if shape_type == ShapeType::Marker {
            self.tool = None;
            self.select(id);
        }
        Ok(id)
    }

    /// Makes `id` the single selected shape. Returns `false` for unknown
    /// ids and for shapes whose modify session cannot be activated.
    pub fn select(&mut self, id: FeatureId) -> bool {
        if !self.controllers.contains_key(&id) {
            return false;
        }
        if self.selection.selected_id() == Some(id) {
            return true;
        }
        self.deselect();
        let active = match self.controllers.get_mut(&id) {
            Some(controller) => controller.activate(&mut self.canvas) || controller.is_active(),
            None => false,
        };
        if !active {
            tracing::debug!("Not selecting {}, no modify session could be activated", id);
            return false;
        }
        self.selection.set_selected_id(Some(id));
        true
    }

    pub fn deselect(&mut self) {
        if let Some(previous) = self.selection.selected_id() {
            if let Some(controller) = self.controllers.get_mut(&previous) {
                controller.deactivate(&mut self.canvas);
            }
        }
        self.selection.set_selected_id(None);
    }

    /// Handles a click: a delete handle deletes its shape, a shape becomes
    /// the selection, the selected shape's overlay keeps it, and empty space
    /// clears it. Returns the selection afterwards.
    pub fn select_at(&mut self, point: Point) -> Option<FeatureId> {
        match SelectionManager::hit_test(&self.canvas, point, self.hit_tolerance()) {
            SelectionHit::DeleteHandle(owner) => {
                tracing::info!("Delete handle clicked for {}", owner);
                if let Err(err) = self.delete(owner) {
                    tracing::warn!("Delete failed: {}", err);
                }
            }
            SelectionHit::Shape(id) | SelectionHit::Overlay(id) => {
                self.select(id);
            }
            SelectionHit::Empty => self.deselect(),
        }
        self.selection.selected_id()
    }

    /// Removes a shape through its modify session.
    pub fn delete(&mut self, id: FeatureId) -> Result<Shape> {
        let mut controller = self
            .controllers
            .remove(&id)
            .ok_or(ShapeError::ShapeNotFound { id })?;
        self.selection.forget(id);

        match controller.apply(ModifyCommand::DeleteRequested, &mut self.canvas) {
            ModifyOutcome::Removed(shape) => Ok(shape),
            _ => Err(ShapeError::ShapeNotFound { id }.into()),
        }
    }

    /// Starts a translate gesture; `false` when nothing draggable is hit.
    pub fn pointer_down(&mut self, at: Point) -> bool {
        let tolerance = self.hit_tolerance();
        self.canvas.pointer_down(at, tolerance).is_some()
    }

    pub fn pointer_move(&mut self, to: Point) -> ModifyOutcome {
        match self.canvas.pointer_move(to) {
            Some(event) => self.route(event),
            None => ModifyOutcome::Unchanged,
        }
    }

    pub fn pointer_up(&mut self) {
        let Some(interaction) = self.canvas.pointer_up() else {
            return;
        };
        let Some(owner) = self.canvas.interaction(interaction).map(|i| i.owner) else {
            return;
        };
        if let Some(controller) = self.controllers.get_mut(&owner) {
            controller.apply(ModifyCommand::TranslateEnded(interaction), &mut self.canvas);
        }
    }

    fn route(&mut self, event: TranslateEvent) -> ModifyOutcome {
        match self.controllers.get_mut(&event.owner) {
            Some(controller) => {
                controller.apply(ModifyCommand::Translating(event), &mut self.canvas)
            }
            None => ModifyOutcome::Unchanged,
        }
    }
}

impl Default for Plot {
    fn default() -> Self {
        Self::new()
    }
}
