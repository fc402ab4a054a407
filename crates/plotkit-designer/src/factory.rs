//! Draw sessions: turning a raw gesture into a finished shape.

use plotkit_settings::Config;

use crate::model::{
    DragInput, Geometry, GeometryStrategy, GestureKind, IconPresentation, Point, Shape,
    ShapeStyle, ShapeType,
};

/// Styling applied to shapes while drawing and at draw-end.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDefaults {
    pub style: ShapeStyle,
    /// Stroke of the live preview.
    pub preview_style: ShapeStyle,
    pub marker_icon: IconPresentation,
}

impl From<&Config> for ShapeDefaults {
    fn from(config: &Config) -> Self {
        let style = ShapeStyle::from(&config.layer);
        let preview_style = ShapeStyle {
            stroke_color: config.draw.stroke.color.clone(),
            stroke_width: config.draw.stroke.width,
            ..style.clone()
        };
        Self {
            style,
            preview_style,
            marker_icon: IconPresentation::from(&config.marker),
        }
    }
}

impl Default for ShapeDefaults {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// Per-type entry point for drawing and recomputing geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeFactory {
    shape_type: ShapeType,
}

impl ShapeFactory {
    pub fn new(shape_type: ShapeType) -> Self {
        Self { shape_type }
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    pub fn gesture(&self) -> GestureKind {
        self.shape_type.gesture()
    }

    /// Starts a gesture at `start` with an initial preview.
    pub fn begin_draw(&self, start: Point) -> DrawSession {
        let input = DragInput::new(start);
        let preview = self.generate(&input);
        DrawSession {
            shape_type: self.shape_type,
            gesture: self.gesture(),
            input,
            preview,
        }
    }

    pub fn generate(&self, input: &DragInput) -> Geometry {
        self.shape_type.generate(input)
    }
}

/// An in-progress draw gesture with its live preview.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawSession {
    shape_type: ShapeType,
    gesture: GestureKind,
    input: DragInput,
    preview: Geometry,
}

impl DrawSession {
    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    pub fn input(&self) -> &DragInput {
        &self.input
    }

    pub fn preview(&self) -> &Geometry {
        &self.preview
    }

    /// Feeds the next pointer position and regenerates the preview.
    pub fn update(&mut self, point: Point) {
        match self.gesture {
            GestureKind::FreehandPolyline => self.input.push(point),
            GestureKind::FreehandBox => self.input.set_end(point),
            GestureKind::Point => self.input = DragInput::new(point),
        }
        self.preview = self.shape_type.generate(&self.input);
    }

    /// Emits the finished shape. Markers get the icon presentation.
    pub fn finish(self, defaults: &ShapeDefaults) -> Shape {
        let mut shape = Shape::new(self.shape_type, self.preview, defaults.style.clone());
        if self.shape_type == ShapeType::Marker {
            shape.icon = Some(defaults.marker_icon.clone());
        }
        shape
    }
}
