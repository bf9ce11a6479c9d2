//! Brush settings and tool selection.

use crate::color::Color;

/// Smallest selectable base brush size.
pub const MIN_BRUSH_SIZE: f64 = 1.0;
/// Largest selectable base brush size.
pub const MAX_BRUSH_SIZE: f64 = 50.0;
/// Base brush size on startup.
pub const DEFAULT_BRUSH_SIZE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Brush,
    /// Paints with the eraser (background) color.
    Eraser,
    /// Places text notes instead of drawing.
    Note,
}

/// The brush used for new strokes.
#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    pub tool: Tool,
    color: Color,
    eraser_color: Color,
    base_size: f64,
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(Color::BLACK, Color::WHITE, DEFAULT_BRUSH_SIZE)
    }
}

impl Brush {
    pub fn new(color: Color, eraser_color: Color, base_size: f64) -> Self {
        Self {
            tool: Tool::Brush,
            color,
            eraser_color,
            base_size: clamp_size(base_size),
        }
    }

    /// The logical size of the brush, before zoom is applied.
    pub fn base_size(&self) -> f64 {
        self.base_size
    }

    /// Sets the base size, clamped to the selectable range.
    pub fn set_size(&mut self, size: f64) {
        self.base_size = clamp_size(size);
    }

    pub fn brush_color(&self) -> Color {
        self.color
    }

    pub fn eraser_color(&self) -> Color {
        self.eraser_color
    }

    /// Color new strokes are drawn with, depending on the selected tool.
    pub fn stroke_color(&self) -> Color {
        match self.tool {
            Tool::Eraser => self.eraser_color,
            Tool::Brush | Tool::Note => self.color,
        }
    }

    /// Picks a new drawing color and switches back to the brush.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.tool = Tool::Brush;
    }

    pub fn use_eraser(&mut self) {
        self.tool = Tool::Eraser;
    }

    /// Whether pointer input should produce strokes.
    pub fn draws(&self) -> bool {
        matches!(self.tool, Tool::Brush | Tool::Eraser)
    }
}

fn clamp_size(size: f64) -> f64 {
    if size.is_nan() {
        return DEFAULT_BRUSH_SIZE;
    }
    size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE)
}
