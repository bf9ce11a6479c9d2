/// Initial window size in pixels.
pub const WINDOW_SIZE: [f32; 2] = [1000.0, 800.0];

/// Height of the bottom page navigation bar in pixels.
pub const NAV_BAR_HEIGHT: f32 = 40.0;

/// Thickness of the scroll position indicators drawn along the canvas edges.
pub const SCROLLBAR_THICKNESS: f32 = 6.0;

/// Font size for text notes at 100% zoom.
pub const NOTE_FONT_SIZE: f32 = 16.0;

pub const WINDOW_TITLE: &str = "Pro Paint - High Precision Zoom";
