//! Color constants for the toolbar, navigation bar and canvas chrome.

use eframe::egui::Color32;
use pro_paint::Color;

// Toolbar
pub const TOOLBAR_FILL: Color32 = Color32::from_rgb(0xe0, 0xe0, 0xe0);
pub const HINT_TEXT: Color32 = Color32::from_rgb(0x66, 0x66, 0x66);

// Page navigation bar
pub const NAV_FILL: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
pub const NAV_TEXT: Color32 = Color32::WHITE;
pub const NAV_BUTTON: Color32 = Color32::from_rgb(0x66, 0x66, 0x66);
pub const NEW_PAGE_BUTTON: Color32 = Color32::from_rgb(0x4c, 0xaf, 0x50);

// Canvas
pub const CANVAS_SURROUND: Color32 = Color32::from_rgb(0xcc, 0xcc, 0xcc);
pub const SCROLLBAR_THUMB: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 90);
pub const NOTE_TEXT: Color32 = Color32::from_rgb(0x20, 0x20, 0x20);

pub fn to_color32(color: Color) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}
