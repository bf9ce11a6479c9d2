//! Routes pointer and wheel input to the active page.

use crate::brush::Brush;
use crate::geometry::{Point, Size};
use crate::page::{Page, Segment, ZoomSteps};

/// Pointer input, with positions relative to the viewport's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press(Point),
    Drag(Point),
    Release,
}

/// A scroll-wheel movement. `zoom_modifier` is set while Ctrl/Cmd is held.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    pub delta_x: f64,
    pub delta_y: f64,
    pub zoom_modifier: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PointerOutcome {
    Idle,
    Drew(Segment),
    PlacedNote,
}

/// Applies a pointer event to `page` using the current brush.
///
/// With the note tool a press places `note_text`; drags and releases only end
/// whatever stroke is in progress.
pub fn handle_pointer(
    page: &mut Page,
    brush: &Brush,
    event: PointerEvent,
    note_text: &str,
) -> PointerOutcome {
    match event {
        PointerEvent::Press(pos) | PointerEvent::Drag(pos) if brush.draws() => page
            .record_point(pos, brush)
            .map_or(PointerOutcome::Idle, PointerOutcome::Drew),
        PointerEvent::Press(pos) => {
            if page.add_note(pos, note_text) {
                PointerOutcome::PlacedNote
            } else {
                PointerOutcome::Idle
            }
        }
        PointerEvent::Drag(_) => PointerOutcome::Idle,
        PointerEvent::Release => {
            page.release();
            PointerOutcome::Idle
        }
    }
}

/// Applies a wheel event: zooms with the modifier held, scrolls otherwise.
///
/// Returns whether the view changed.
pub fn handle_wheel(page: &mut Page, event: WheelEvent, steps: &ZoomSteps, viewport: Size) -> bool {
    if event.zoom_modifier {
        if event.delta_y > 0.0 {
            page.zoom_in(steps)
        } else if event.delta_y < 0.0 {
            page.zoom_out(steps)
        } else {
            false
        }
    } else {
        let before = page.scroll_offset();
        page.scroll_by(-event.delta_x, -event.delta_y, viewport);
        page.scroll_offset() != before
    }
}
