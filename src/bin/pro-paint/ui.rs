//! UI rendering methods for the paint application.

use crate::PaintApp;
use crate::colors;
use crate::constants::{NAV_BAR_HEIGHT, NOTE_FONT_SIZE, SCROLLBAR_THICKNESS};
use eframe::egui;
use pro_paint::brush::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};
use pro_paint::{Page, Point, PointerEvent, Size, Tool, WheelEvent, handle_pointer, handle_wheel};

impl PaintApp {
    /// Handles keyboard shortcuts for zoom, paging and tools.
    pub fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        ctx.input(|i| {
            let page = self.pages.active_mut();
            if i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals) {
                page.zoom_in(&self.zoom_steps);
            }
            if i.key_pressed(egui::Key::Minus) {
                page.zoom_out(&self.zoom_steps);
            }
            if i.key_pressed(egui::Key::PageUp) {
                self.pages.prev_page();
            }
            if i.key_pressed(egui::Key::PageDown) {
                self.pages.next_page();
            }
            if i.key_pressed(egui::Key::N) {
                self.pages.add_page();
            }
            if i.key_pressed(egui::Key::E) {
                self.brush.use_eraser();
            }
            if i.key_pressed(egui::Key::B) {
                self.brush.tool = Tool::Brush;
            }
        });
    }

    /// Renders the top toolbar: color, eraser, brush size and zoom indicator.
    pub fn show_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar")
            .frame(egui::Frame::side_top_panel(&ctx.style()).fill(colors::TOOLBAR_FILL))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let mut color = self.brush.brush_color().to_array();
                    if ui
                        .color_edit_button_srgb(&mut color)
                        .on_hover_text("Brush color")
                        .changed()
                    {
                        self.brush.set_color(color.into());
                    }

                    ui.selectable_value(&mut self.brush.tool, Tool::Brush, "Brush");
                    if ui
                        .selectable_label(self.brush.tool == Tool::Eraser, "Eraser")
                        .clicked()
                    {
                        self.brush.use_eraser();
                    }
                    ui.selectable_value(&mut self.brush.tool, Tool::Note, "Note");
                    if self.brush.tool == Tool::Note {
                        ui.add(
                            egui::TextEdit::singleline(&mut self.note_text)
                                .hint_text("Note text")
                                .desired_width(140.0),
                        );
                    }

                    ui.separator();
                    ui.label("Size:");
                    let mut size = self.brush.base_size();
                    if ui
                        .add(egui::Slider::new(&mut size, MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE))
                        .changed()
                    {
                        self.brush.set_size(size);
                    }

                    ui.separator();
                    ui.label("Zoom:");
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(self.pages.active().zoom_label()).monospace(),
                        )
                        .selectable(false),
                    );
                    ui.colored_label(colors::HINT_TEXT, "(Use Ctrl + Scroll to Zoom)");
                });
            });
    }

    /// Renders the bottom navigation bar with the page label and page buttons.
    pub fn show_page_nav(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("page_nav")
            .exact_height(NAV_BAR_HEIGHT)
            .frame(egui::Frame::side_top_panel(&ctx.style()).fill(colors::NAV_FILL))
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    if ui
                        .add(nav_button("<< Prev", colors::NAV_BUTTON))
                        .clicked()
                    {
                        self.pages.prev_page();
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .add(nav_button("Next >>", colors::NAV_BUTTON))
                            .clicked()
                        {
                            self.pages.next_page();
                        }
                        if ui
                            .add(nav_button("+ New Page", colors::NEW_PAGE_BUTTON))
                            .clicked()
                        {
                            self.pages.add_page();
                        }

                        ui.centered_and_justified(|ui| {
                            ui.colored_label(colors::NAV_TEXT, self.pages.page_label());
                        });
                    });
                });
            });
    }

    /// Renders the active page and feeds it pointer and wheel input.
    pub fn show_canvas(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(colors::CANVAS_SURROUND))
            .show(ctx, |ui| {
                let (viewport_rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
                self.viewport = Size::new(
                    f64::from(viewport_rect.width()),
                    f64::from(viewport_rect.height()),
                );
                self.pages.active_mut().set_viewport(self.viewport);

                self.handle_wheel_input(ui, viewport_rect);
                self.handle_pointer_input(&response, viewport_rect);

                let painter = ui.painter_at(viewport_rect);
                painter.rect_filled(
                    viewport_rect,
                    0.0,
                    colors::to_color32(self.brush.eraser_color()),
                );

                let page = self.pages.active();
                draw_page(&painter, viewport_rect, page);
                draw_scroll_indicators(&painter, viewport_rect, page, self.viewport);
            });
    }

    /// Handles wheel input: Ctrl/Cmd zooms, plain wheel scrolls.
    fn handle_wheel_input(&mut self, ui: &egui::Ui, viewport_rect: egui::Rect) {
        let hover_pos = ui.input(|i| i.pointer.hover_pos());
        if !hover_pos.is_some_and(|p| viewport_rect.contains(p)) {
            return;
        }

        let (delta, zoom_modifier) =
            ui.input(|i| (i.raw_scroll_delta, i.modifiers.ctrl || i.modifiers.command));
        if delta == egui::Vec2::ZERO {
            return;
        }

        let event = WheelEvent {
            delta_x: f64::from(delta.x) * self.scroll_speed,
            delta_y: f64::from(delta.y) * self.scroll_speed,
            zoom_modifier,
        };
        handle_wheel(self.pages.active_mut(), event, &self.zoom_steps, self.viewport);
    }

    /// Translates egui pointer state into press, drag and release events.
    fn handle_pointer_input(&mut self, response: &egui::Response, viewport_rect: egui::Rect) {
        let held = response.is_pointer_button_down_on();
        let event = match (held, response.interact_pointer_pos(), self.pointer) {
            (true, Some(pos), None) => {
                Some((PointerEvent::Press(local(viewport_rect, pos)), Some(pos)))
            }
            (true, Some(pos), Some(last)) if pos != last => {
                Some((PointerEvent::Drag(local(viewport_rect, pos)), Some(pos)))
            }
            (false, _, Some(_)) => Some((PointerEvent::Release, None)),
            _ => None,
        };

        let Some((event, pointer)) = event else {
            return;
        };
        self.pointer = pointer;
        handle_pointer(self.pages.active_mut(), &self.brush, event, &self.note_text);
    }
}

fn nav_button(text: &str, fill: egui::Color32) -> egui::Button<'_> {
    egui::Button::new(egui::RichText::new(text).color(colors::NAV_TEXT)).fill(fill)
}

fn local(viewport_rect: egui::Rect, pos: egui::Pos2) -> Point {
    let offset = pos - viewport_rect.min;
    Point::new(f64::from(offset.x), f64::from(offset.y))
}

fn to_screen(viewport_rect: egui::Rect, page: &Page, point: Point) -> egui::Pos2 {
    let view = page.to_viewport(point);
    viewport_rect.min + egui::vec2(view.x as f32, view.y as f32)
}

/// Draws every stroke segment with round caps, then the page's notes.
fn draw_page(painter: &egui::Painter, viewport_rect: egui::Rect, page: &Page) {
    let visible = viewport_rect.expand(64.0);

    for segment in page.segments() {
        let start = to_screen(viewport_rect, page, segment.start);
        let end = to_screen(viewport_rect, page, segment.end);
        if !visible.contains(start) && !visible.contains(end) {
            continue;
        }

        let width = segment.width as f32;
        let color = colors::to_color32(segment.color);
        painter.line_segment([start, end], egui::Stroke::new(width, color));
        painter.circle_filled(start, width / 2.0, color);
        painter.circle_filled(end, width / 2.0, color);
    }

    let font_size = (NOTE_FONT_SIZE * page.zoom_scale() as f32).max(6.0);
    for note in page.notes() {
        painter.text(
            to_screen(viewport_rect, page, note.position),
            egui::Align2::LEFT_TOP,
            &note.text,
            egui::FontId::proportional(font_size),
            colors::NOTE_TEXT,
        );
    }
}

/// Draws thin bars showing the visible part of the scrollable area.
fn draw_scroll_indicators(
    painter: &egui::Painter,
    viewport_rect: egui::Rect,
    page: &Page,
    viewport: Size,
) {
    let extent = page.extent();
    let offset = page.scroll_offset();

    if extent.width > viewport.width {
        let len = (viewport.width / extent.width) as f32 * viewport_rect.width();
        let start = (offset.x / extent.width) as f32 * viewport_rect.width();
        let thumb = egui::Rect::from_min_size(
            egui::pos2(
                viewport_rect.left() + start,
                viewport_rect.bottom() - SCROLLBAR_THICKNESS,
            ),
            egui::vec2(len, SCROLLBAR_THICKNESS),
        );
        painter.rect_filled(thumb, SCROLLBAR_THICKNESS / 2.0, colors::SCROLLBAR_THUMB);
    }

    if extent.height > viewport.height {
        let len = (viewport.height / extent.height) as f32 * viewport_rect.height();
        let start = (offset.y / extent.height) as f32 * viewport_rect.height();
        let thumb = egui::Rect::from_min_size(
            egui::pos2(
                viewport_rect.right() - SCROLLBAR_THICKNESS,
                viewport_rect.top() + start,
            ),
            egui::vec2(SCROLLBAR_THICKNESS, len),
        );
        painter.rect_filled(thumb, SCROLLBAR_THICKNESS / 2.0, colors::SCROLLBAR_THUMB);
    }
}
