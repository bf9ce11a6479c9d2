//! A single zoomable drawing page.
//!
//! Zoom is destructive: [`Page::apply_zoom`] rescales every stored point and
//! stroke width about the canvas origin instead of keeping a separate view
//! transform. Pointer input is therefore mapped to canvas space by adding the
//! scroll offset only, never by dividing by the zoom scale.

use crate::brush::Brush;
use crate::color::Color;
use crate::geometry::{Point, Size};

/// Lowest cumulative zoom scale a page accepts.
pub const ZOOM_MIN: f64 = 0.5;
/// Highest cumulative zoom scale a page accepts.
pub const ZOOM_MAX: f64 = 5.0;
/// Side length of the scrollable area at 100% zoom.
pub const DEFAULT_EXTENT: f64 = 3000.0;

// Absorbs rounding drift from repeated multiplication at the bounds.
const ZOOM_EPSILON: f64 = 1e-9;

/// Multiplicative factors used by the zoom-in and zoom-out actions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomSteps {
    pub zoom_in: f64,
    pub zoom_out: f64,
}

impl Default for ZoomSteps {
    fn default() -> Self {
        Self {
            zoom_in: 1.1,
            zoom_out: 0.9,
        }
    }
}

/// A drawable line segment between two consecutive stroke points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub width: f64,
    pub color: Color,
}

/// A freehand stroke recorded in canvas space.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
    base_width: f64,
    width: f64,
    color: Color,
}

impl Stroke {
    fn new(start: Point, base_width: f64, zoom_scale: f64, color: Color) -> Self {
        Self {
            points: vec![start],
            base_width,
            width: base_width * zoom_scale,
            color,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Brush size the stroke was drawn with, independent of zoom.
    pub fn base_width(&self) -> f64 {
        self.base_width
    }

    /// Width the stroke is currently rendered with.
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points.windows(2).map(|pair| Segment {
            start: pair[0],
            end: pair[1],
            width: self.width,
            color: self.color,
        })
    }

    fn last_point(&self) -> Option<Point> {
        self.points.last().copied()
    }
}

/// A text annotation. Notes have no width and are skipped when widths are rescaled.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub position: Point,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CanvasItem {
    Stroke(Stroke),
    Note(Note),
}

impl CanvasItem {
    fn scale_geometry(&mut self, factor: f64) {
        match self {
            CanvasItem::Stroke(stroke) => {
                for point in &mut stroke.points {
                    *point = point.scaled(factor);
                }
            }
            CanvasItem::Note(note) => note.position = note.position.scaled(factor),
        }
    }

    fn width_mut(&mut self) -> Option<&mut f64> {
        match self {
            CanvasItem::Stroke(stroke) => Some(&mut stroke.width),
            CanvasItem::Note(_) => None,
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            CanvasItem::Stroke(stroke) => Some(stroke),
            CanvasItem::Note(_) => None,
        }
    }
}

/// One drawing page: its items, zoom scale and scroll position.
#[derive(Debug, Clone)]
pub struct Page {
    id: usize,
    items: Vec<CanvasItem>,
    zoom_scale: f64,
    scroll_offset: Point,
    base_extent: Size,
    extent: Size,
    /// Viewport size last reported by the UI; bounds the scroll offset.
    viewport: Size,
    /// Index into `items` of the stroke the pointer is currently drawing.
    active_stroke: Option<usize>,
}

impl Page {
    pub fn new(id: usize) -> Self {
        Self::with_extent(id, Size::square(DEFAULT_EXTENT))
    }

    /// Creates a page with the given 100% scrollable area. Non-positive or
    /// non-finite sides fall back to [`DEFAULT_EXTENT`].
    pub fn with_extent(id: usize, base_extent: Size) -> Self {
        let base_extent = Size::new(valid_side(base_extent.width), valid_side(base_extent.height));
        Self {
            id,
            items: Vec::new(),
            zoom_scale: 1.0,
            scroll_offset: Point::ORIGIN,
            base_extent,
            extent: base_extent,
            viewport: Size::default(),
            active_stroke: None,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn items(&self) -> &[CanvasItem] {
        &self.items
    }

    pub fn strokes(&self) -> impl Iterator<Item = &Stroke> {
        self.items.iter().filter_map(CanvasItem::as_stroke)
    }

    pub fn notes(&self) -> impl Iterator<Item = &Note> {
        self.items.iter().filter_map(|item| match item {
            CanvasItem::Note(note) => Some(note),
            CanvasItem::Stroke(_) => None,
        })
    }

    /// Every drawable segment on the page, in drawing order.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.strokes().flat_map(Stroke::segments)
    }

    pub fn zoom_scale(&self) -> f64 {
        self.zoom_scale
    }

    /// Zoom indicator text, e.g. `"110%"`.
    pub fn zoom_label(&self) -> String {
        format!("{}%", (self.zoom_scale * 100.0).round() as i64)
    }

    pub fn scroll_offset(&self) -> Point {
        self.scroll_offset
    }

    /// Current size of the scrollable area.
    pub fn extent(&self) -> Size {
        self.extent
    }

    /// Whether a stroke is in progress.
    pub fn is_drawing(&self) -> bool {
        self.active_stroke.is_some()
    }

    /// Maps a viewport-relative position to canvas space.
    pub fn to_canvas(&self, screen: Point) -> Point {
        screen.offset(self.scroll_offset.x, self.scroll_offset.y)
    }

    /// Maps a canvas position back to viewport-relative coordinates.
    pub fn to_viewport(&self, canvas: Point) -> Point {
        canvas.offset(-self.scroll_offset.x, -self.scroll_offset.y)
    }

    /// Records a pointer position for the stroke in progress.
    ///
    /// The first point after a release starts a new stroke and emits nothing.
    /// Every following point emits the segment joining it to the previous one,
    /// `brush.base_size() * zoom_scale` wide in the brush's current color. If
    /// the brush changed since the last point, the stroke is split: a new
    /// stroke starts at the previous point so the line stays connected.
    pub fn record_point(&mut self, screen: Point, brush: &Brush) -> Option<Segment> {
        let point = self.to_canvas(screen);
        if !point.is_finite() {
            return None;
        }

        let zoom_scale = self.zoom_scale;
        if let Some(CanvasItem::Stroke(stroke)) =
            self.active_stroke.and_then(|idx| self.items.get_mut(idx))
        {
            let previous = stroke.last_point()?;
            if stroke.base_width == brush.base_size() && stroke.color == brush.stroke_color() {
                stroke.points.push(point);
                return Some(Segment {
                    start: previous,
                    end: point,
                    width: stroke.width,
                    color: stroke.color,
                });
            }

            let mut split = Stroke::new(previous, brush.base_size(), zoom_scale, brush.stroke_color());
            split.points.push(point);
            let segment = Segment {
                start: previous,
                end: point,
                width: split.width,
                color: split.color,
            };
            log::trace!("page {}: brush changed mid-stroke, width {:.2}", self.id, split.width);
            self.items.push(CanvasItem::Stroke(split));
            self.active_stroke = Some(self.items.len() - 1);
            return Some(segment);
        }

        let stroke = Stroke::new(point, brush.base_size(), self.zoom_scale, brush.stroke_color());
        log::trace!(
            "page {}: stroke started at ({:.1}, {:.1}), width {:.2}",
            self.id,
            point.x,
            point.y,
            stroke.width
        );
        self.items.push(CanvasItem::Stroke(stroke));
        self.active_stroke = Some(self.items.len() - 1);
        None
    }

    /// Ends the stroke in progress; the next point starts a disconnected stroke.
    pub fn release(&mut self) {
        self.active_stroke = None;
    }

    /// Places a text note at a viewport-relative position. Blank text is ignored.
    pub fn add_note(&mut self, screen: Point, text: &str) -> bool {
        let position = self.to_canvas(screen);
        let text = text.trim();
        if text.is_empty() || !position.is_finite() {
            return false;
        }
        self.items.push(CanvasItem::Note(Note {
            position,
            text: text.to_string(),
        }));
        true
    }

    /// Multiplies the page's zoom by `factor`, rescaling all stored geometry
    /// and stroke widths about the origin.
    ///
    /// Returns `false` and changes nothing when the resulting scale would fall
    /// outside [`ZOOM_MIN`]..=[`ZOOM_MAX`].
    pub fn apply_zoom(&mut self, factor: f64) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            log::debug!("page {}: ignoring invalid zoom factor {factor}", self.id);
            return false;
        }

        let target = self.zoom_scale * factor;
        if target < ZOOM_MIN - ZOOM_EPSILON || target > ZOOM_MAX + ZOOM_EPSILON {
            log::debug!(
                "page {}: zoom to {:.3} rejected, outside {ZOOM_MIN}..={ZOOM_MAX}",
                self.id,
                target
            );
            return false;
        }

        for item in &mut self.items {
            item.scale_geometry(factor);
        }
        for width in self.items.iter_mut().filter_map(CanvasItem::width_mut) {
            *width *= factor;
        }

        self.zoom_scale = target;
        self.extent = Size::new(
            self.base_extent.width * self.zoom_scale,
            self.base_extent.height * self.zoom_scale,
        );
        self.clamp_scroll();

        log::debug!("page {}: zoom now {}", self.id, self.zoom_label());
        true
    }

    pub fn zoom_in(&mut self, steps: &ZoomSteps) -> bool {
        self.apply_zoom(steps.zoom_in)
    }

    pub fn zoom_out(&mut self, steps: &ZoomSteps) -> bool {
        self.apply_zoom(steps.zoom_out)
    }

    /// Scrolls the view, keeping it inside the scrollable area.
    pub fn scroll_by(&mut self, dx: f64, dy: f64, viewport: Size) {
        self.set_viewport(viewport);
        if !dx.is_finite() || !dy.is_finite() {
            return;
        }
        self.scroll_offset = self.scroll_offset.offset(dx, dy);
        self.clamp_scroll();
    }

    /// Records the visible area's size, used to bound scrolling after zooms.
    pub fn set_viewport(&mut self, viewport: Size) {
        if viewport.width.is_finite() && viewport.height.is_finite() {
            self.viewport = viewport;
        }
    }

    fn clamp_scroll(&mut self) {
        let max_x = (self.extent.width - self.viewport.width).max(0.0);
        let max_y = (self.extent.height - self.viewport.height).max(0.0);
        self.scroll_offset = Point::new(
            self.scroll_offset.x.clamp(0.0, max_x),
            self.scroll_offset.y.clamp(0.0, max_y),
        );
    }

    /// Shows the page at 100% again without touching stored geometry.
    pub(crate) fn reset_zoom_display(&mut self) {
        self.zoom_scale = 1.0;
        self.active_stroke = None;
    }
}

fn valid_side(side: f64) -> f64 {
    if side.is_finite() && side > 0.0 {
        side
    } else {
        DEFAULT_EXTENT
    }
}
