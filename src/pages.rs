//! Page collection and navigation.

use crate::geometry::Size;
use crate::page::{DEFAULT_EXTENT, Page};

/// Owns every page and tracks which one is active. Pages are never removed.
#[derive(Debug, Clone)]
pub struct PageManager {
    pages: Vec<Page>,
    active: usize,
    extent: Size,
}

impl Default for PageManager {
    fn default() -> Self {
        Self::new(Size::square(DEFAULT_EXTENT))
    }
}

impl PageManager {
    /// Creates a manager holding a single empty page.
    pub fn new(extent: Size) -> Self {
        let mut manager = Self {
            pages: Vec::new(),
            active: 0,
            extent,
        };
        manager.add_page();
        manager
    }

    /// Appends a new empty page and makes it active. Returns its index.
    pub fn add_page(&mut self) -> usize {
        let index = self.pages.len();
        self.pages.push(Page::with_extent(index + 1, self.extent));
        log::info!("added page {}", index + 1);
        self.switch_to(index);
        index
    }

    /// Activates the page at `index` and shows it at 100% zoom.
    ///
    /// Out-of-range indices are ignored. Geometry already scaled by earlier
    /// zooms on the target page is left as it is.
    pub fn switch_to(&mut self, index: usize) -> bool {
        if index >= self.pages.len() {
            log::debug!("page index {index} out of range, {} pages", self.pages.len());
            return false;
        }
        if let Some(current) = self.pages.get_mut(self.active) {
            current.release();
        }
        self.pages[index].reset_zoom_display();
        self.active = index;
        log::debug!("switched to {}", self.page_label());
        true
    }

    pub fn prev_page(&mut self) -> bool {
        match self.active.checked_sub(1) {
            Some(index) => self.switch_to(index),
            None => false,
        }
    }

    pub fn next_page(&mut self) -> bool {
        self.switch_to(self.active + 1)
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &Page {
        &self.pages[self.active]
    }

    pub fn active_mut(&mut self) -> &mut Page {
        &mut self.pages[self.active]
    }

    pub fn get(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Navigation label, e.g. `"Page 2 / 3"`.
    pub fn page_label(&self) -> String {
        format!("Page {} / {}", self.active + 1, self.pages.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::Brush;
    use crate::geometry::Point;

    #[test]
    fn starts_with_one_active_page() {
        let pages = PageManager::default();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages.active_index(), 0);
        assert_eq!(pages.active().zoom_scale(), 1.0);
        assert_eq!(pages.page_label(), "Page 1 / 1");
    }

    #[test]
    fn add_page_activates_new_page() {
        let mut pages = PageManager::default();
        assert_eq!(pages.add_page(), 1);
        assert_eq!(pages.add_page(), 2);
        assert_eq!(pages.active_index(), 2);
        assert_eq!(pages.active().id(), 3);
        assert_eq!(pages.page_label(), "Page 3 / 3");
    }

    #[test]
    fn out_of_range_switch_is_ignored() {
        let mut pages = PageManager::default();
        pages.add_page();
        assert!(!pages.switch_to(2));
        assert_eq!(pages.active_index(), 1);

        assert!(!pages.next_page());
        assert!(pages.prev_page());
        assert!(!pages.prev_page());
        assert_eq!(pages.active_index(), 0);
    }

    #[test]
    fn pages_keep_independent_strokes() {
        let mut pages = PageManager::default();
        let brush = Brush::default();
        let page = pages.active_mut();
        page.record_point(Point::new(1.0, 1.0), &brush);
        page.record_point(Point::new(2.0, 2.0), &brush);

        pages.add_page();
        assert_eq!(pages.active().segments().count(), 0);
        pages.switch_to(0);
        assert_eq!(pages.active().segments().count(), 1);
    }

    #[test]
    fn negative_extent_zooms_without_panicking() {
        let mut pages = PageManager::new(Size::new(-1.0, -1.0));
        assert!(pages.active_mut().apply_zoom(1.1));
        assert_eq!(pages.add_page(), 1);
        assert!(pages.active().extent().width > 0.0);
    }

    #[test]
    fn switching_away_ends_stroke_in_progress() {
        let mut pages = PageManager::default();
        let brush = Brush::default();
        pages.active_mut().record_point(Point::new(1.0, 1.0), &brush);
        pages.add_page();
        pages.switch_to(0);
        assert!(!pages.active().is_drawing());
    }
}
