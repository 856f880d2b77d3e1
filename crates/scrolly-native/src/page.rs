//! Virtual page the native preview scrolls through.
//!
//! There is no document natively, so the page is modelled as a fixed number
//! of viewport heights and input events move an offset over it.

use scrolly_core::scroll::{max_scroll, scroll_progress};
use scrolly_core::LayoutConfig;

/// Pixels scrolled per wheel "line", matching common browser defaults.
pub const LINE_HEIGHT_PX: f64 = 40.0;
/// Fraction of the viewport moved by PageUp/PageDown/Space.
pub const PAGE_STEP_FRACTION: f64 = 0.9;

#[derive(Clone, Debug, PartialEq)]
pub struct VirtualPage {
    /// Scroll offset in logical pixels.
    pub offset: f64,
    /// Viewport size in logical pixels.
    pub width: f64,
    pub height: f64,
    /// Page height in multiples of the viewport height.
    pub screens: f64,
    pub layout: LayoutConfig,
}

impl VirtualPage {
    pub fn new(width: f64, height: f64, screens: f64) -> Self {
        Self {
            offset: 0.0,
            width,
            height,
            screens: if screens.is_finite() { screens.max(1.0) } else { 1.0 },
            layout: LayoutConfig::for_viewport_width(width),
        }
    }

    pub fn content_height(&self) -> f64 {
        self.height * self.screens
    }

    pub fn max_scroll(&self) -> f64 {
        max_scroll(self.content_height(), self.height)
    }

    pub fn progress(&self) -> f64 {
        scroll_progress(self.offset, self.max_scroll())
    }

    /// Keep the same progress across a resize, like a reflowing page would.
    pub fn resize(&mut self, width: f64, height: f64) {
        let progress = self.progress();
        self.width = width;
        self.height = height;
        self.layout = LayoutConfig::for_viewport_width(width);
        self.offset = progress * self.max_scroll().max(0.0);
    }

    pub fn scroll_by(&mut self, delta_px: f64) {
        if !delta_px.is_finite() {
            return;
        }
        self.offset = (self.offset + delta_px).clamp(0.0, self.max_scroll().max(0.0));
    }

    pub fn scroll_lines(&mut self, lines: f64) {
        self.scroll_by(lines * LINE_HEIGHT_PX);
    }

    pub fn scroll_pages(&mut self, pages: f64) {
        self.scroll_by(pages * self.height * PAGE_STEP_FRACTION);
    }

    pub fn home(&mut self) {
        self.offset = 0.0;
    }

    pub fn end(&mut self) {
        self.offset = self.max_scroll().max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_screen_page_spans_three_viewports_of_scroll() {
        let page = VirtualPage::new(1280.0, 720.0, 4.0);
        assert_eq!(page.max_scroll(), 2160.0);
        assert_eq!(page.progress(), 0.0);
    }

    #[test]
    fn scrolling_is_clamped_to_page() {
        let mut page = VirtualPage::new(1280.0, 720.0, 4.0);
        page.scroll_by(-100.0);
        assert_eq!(page.offset, 0.0);
        page.scroll_by(1e9);
        assert_eq!(page.progress(), 1.0);
        page.scroll_by(f64::NAN);
        assert_eq!(page.progress(), 1.0);
    }

    #[test]
    fn home_and_end_jump_to_extremes() {
        let mut page = VirtualPage::new(1280.0, 720.0, 4.0);
        page.end();
        assert_eq!(page.progress(), 1.0);
        page.home();
        assert_eq!(page.progress(), 0.0);
    }

    #[test]
    fn wheel_lines_and_pages_move_expected_distance() {
        let mut page = VirtualPage::new(1280.0, 1000.0, 4.0);
        page.scroll_lines(3.0);
        assert_eq!(page.offset, 120.0);
        page.scroll_pages(1.0);
        assert_eq!(page.offset, 1020.0);
    }

    #[test]
    fn single_screen_page_never_scrolls() {
        let mut page = VirtualPage::new(800.0, 600.0, 1.0);
        page.scroll_by(300.0);
        assert_eq!(page.offset, 0.0);
        assert_eq!(page.progress(), 0.0);
    }

    #[test]
    fn resize_preserves_progress_and_updates_layout() {
        let mut page = VirtualPage::new(1280.0, 800.0, 4.0);
        page.scroll_by(1200.0);
        let before = page.progress();
        page.resize(600.0, 900.0);
        assert!((page.progress() - before).abs() < 1e-12);
        assert_eq!(page.layout, LayoutConfig::MOBILE);
    }
}
