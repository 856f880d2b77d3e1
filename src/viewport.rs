use scrolly_core::scroll::{max_scroll, scroll_progress};
use scrolly_core::LayoutConfig;

/// Latest page metrics, written by the scroll/resize listeners and refreshed
/// once per frame. Writers overwrite each other freely; only the newest
/// values matter.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportState {
    /// Vertical scroll offset in CSS pixels.
    pub scroll_y: f64,
    /// Full document height in CSS pixels.
    pub content_height: f64,
    pub width: f64,
    pub height: f64,
    /// Selected from `width` whenever the viewport is resized.
    pub layout: LayoutConfig,
}

impl ViewportState {
    pub fn new(width: f64, height: f64, content_height: f64, scroll_y: f64) -> Self {
        Self {
            scroll_y,
            content_height,
            width,
            height,
            layout: LayoutConfig::for_viewport_width(width),
        }
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y;
    }

    /// Record a new viewport size and reselect the layout. Returns `true`
    /// when the layout changed.
    pub fn on_resize(&mut self, width: f64, height: f64, content_height: f64) -> bool {
        self.width = width;
        self.height = height;
        self.content_height = content_height;
        let layout = LayoutConfig::for_viewport_width(width);
        let changed = layout != self.layout;
        self.layout = layout;
        changed
    }

    /// Record the current document height, which can change without a
    /// resize (late images, fonts, dynamic content). Returns `true` when it
    /// differs from the stored value.
    pub fn set_content_height(&mut self, content_height: f64) -> bool {
        if content_height == self.content_height {
            return false;
        }
        self.content_height = content_height;
        true
    }

    pub fn max_scroll(&self) -> f64 {
        max_scroll(self.content_height, self.height)
    }

    /// Normalized scroll progress; 0 when the page cannot scroll.
    pub fn progress(&self) -> f64 {
        scroll_progress(self.scroll_y, self.max_scroll())
    }
}
