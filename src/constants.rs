// DOM contract with `index.html`.
pub const CANVAS_ID: &str = "webgl-canvas";
pub const LOADING_ID: &str = "loading";
pub const HIDDEN_CLASS: &str = "hidden";

// Optional canvas attribute overriding the model URL.
pub const MODEL_URL_ATTR: &str = "data-model";

/// Device pixel ratio used for the canvas backing store, capped to keep
/// fill-rate reasonable on high-density screens.
#[inline]
pub fn effective_pixel_ratio(device_pixel_ratio: f64, max_ratio: f64) -> f64 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(max_ratio)
    } else {
        1.0
    }
}

/// Backing-store size in physical pixels for a CSS size, never zero.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, pixel_ratio: f64) -> (u32, u32) {
    let w = (css_width * pixel_ratio).max(0.0) as u32;
    let h = (css_height * pixel_ratio).max(0.0) as u32;
    (w.max(1), h.max(1))
}
