use crate::constants::{backing_size, effective_pixel_ratio, HIDDEN_CLASS, LOADING_ID};
use crate::viewport::ViewportState;
use scrolly_core::constants::MAX_PIXEL_RATIO;
use web_sys as web;

/// Match the canvas backing store to its CSS size times the capped pixel
/// ratio. Returns the new size in physical pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let dpr = web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0);
    let ratio = effective_pixel_ratio(dpr, MAX_PIXEL_RATIO);
    let rect = canvas.get_bounding_client_rect();
    let (w_px, h_px) = backing_size(rect.width(), rect.height(), ratio);
    if canvas.width() != w_px || canvas.height() != h_px {
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
    (w_px, h_px)
}

#[inline]
pub fn hide_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_ID) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
    }
}

fn js_f64(v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> f64 {
    v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Full document height in CSS pixels, if the page has a body.
pub fn content_height(window: &web::Window) -> Option<f64> {
    window
        .document()
        .and_then(|d| d.body())
        .map(|b| b.scroll_height() as f64)
}

/// `(inner width, inner height, document height)` in CSS pixels.
pub fn page_metrics(window: &web::Window) -> (f64, f64, f64) {
    let width = js_f64(window.inner_width());
    let height = js_f64(window.inner_height());
    let content = content_height(window).unwrap_or(height);
    (width, height, content)
}

pub fn read_viewport(window: &web::Window) -> ViewportState {
    let (width, height, content) = page_metrics(window);
    ViewportState::new(width, height, content, scroll_y(window))
}
