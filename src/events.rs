use crate::dom;
use crate::viewport::ViewportState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered DOM listener; removed from its target when dropped.
pub struct ListenerHandle {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut()>,
}

impl ListenerHandle {
    pub fn attach(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut() + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                closure,
            }),
            Err(e) => {
                log::error!("failed to attach '{}' listener: {:?}", event, e);
                None
            }
        }
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

pub fn wire_scroll(
    window: &web::Window,
    viewport: Rc<RefCell<ViewportState>>,
) -> Option<ListenerHandle> {
    let win = window.clone();
    ListenerHandle::attach(window, "scroll", move || {
        viewport.borrow_mut().on_scroll(dom::scroll_y(&win));
    })
}

pub fn wire_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    viewport: Rc<RefCell<ViewportState>>,
) -> Option<ListenerHandle> {
    let win = window.clone();
    let canvas = canvas.clone();
    ListenerHandle::attach(window, "resize", move || {
        dom::sync_canvas_backing_size(&canvas);
        let (width, height, content) = dom::page_metrics(&win);
        let mut v = viewport.borrow_mut();
        if v.on_resize(width, height, content) {
            log::info!(
                "[viewport] layout start_x={} left_x={} at width {}",
                v.layout.start_x,
                v.layout.left_x,
                width
            );
        }
        // a resize can reflow the page and move the scroll offset
        v.on_scroll(dom::scroll_y(&win));
    })
}
