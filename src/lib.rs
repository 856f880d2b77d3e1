#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod app;
mod asset;
mod constants;
mod dom;
mod events;
mod frame;
mod viewport;

thread_local! {
    static APP: RefCell<Option<app::App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scrolly-web starting");

    spawn_local(async move {
        match app::App::init().await {
            Ok(app) => APP.with(|slot| {
                if let Some(old) = slot.borrow_mut().replace(app) {
                    old.teardown();
                }
            }),
            Err(e) => log::error!("init error: {:?}", e),
        }
    });
    Ok(())
}

/// Stop the animation loop and detach all listeners.
#[wasm_bindgen]
pub fn teardown() {
    if let Some(app) = APP.with(|slot| slot.borrow_mut().take()) {
        app.teardown();
    }
}

/// Scroll progress the model is currently posed for, or `None` before init.
#[wasm_bindgen]
pub fn scroll_progress() -> Option<f64> {
    APP.with(|slot| {
        slot.borrow()
            .as_ref()
            .filter(|app| app.is_running())
            .map(|app| app.progress())
    })
}
