use crate::dom;
use crate::viewport::ViewportState;
use scrolly_core::{compute_pose, Pose, Section};
use scrolly_render::GpuState;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame update reads or writes.
pub struct FrameContext {
    pub window: web::Window,
    pub viewport: Rc<RefCell<ViewportState>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: GpuState<'static>,
    pub last_pose: Option<Pose>,
    pub last_section: Option<Section>,
}

impl FrameContext {
    /// Pose the model from the latest scroll state and draw. Returns `false`
    /// when rendering cannot continue.
    pub fn frame(&mut self) -> bool {
        let (progress, layout) = {
            let mut v = self.viewport.borrow_mut();
            if let Some(content) = dom::content_height(&self.window) {
                if v.set_content_height(content) {
                    log::debug!("[frame] document height now {}", content);
                }
            }
            (v.progress(), v.layout)
        };
        let pose = compute_pose(progress, &layout);
        let (section, _) = Section::locate(progress);
        if self.last_section != Some(section) {
            log::debug!("[frame] entered {} at progress {:.3}", section.name(), progress);
            self.last_section = Some(section);
        }
        if self.last_pose != Some(pose) {
            self.gpu.set_pose(&pose);
            self.last_pose = Some(pose);
        }

        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        match self.gpu.render() {
            Ok(()) => true,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.gpu.reconfigure();
                true
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("render error: out of GPU memory, stopping");
                false
            }
            Err(e) => {
                log::warn!("render error: {:?}", e);
                true
            }
        }
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` loop driving a [`FrameContext`].
pub struct AnimationLoop {
    tick: TickClosure,
    request_id: Rc<Cell<Option<i32>>>,
}

impl AnimationLoop {
    pub fn start(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let tick: TickClosure = Rc::new(RefCell::new(None));
        let request_id = Rc::new(Cell::new(None));
        let tick_clone = tick.clone();
        let id_clone = request_id.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            id_clone.set(None);
            if !frame_ctx.borrow_mut().frame() {
                return;
            }
            if let Some(cb) = tick_clone.borrow().as_ref() {
                id_clone.set(request_frame(cb));
            }
        }) as Box<dyn FnMut()>));
        if let Some(cb) = tick.borrow().as_ref() {
            request_id.set(request_frame(cb));
        }
        Self { tick, request_id }
    }

    pub fn is_running(&self) -> bool {
        self.request_id.get().is_some()
    }

    /// Cancel the pending frame and release the callback.
    pub fn stop(&mut self) {
        if let (Some(id), Some(w)) = (self.request_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // drops the closure and with it the Rc cycle through `tick_clone`
        self.tick.borrow_mut().take();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    web::window().and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
}
