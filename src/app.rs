use crate::constants::{CANVAS_ID, MODEL_URL_ATTR};
use crate::events::{self, ListenerHandle};
use crate::frame::{AnimationLoop, FrameContext};
use crate::{asset, dom};
use scrolly_core::constants::MODEL_PATH;
use scrolly_render::GpuState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Top-level controller: owns the frame context, the DOM listeners and the
/// animation loop. Dropping it detaches everything.
pub struct App {
    frame_loop: AnimationLoop,
    _listeners: Vec<ListenerHandle>,
    frame_ctx: Rc<RefCell<FrameContext>>,
}

impl App {
    pub async fn init() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let canvas_el = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
        let canvas: web::HtmlCanvasElement = canvas_el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        let model_url = canvas
            .get_attribute(MODEL_URL_ATTR)
            .unwrap_or_else(|| MODEL_PATH.to_string());

        let (width, height) = dom::sync_canvas_backing_size(&canvas);
        let viewport = Rc::new(RefCell::new(dom::read_viewport(&window)));
        // Scrolls during GPU init and the model download land in `viewport`.
        let listeners = [
            events::wire_scroll(&window, viewport.clone()),
            events::wire_resize(&window, &canvas, viewport.clone()),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let gpu_result = GpuState::new(&instance, surface, width, height).await;
        let mut gpu = match gpu_result {
            Ok(g) => g,
            Err(e) => {
                dom::hide_loading(&document);
                return Err(e.context("WebGPU init"));
            }
        };

        // The model (or its placeholder) is in place before the first frame.
        let model = asset::load_model(&model_url).await;
        gpu.set_mesh(&model.mesh);
        dom::hide_loading(&document);

        let frame_ctx = Rc::new(RefCell::new(FrameContext {
            window,
            viewport,
            canvas,
            gpu,
            last_pose: None,
            last_section: None,
        }));
        let frame_loop = AnimationLoop::start(frame_ctx.clone());
        log::info!(
            "[app] running with {} model",
            if model.is_placeholder() { "placeholder" } else { "loaded" }
        );

        Ok(Self {
            frame_loop,
            _listeners: listeners,
            frame_ctx,
        })
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    /// Current scroll progress as seen by the frame loop.
    pub fn progress(&self) -> f64 {
        self.frame_ctx.borrow().viewport.borrow().progress()
    }

    pub fn teardown(mut self) {
        self.frame_loop.stop();
        log::info!("[app] torn down");
    }
}
