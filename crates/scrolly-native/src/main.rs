use clap::Parser;
use scrolly_core::constants::MODEL_PATH;
use scrolly_core::{compute_pose, import_glb, AssetError, ModelAsset, Section};
use scrolly_render::GpuState;
use std::path::PathBuf;
use winit::event::{ElementState, Event, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowBuilder;

mod page;
use page::VirtualPage;

#[derive(Parser)]
#[command(name = "scrolly-native")]
#[command(about = "Preview the scroll-driven model viewer in a desktop window", long_about = None)]
#[command(version)]
struct Cli {
    /// GLB model to display (falls back to a placeholder box)
    #[arg(default_value = MODEL_PATH)]
    model: PathBuf,

    /// Virtual page height, in viewport heights
    #[arg(long, default_value_t = 4.0)]
    page_screens: f64,
}

fn load_model(path: &PathBuf) -> ModelAsset {
    let result = std::fs::read(path)
        .map_err(AssetError::from)
        .and_then(|bytes| import_glb(&bytes));
    ModelAsset::from_load_result(&path.display().to_string(), result)
}

fn handle_key(page: &mut VirtualPage, event: &KeyEvent) {
    if event.state != ElementState::Pressed {
        return;
    }
    match &event.logical_key {
        Key::Named(NamedKey::ArrowDown) => page.scroll_lines(1.0),
        Key::Named(NamedKey::ArrowUp) => page.scroll_lines(-1.0),
        Key::Named(NamedKey::PageDown | NamedKey::Space) => page.scroll_pages(1.0),
        Key::Named(NamedKey::PageUp) => page.scroll_pages(-1.0),
        Key::Named(NamedKey::Home) => page.home(),
        Key::Named(NamedKey::End) => page.end(),
        _ => {}
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Scrolly (native)")
        .build(&event_loop)?;

    let size = window.inner_size();
    let logical = size.to_logical::<f64>(window.scale_factor());
    let mut page = VirtualPage::new(logical.width, logical.height, cli.page_screens);

    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(&window)?;
    let mut state = pollster::block_on(GpuState::new(
        &instance,
        surface,
        size.width,
        size.height,
    ))?;
    let model = load_model(&cli.model);
    state.set_mesh(&model.mesh);

    // the surface borrows the window for the life of the loop
    let window = &window;
    let mut last_section = None;
    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => {
            state.resize_if_needed(size.width, size.height);
            let logical = size.to_logical::<f64>(window.scale_factor());
            page.resize(logical.width, logical.height);
        }
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent {
            event: WindowEvent::MouseWheel { delta, .. },
            ..
        } => match delta {
            // wheel up reports positive y; scrolling down the page is positive offset
            MouseScrollDelta::LineDelta(_, y) => page.scroll_lines(-y as f64),
            MouseScrollDelta::PixelDelta(pos) => {
                page.scroll_by(-pos.to_logical::<f64>(window.scale_factor()).y)
            }
        },
        Event::WindowEvent {
            event: WindowEvent::KeyboardInput { event, .. },
            ..
        } => handle_key(&mut page, &event),
        Event::AboutToWait => {
            let progress = page.progress();
            let (section, _) = Section::locate(progress);
            if last_section != Some(section) {
                log::info!("[preview] {} ({:.0}%)", section.name(), progress * 100.0);
                last_section = Some(section);
            }
            state.set_pose(&compute_pose(progress, &page.layout));
            match state.render() {
                Ok(_) => window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    state.reconfigure()
                }
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("render error: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
