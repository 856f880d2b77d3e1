//! Platform-independent core of the scroll-driven model viewer.
//!
//! Nothing here touches the DOM or the GPU. Frontends feed in scroll offsets
//! and viewport sizes and get back poses, matrices and mesh data.

pub mod camera;
pub mod constants;
pub mod error;
pub mod gltf_import;
pub mod layout;
pub mod lighting;
pub mod mesh;
pub mod pose;
pub mod scroll;
pub mod uniforms;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::Camera;
pub use error::{AssetError, AssetResult};
pub use gltf_import::import_glb;
pub use layout::{DeviceClass, LayoutConfig};
pub use lighting::LightRig;
pub use mesh::{placeholder_mesh, Material, MeshData, ModelFit, Vertex};
pub use pose::{compute_pose, Pose};
pub use scroll::{scroll_progress, Section};
pub use uniforms::SceneUniforms;

/// Model asset handed to a renderer, tagged with where it came from.
#[derive(Clone, Debug)]
pub struct ModelAsset {
    pub mesh: MeshData,
    pub source: ModelSource,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModelSource {
    Loaded { url: String },
    Placeholder,
}

impl ModelAsset {
    /// Use the imported model, or the placeholder box when loading failed.
    pub fn from_load_result(url: &str, result: AssetResult<MeshData>) -> Self {
        match result {
            Ok(mesh) => {
                log::info!("Model loaded successfully from {url}");
                Self {
                    mesh,
                    source: ModelSource::Loaded {
                        url: url.to_string(),
                    },
                }
            }
            Err(e) => {
                log::error!("Error loading model {url}: {e}");
                log::warn!("Using placeholder box in place of {url}");
                Self::placeholder()
            }
        }
    }

    pub fn placeholder() -> Self {
        Self {
            mesh: placeholder_mesh(),
            source: ModelSource::Placeholder,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.source == ModelSource::Placeholder
    }
}

/// Download progress as a percentage, when the total size is known.
pub fn load_percent(loaded: u64, total: Option<u64>) -> Option<f64> {
    match total {
        Some(t) if t > 0 => Some((loaded as f64 * 100.0 / t as f64).min(100.0)),
        _ => None,
    }
}

/// Running byte count for a streamed download.
///
/// `advance` yields a percentage each time the download crosses into a new
/// tenth of the known total, so per-chunk callers log a bounded number of
/// lines.
#[derive(Clone, Debug, Default)]
pub struct LoadProgress {
    total: Option<u64>,
    loaded: u64,
    reported_step: Option<u32>,
}

impl LoadProgress {
    pub fn new(total: Option<u64>) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn loaded(&self) -> u64 {
        self.loaded
    }

    pub fn percent(&self) -> Option<f64> {
        load_percent(self.loaded, self.total)
    }

    /// Count a received chunk. Returns the percentage when it should be
    /// reported.
    pub fn advance(&mut self, chunk_len: u64) -> Option<f64> {
        self.loaded = self.loaded.saturating_add(chunk_len);
        let pct = self.percent()?;
        let step = (pct / 10.0).floor() as u32;
        if self.reported_step.is_some_and(|r| step <= r) {
            return None;
        }
        self.reported_step = Some(step);
        Some(pct)
    }
}
