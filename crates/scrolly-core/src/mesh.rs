//! CPU-side mesh data, bounds and the fallback box.

use crate::constants::{
    hex_to_linear, MODEL_FIT_SIZE, PLACEHOLDER_METALNESS, PLACEHOLDER_RGB, PLACEHOLDER_ROUGHNESS,
    PLACEHOLDER_SIZE,
};
use glam::{Mat4, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    /// Linear RGB base colour.
    pub color: [f32; 3],
}

/// Surface response shared by the whole mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub roughness: f32,
    pub metalness: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            roughness: 1.0,
            metalness: 0.0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    /// Triangle list.
    pub indices: Vec<u32>,
    pub material: Material,
}

impl MeshData {
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.indices.len() < 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.vertices.iter().map(|v| Vec3::from(v.position)))
    }

    /// Centre and scale that normalize this mesh to [`MODEL_FIT_SIZE`].
    pub fn fit(&self) -> ModelFit {
        self.bounds()
            .map(|b| ModelFit::from_bounds(&b, MODEL_FIT_SIZE))
            .unwrap_or(ModelFit::IDENTITY)
    }

    /// Append `other`, rebasing its indices.
    pub fn append(&mut self, other: MeshData) {
        let base = self.vertices.len() as u32;
        self.vertices.extend(other.vertices);
        self.indices.extend(other.indices.into_iter().map(|i| i + base));
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some(Self { min, max })
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Normalizing transform applied to raw model geometry: move the bounding-box
/// centre to the origin, then scale uniformly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelFit {
    pub center: Vec3,
    pub scale: f32,
}

impl ModelFit {
    pub const IDENTITY: ModelFit = ModelFit {
        center: Vec3::ZERO,
        scale: 1.0,
    };

    /// Fit `bounds` so its largest dimension becomes `target_size`.
    ///
    /// Degenerate (flat in every axis) bounds are only re-centred.
    pub fn from_bounds(bounds: &Bounds, target_size: f32) -> Self {
        let max_dim = bounds.size().max_element();
        let scale = if max_dim > f32::EPSILON && max_dim.is_finite() {
            target_size / max_dim
        } else {
            1.0
        };
        Self {
            center: bounds.center(),
            scale,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale(Vec3::splat(self.scale)) * Mat4::from_translation(-self.center)
    }
}

/// Smooth per-vertex normals from triangle faces, weighted by face area.
pub fn compute_normals(vertices: &mut [Vertex], indices: &[u32]) {
    let mut acc = vec![Vec3::ZERO; vertices.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        if a >= vertices.len() || b >= vertices.len() || c >= vertices.len() {
            continue;
        }
        let pa = Vec3::from(vertices[a].position);
        let pb = Vec3::from(vertices[b].position);
        let pc = Vec3::from(vertices[c].position);
        let n = (pb - pa).cross(pc - pa);
        acc[a] += n;
        acc[b] += n;
        acc[c] += n;
    }
    for (v, n) in vertices.iter_mut().zip(acc) {
        let n = n.normalize_or_zero();
        v.normal = if n == Vec3::ZERO { Vec3::Y } else { n }.to_array();
    }
}

/// Axis-aligned box centred at the origin, with flat-shaded faces.
pub fn box_mesh(size: f32, color: [f32; 3], material: Material) -> MeshData {
    let h = size * 0.5;
    // (normal, tangent u, tangent v) per face; u x v == normal keeps CCW winding
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (normal, u, v) in faces {
        let base = vertices.len() as u32;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let p = (normal + u * su + v * sv) * h;
            vertices.push(Vertex {
                position: p.to_array(),
                normal: normal.to_array(),
                color,
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    MeshData {
        vertices,
        indices,
        material,
    }
}

/// Bread-coloured box shown when the model cannot be loaded.
pub fn placeholder_mesh() -> MeshData {
    box_mesh(
        PLACEHOLDER_SIZE,
        hex_to_linear(PLACEHOLDER_RGB),
        Material {
            roughness: PLACEHOLDER_ROUGHNESS,
            metalness: PLACEHOLDER_METALNESS,
        },
    )
}
