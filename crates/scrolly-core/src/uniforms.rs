use crate::camera::Camera;
use crate::constants::TONE_MAPPING_EXPOSURE;
use crate::lighting::{LightRig, LightsUniform};
use crate::mesh::Material;
use glam::{Mat3, Mat4};

/// Per-frame uniform block consumed by `scene.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    /// Inverse-transpose of the model's upper 3x3, padded to 4x4.
    pub normal_matrix: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
    /// x: roughness, y: metalness, z: exposure, w: unused.
    pub material: [f32; 4],
    pub lights: LightsUniform,
}

impl SceneUniforms {
    pub fn new(camera: &Camera, model: Mat4, lights: &LightRig, material: &Material) -> Self {
        let normal = Mat3::from_mat4(model).inverse().transpose();
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            normal_matrix: Mat4::from_mat3(normal).to_cols_array_2d(),
            camera_pos: camera.eye.extend(1.0).to_array(),
            material: [
                material.roughness.clamp(0.04, 1.0),
                material.metalness.clamp(0.0, 1.0),
                TONE_MAPPING_EXPOSURE,
                0.0,
            ],
            lights: lights.to_uniform(),
        }
    }
}
