//! Light rig: soft ambient fill, a key and a back light, and a small highlight.

use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    /// Light position; the light shines from here towards the origin.
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LightRig {
    pub ambient_color: Vec3,
    pub ambient_intensity: f32,
    pub key: DirectionalLight,
    pub fill: DirectionalLight,
    pub highlight: PointLight,
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            ambient_color: Vec3::ONE,
            ambient_intensity: 0.5,
            key: DirectionalLight {
                position: Vec3::new(5.0, 5.0, 5.0),
                color: Vec3::ONE,
                intensity: 1.0,
            },
            fill: DirectionalLight {
                position: Vec3::new(-5.0, -5.0, -5.0),
                color: Vec3::ONE,
                intensity: 0.5,
            },
            highlight: PointLight {
                position: Vec3::new(0.0, 3.0, 3.0),
                color: Vec3::ONE,
                intensity: 0.5,
            },
        }
    }
}

/// GPU layout of the light rig. Vectors are padded to `vec4` for WGSL.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightsUniform {
    pub ambient: [f32; 4],
    /// xyz: unit vector pointing towards the light; w unused.
    pub key_dir: [f32; 4],
    pub key_color: [f32; 4],
    pub fill_dir: [f32; 4],
    pub fill_color: [f32; 4],
    pub point_pos: [f32; 4],
    pub point_color: [f32; 4],
}

impl LightRig {
    pub fn to_uniform(&self) -> LightsUniform {
        let scaled = |c: Vec3, i: f32| (c * i).extend(1.0).to_array();
        LightsUniform {
            ambient: scaled(self.ambient_color, self.ambient_intensity),
            key_dir: self.key.position.normalize_or_zero().extend(0.0).to_array(),
            key_color: scaled(self.key.color, self.key.intensity),
            fill_dir: self.fill.position.normalize_or_zero().extend(0.0).to_array(),
            fill_color: scaled(self.fill.color, self.fill.intensity),
            point_pos: self.highlight.position.extend(1.0).to_array(),
            point_color: scaled(self.highlight.color, self.highlight.intensity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_and_fill_face_each_other() {
        let u = LightRig::default().to_uniform();
        let key = Vec3::from_slice(&u.key_dir[..3]);
        let fill = Vec3::from_slice(&u.fill_dir[..3]);
        assert!((key.length() - 1.0).abs() < 1e-6);
        assert!((key + fill).length() < 1e-6);
    }

    #[test]
    fn intensities_are_folded_into_colors() {
        let u = LightRig::default().to_uniform();
        assert_eq!(u.ambient[..3], [0.5, 0.5, 0.5]);
        assert_eq!(u.key_color[..3], [1.0, 1.0, 1.0]);
        assert_eq!(u.fill_color[..3], [0.5, 0.5, 0.5]);
        assert_eq!(u.point_color[..3], [0.5, 0.5, 0.5]);
    }
}
