//! Scroll-driven placement of the model.
//!
//! The model slides from a right-hand resting offset to the centre while
//! starting to yaw, continues to the left offset while finishing a quarter
//! turn, slides back to centre while pitching to show its underside, and
//! finally pitches half a turn in place to show its top. Each section is a
//! linear interpolation in its local progress, so the path is continuous at
//! every section boundary.

use crate::layout::LayoutConfig;
use crate::mesh::ModelFit;
use crate::scroll::Section;
use glam::{Mat4, Vec3};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// Position and Euler rotation (radians, XYZ order) applied to the model.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub position_x: f64,
    pub position_y: f64,
    pub rotation_x: f64,
    pub rotation_y: f64,
    pub rotation_z: f64,
}

impl Pose {
    pub fn is_finite(&self) -> bool {
        self.position_x.is_finite()
            && self.position_y.is_finite()
            && self.rotation_x.is_finite()
            && self.rotation_y.is_finite()
            && self.rotation_z.is_finite()
    }

    #[inline]
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.position_x as f32, self.position_y as f32, 0.0)
    }

    /// Rotation matrix for Euler order XYZ (`Rx * Ry * Rz`).
    pub fn rotation(&self) -> Mat4 {
        Mat4::from_rotation_x(self.rotation_x as f32)
            * Mat4::from_rotation_y(self.rotation_y as f32)
            * Mat4::from_rotation_z(self.rotation_z as f32)
    }

    /// World matrix for a model whose raw geometry is normalized by `fit`.
    pub fn model_matrix(&self, fit: &ModelFit) -> Mat4 {
        Mat4::from_translation(self.translation()) * self.rotation() * fit.matrix()
    }
}

/// Map normalized scroll progress to the model pose.
///
/// `progress` is clamped to \[0, 1\]; non-finite input is treated as 0.
pub fn compute_pose(progress: f64, layout: &LayoutConfig) -> Pose {
    let (section, p) = Section::locate(progress);
    let left_span = layout.left_x.abs();
    let (position_x, rotation_y, rotation_x) = match section {
        Section::Hero => (layout.start_x * (1.0 - p), -FRAC_PI_4 * p, 0.0),
        Section::About => (-p * left_span, -FRAC_PI_4 - FRAC_PI_4 * p, 0.0),
        Section::Experience => (layout.left_x + p * left_span, -FRAC_PI_2, -FRAC_PI_2 * p),
        Section::Contact => (0.0, -FRAC_PI_2, -FRAC_PI_2 + PI * p),
    };
    Pose {
        position_x,
        position_y: 0.0,
        rotation_x,
        rotation_y,
        rotation_z: 0.0,
    }
}
