use std::fmt;
use crate::config::CameraConfig;
use crate::math::{Mat4, Vec3};

/// Position and Euler XYZ rotation (radians) of the camera at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl fmt::Display for CameraPose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position: [{:.3}, {:.3}, {:.3}] Rotation: [{:.3}, {:.3}, {:.3}]",
            self.position.x,
            self.position.y,
            self.position.z,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }
}

/// Static perspective camera
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    /// Euler XYZ, radians
    pub rotation: Vec3,
    /// Vertical field of view, radians
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            position: Vec3::from_array(config.position),
            rotation: Vec3::from_array(config.rotation_degrees).to_radians(),
            fov: config.fov_degrees.to_radians(),
            near: config.near,
            far: config.far,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::camera_view(self.position, self.rotation)
    }

    pub fn projection_matrix(&self, width: i32, height: i32) -> Mat4 {
        let aspect = if height > 0 {
            width as f32 / height as f32
        } else {
            1.0
        };
        Mat4::perspective(self.fov, aspect, self.near, self.far)
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            rotation: self.rotation,
        }
    }
}
