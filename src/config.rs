//! Scene configuration
//!
//! Everything tunable about the scene lives here and can be loaded from YAML.
//! Missing fields fall back to the built-in sample scene.

use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::animation::SpringConfig;
use crate::error::{RevealError, RevealResult};
use crate::skeleton::TreeSkeleton;

/// X-coordinates of the sample tree, one row per level
pub fn sample_levels() -> Vec<Vec<f32>> {
    vec![
        vec![0.0],
        vec![-2.0, 2.0],
        vec![-3.0, -1.0, 1.0, 3.0],
        vec![-4.0, -2.0, 0.0, 2.0, 4.0],
    ]
}

/// Where slot x-coordinates come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeLayout {
    /// Explicit x-coordinates per level
    Levels(Vec<Vec<f32>>),
    /// Complete binary tree generated from a level count
    Generated { level_count: usize, spacing_x: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    pub layout: TreeLayout,
    /// Vertical distance between levels
    pub row_spacing: f32,
    /// Y of the root row
    pub y_offset: f32,
    /// Edge length of a fully shown node box
    pub node_size: f32,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            layout: TreeLayout::Levels(sample_levels()),
            row_spacing: 1.5,
            y_offset: 2.0,
            node_size: 1.0,
        }
    }
}

impl TreeConfig {
    pub fn build_skeleton(&self) -> RevealResult<TreeSkeleton> {
        match &self.layout {
            TreeLayout::Levels(levels) => {
                TreeSkeleton::from_levels(levels, self.row_spacing, self.y_offset)
            }
            TreeLayout::Generated { level_count, spacing_x } => {
                TreeSkeleton::build(*level_count, *spacing_x, self.row_spacing, self.y_offset)
            }
        }
    }
}

/// Fixed camera: perspective projection with a position and Euler XYZ rotation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    pub position: [f32; 3],
    /// Euler XYZ rotation in degrees
    pub rotation_degrees: [f32; 3],
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 50.0,
            position: [2.4, -3.1, 4.1],
            rotation_degrees: [40.0, 0.0, 45.0],
            near: 0.1,
            far: 1000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub ambient_intensity: f32,
    /// Directional light position; it shines toward the origin
    pub directional_position: [f32; 3],
    pub directional_intensity: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient_intensity: 0.0,
            directional_position: [5.0, 10.0, 5.0],
            directional_intensity: 1.5,
        }
    }
}

/// Linear RGB colors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub node: [f32; 3],
    pub edge: [f32; 3],
    pub background: [f32; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            // CSS "lightblue"
            node: [0.678, 0.847, 0.902],
            edge: [1.0, 1.0, 1.0],
            background: [0.0, 0.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Periodically log the camera pose to the console
    pub log_camera_pose: bool,
    pub interval_seconds: f32,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            log_camera_pose: false,
            interval_seconds: 1.0,
        }
    }
}

/// Complete scene configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub tree: TreeConfig,
    pub spring: SpringConfig,
    pub camera: CameraConfig,
    pub lights: LightingConfig,
    pub palette: Palette,
    pub diagnostics: DiagnosticsConfig,
}

impl SceneConfig {
    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> RevealResult<Self> {
        let config: SceneConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        debug!(layout = ?config.tree.layout, spring = ?config.spring, "scene config loaded");
        Ok(config)
    }

    /// Check every setting that would otherwise fail later, at setup time
    pub fn validate(&self) -> RevealResult<()> {
        self.tree.build_skeleton()?;
        self.spring.validate()?;

        if !(self.tree.node_size.is_finite() && self.tree.node_size > 0.0) {
            return Err(RevealError::invalid(format!(
                "node size must be positive, got {}",
                self.tree.node_size
            )));
        }

        let camera = &self.camera;
        if !(camera.fov_degrees > 0.0 && camera.fov_degrees < 180.0) {
            return Err(RevealError::invalid(format!(
                "camera fov must be between 0 and 180 degrees, got {}",
                camera.fov_degrees
            )));
        }
        if !(camera.near > 0.0 && camera.far > camera.near) {
            return Err(RevealError::invalid(format!(
                "camera clip planes must satisfy 0 < near < far, got {} / {}",
                camera.near, camera.far
            )));
        }

        if !(self.diagnostics.interval_seconds > 0.0) {
            return Err(RevealError::invalid(format!(
                "diagnostics interval must be positive, got {}",
                self.diagnostics.interval_seconds
            )));
        }

        Ok(())
    }
}
