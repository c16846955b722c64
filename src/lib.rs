use wasm_bindgen::prelude::*;
use web_sys::{WebGl2RenderingContext, HtmlCanvasElement};

pub mod error;
pub mod config;
pub mod math;
pub mod skeleton;
pub mod stage;
pub mod visibility;
pub mod animation;
pub mod scene;
pub mod mesh;
pub mod render;
pub mod diagnostics;

#[cfg(test)]
mod testing;

pub use error::{RevealError, RevealResult};
pub use config::SceneConfig;
pub use scene::{FrameData, TreeScene};

use diagnostics::{ConsoleSink, FrameObserver, PoseLogger};
use render::RenderPipeline;
use scene::Camera;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js(err: RevealError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Staged binary-tree viewer exposed to JavaScript.
///
/// The host page calls `render(dt)` from `requestAnimationFrame` and wires its
/// two buttons to `increment_stage` / `decrement_stage`.
#[wasm_bindgen]
pub struct StagedTreeViewer {
    pipeline: RenderPipeline,
    scene: TreeScene,
    camera: Camera,
    pose_logger: Option<PoseLogger<ConsoleSink>>,
    pose_interval: f32,
}

#[wasm_bindgen]
impl StagedTreeViewer {
    /// Create a viewer for the built-in sample tree
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<StagedTreeViewer, JsValue> {
        Self::create(canvas, SceneConfig::default())
    }

    /// Create a viewer from a YAML scene description
    #[wasm_bindgen]
    pub fn with_config(canvas: HtmlCanvasElement, yaml: &str) -> Result<StagedTreeViewer, JsValue> {
        let config = SceneConfig::from_yaml(yaml).map_err(to_js)?;
        Self::create(canvas, config)
    }

    fn create(canvas: HtmlCanvasElement, config: SceneConfig) -> Result<StagedTreeViewer, JsValue> {
        config.validate().map_err(to_js)?;

        let width = canvas.width() as i32;
        let height = canvas.height() as i32;

        let gl = canvas
            .get_context("webgl2")?
            .ok_or("Failed to get WebGL2 context")?
            .dyn_into::<WebGl2RenderingContext>()?;

        let pipeline = RenderPipeline::new(gl, width, height, &config).map_err(to_js)?;
        let scene = TreeScene::new(&config).map_err(to_js)?;
        let camera = Camera::from_config(&config.camera);

        let pose_interval = config.diagnostics.interval_seconds;
        let pose_logger = config
            .diagnostics
            .log_camera_pose
            .then(|| PoseLogger::new(pose_interval, ConsoleSink));

        Ok(Self {
            pipeline,
            scene,
            camera,
            pose_logger,
            pose_interval,
        })
    }

    /// Advance animations by `dt` seconds and draw a frame
    #[wasm_bindgen]
    pub fn render(&mut self, dt: f32) {
        self.scene.update(dt);

        if let Some(logger) = self.pose_logger.as_mut() {
            logger.on_frame(dt, &self.camera);
        }

        let frame = self.scene.frame();
        self.pipeline.render(&frame, &self.camera);
    }

    /// Resize the canvas
    #[wasm_bindgen]
    pub fn resize(&mut self, width: i32, height: i32) {
        self.pipeline.resize(width, height);
    }

    // === Stage Controls ===

    /// Reveal the next level. Returns false if every level was already shown.
    #[wasm_bindgen]
    pub fn increment_stage(&mut self) -> bool {
        self.scene.increment_stage().changed()
    }

    /// Hide the deepest revealed level. Returns false if only the root was shown.
    #[wasm_bindgen]
    pub fn decrement_stage(&mut self) -> bool {
        self.scene.decrement_stage().changed()
    }

    #[wasm_bindgen]
    pub fn current_stage(&self) -> usize {
        self.scene.current_stage()
    }

    #[wasm_bindgen]
    pub fn max_stage(&self) -> usize {
        self.scene.max_stage()
    }

    #[wasm_bindgen]
    pub fn can_increment(&self) -> bool {
        self.scene.can_increment()
    }

    #[wasm_bindgen]
    pub fn can_decrement(&self) -> bool {
        self.scene.can_decrement()
    }

    /// True once every node animation has come to rest
    #[wasm_bindgen]
    pub fn is_settled(&self) -> bool {
        self.scene.is_settled()
    }

    // === Diagnostics ===

    /// Turn periodic camera pose logging on or off
    #[wasm_bindgen]
    pub fn set_pose_logging(&mut self, enabled: bool) {
        self.pose_logger = enabled.then(|| PoseLogger::new(self.pose_interval, ConsoleSink));
    }
}
