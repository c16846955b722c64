use crate::scene::{Camera, CameraPose};

/// Hook called once per rendered frame
pub trait FrameObserver {
    fn on_frame(&mut self, dt: f32, camera: &Camera);
}

/// Destination for periodic camera pose reports
pub trait PoseSink {
    fn record(&mut self, pose: &CameraPose);
}

/// Writes poses to the browser console, or to `tracing` off the web
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl PoseSink for ConsoleSink {
    fn record(&mut self, pose: &CameraPose) {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(&pose.to_string()));

        #[cfg(not(target_arch = "wasm32"))]
        tracing::info!(%pose, "camera pose");
    }
}

/// Reports the camera pose every `interval` seconds of rendered time
#[derive(Debug)]
pub struct PoseLogger<S: PoseSink> {
    interval: f32,
    elapsed: f32,
    sink: S,
}

impl<S: PoseSink> PoseLogger<S> {
    pub fn new(interval: f32, sink: S) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: PoseSink> FrameObserver for PoseLogger<S> {
    fn on_frame(&mut self, dt: f32, camera: &Camera) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.elapsed += dt;
        // At most one report per frame, even after a long stall
        if self.elapsed >= self.interval {
            self.elapsed %= self.interval;
            self.sink.record(&camera.pose());
        }
    }
}
