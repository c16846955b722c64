//! Optional render-loop observers
//!
//! Nothing here reads or writes tree state; observers only see the frame
//! delta and the camera.

mod pose_logger;

pub use pose_logger::{ConsoleSink, FrameObserver, PoseLogger, PoseSink};
