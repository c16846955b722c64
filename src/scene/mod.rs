//! Scene state shared by the renderer and the host page
//!
//! `TreeScene` owns the reveal core and hands the renderer one `FrameData`
//! per frame; the renderer never keeps state of its own about the tree.

pub mod camera;
pub mod frame;
pub mod state;

pub use camera::{Camera, CameraPose};
pub use frame::{EdgeSegment, FrameData, NodeInstance};
pub use state::TreeScene;
