pub mod webgl;
pub mod shaders;
pub mod pipeline;

pub use webgl::GlContext;
pub use pipeline::RenderPipeline;
