pub mod node_box;

pub use node_box::{node_box, Mesh, Vertex};
