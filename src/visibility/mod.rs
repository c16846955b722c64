//! Derived node/edge visibility for a given stage

mod resolver;

pub use resolver::{resolve, EdgeDescriptor, Visibility};
