//! Node scale animation for staged reveal
//!
//! Newly revealed nodes spring from zero to full size; hidden nodes spring
//! back to zero and are then skipped when drawing.

mod spring;
mod node_animator;

pub use spring::{Spring, SpringConfig};
pub use node_animator::{NodeAnimator, NodeVisualState, HIDDEN_EPSILON};
