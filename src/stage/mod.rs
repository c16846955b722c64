//! Reveal stage state machine driven by the two UI commands

mod controller;

pub use controller::{StageController, StageTransition};
