//! Landmarks module - raw detector points to role-labeled pose
//!
//! Re-exports only. All logic in submodules.

mod point;
mod pose;
mod interpreter;

pub use point::Point;
pub use pose::{EyePair, Pose, ROLE_COUNT};
pub use interpreter::{interpret, ConfidenceCutoffs, MAX_POINTS};
