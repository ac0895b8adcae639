//! Alignment module - arm and head geometry against tiered thresholds
//!
//! Re-exports only. All logic in submodules.

mod sensitivity;
mod status;
mod geometry;
mod classifier;

pub use sensitivity::{Sensitivity, Thresholds};
pub use status::{AlignmentStatus, HeadTiltStatus};
pub use classifier::{assess, classify, evaluate, head_tilt, measure, Assessment, Measurements};
