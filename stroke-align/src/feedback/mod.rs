//! Feedback module - audio cue triggering on status transitions
//!
//! Re-exports only. All logic in submodules.

mod sequencer;

pub use sequencer::{FeedbackCue, FeedbackSequencer};
