//! Feedback sequencer - edge-triggered audio cues
//!
//! Holds only the previous frame's status. A cue fires on entering
//! Aligned or Misaligned from any other state; repeats and drops into
//! NotDetected are silent.

use crate::alignment::AlignmentStatus;

/// Cue for the audio host
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackCue {
    PlayPositiveCue,
    PlayNegativeCue,
}

impl FeedbackCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackCue::PlayPositiveCue => "positive",
            FeedbackCue::PlayNegativeCue => "negative",
        }
    }
}

/// Two-state memory over the alignment stream
#[derive(Clone, Debug, Default)]
pub struct FeedbackSequencer {
    previous: AlignmentStatus,
}

impl FeedbackSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame's status; returns the cue to play, if any
    pub fn observe(&mut self, current: AlignmentStatus) -> Option<FeedbackCue> {
        let cue = match current {
            _ if current == self.previous => None,
            AlignmentStatus::Aligned => Some(FeedbackCue::PlayPositiveCue),
            AlignmentStatus::Misaligned => Some(FeedbackCue::PlayNegativeCue),
            AlignmentStatus::NotDetected => None,
        };
        self.previous = current;
        cue
    }

    pub fn previous(&self) -> AlignmentStatus {
        self.previous
    }

    /// Forget history (new session)
    pub fn reset(&mut self) {
        self.previous = AlignmentStatus::NotDetected;
    }
}
