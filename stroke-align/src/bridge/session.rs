//! Session state - the one piece of cross-frame memory
//!
//! WASM is single-threaded and there is exactly one active session, so a
//! thread-local RefCell serializes classification and sequencer updates.

use std::cell::RefCell;
use crate::alignment::{assess, Assessment, Sensitivity};
use crate::feedback::{FeedbackCue, FeedbackSequencer};
use crate::landmarks::{interpret, ConfidenceCutoffs, Point, Pose};

/// Result of one processed frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub pose: Pose,
    pub assessment: Assessment,
    pub cue: Option<FeedbackCue>,
}

/// Running totals since the last reset
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameCounters {
    pub processed: u32,
    pub rejected: u32,
    pub positive_cues: u32,
    pub negative_cues: u32,
}

#[derive(Default)]
pub(crate) struct Session {
    pub sensitivity: Sensitivity,
    pub cutoffs: ConfidenceCutoffs,
    pub sequencer: FeedbackSequencer,
    pub last_report: Option<FrameReport>,
    /// Cue from the latest frame, until the host takes it
    pub pending_cue: Option<FeedbackCue>,
    pub counters: FrameCounters,
}

impl Session {
    /// Interpret, classify and sequence one frame
    pub fn advance(&mut self, points: &[Point]) -> FrameReport {
        let pose = interpret(points, &self.cutoffs);
        let assessment = assess(&pose, self.sensitivity);
        let cue = self.sequencer.observe(assessment.status);

        self.counters.processed = self.counters.processed.saturating_add(1);
        match cue {
            Some(FeedbackCue::PlayPositiveCue) => {
                self.counters.positive_cues = self.counters.positive_cues.saturating_add(1)
            }
            Some(FeedbackCue::PlayNegativeCue) => {
                self.counters.negative_cues = self.counters.negative_cues.saturating_add(1)
            }
            None => {}
        }

        let report = FrameReport { pose, assessment, cue };
        self.pending_cue = cue;
        self.last_report = Some(report);
        report
    }

    pub fn reject(&mut self) {
        self.counters.rejected = self.counters.rejected.saturating_add(1);
    }

    /// Back to a fresh session; the selected tier survives
    pub fn reset(&mut self) {
        self.sequencer.reset();
        self.last_report = None;
        self.pending_cue = None;
        self.counters = FrameCounters::default();
    }
}

thread_local! {
    static SESSION: RefCell<Session> = RefCell::new(Session::default());
}

pub(crate) fn with_session<R>(f: impl FnOnce(&mut Session) -> R) -> R {
    SESSION.with(|cell| f(&mut cell.borrow_mut()))
}
