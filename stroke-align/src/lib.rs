//! Stroke Align - real-time arm and head alignment for cue-stroke practice
//!
//! Per frame: raw detector points → Pose → AlignmentStatus → optional cue.
//!
//! Entry point for WASM module. Only contains:
//! - Console logging macros
//! - Module declarations and re-exports
//! - wasm_bindgen start hook

use wasm_bindgen::prelude::*;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

// Native builds (unit tests) have no JS console; the macros still type-check
// their arguments but print nothing.

#[cfg(target_arch = "wasm32")]
macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&format!($($t)*).into()))
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! console_log {
    ($($t:tt)*) => {{ let _ = format_args!($($t)*); }}
}

#[cfg(target_arch = "wasm32")]
macro_rules! console_warn {
    ($($t:tt)*) => (web_sys::console::warn_1(&format!($($t)*).into()))
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! console_warn {
    ($($t:tt)*) => {{ let _ = format_args!($($t)*); }}
}

mod landmarks;
mod alignment;
mod feedback;
mod bridge;

pub use landmarks::{interpret, ConfidenceCutoffs, EyePair, Point, Pose, MAX_POINTS};
pub use alignment::{
    assess, classify, evaluate, head_tilt, measure,
    AlignmentStatus, Assessment, HeadTiltStatus, Measurements, Sensitivity, Thresholds,
};
pub use feedback::{FeedbackCue, FeedbackSequencer};

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    update_frame, get_alignment_status, get_head_tilt_status, take_feedback_cue,
    get_pose_points, set_sensitivity, get_sensitivity, reset_session,
    set_frame_time, get_debug_overlay_text,
    parse_points, process_frame, last_report, select_sensitivity, current_sensitivity,
    FrameCounters, FrameError, FrameReport,
};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    console_log!("✅ Stroke Align ready ({} sensitivity)", current_sensitivity().name());
}
