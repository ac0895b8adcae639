//! Debug overlay - live geometry and frame timing for tuning thresholds

use wasm_bindgen::prelude::*;
use std::cell::RefCell;
use super::session::with_session;

/// Host-reported timing, smoothed for display
#[derive(Default)]
struct Timing {
    frame_time_ms: f32,
}

thread_local! {
    static TIMING: RefCell<Timing> = RefCell::new(Timing::default());
}

/// Set per-frame processing time (called from JS each frame)
#[wasm_bindgen]
pub fn set_frame_time(ms: f32) {
    // Ignore invalid times (tab backgrounded or first frame)
    if !(0.0..=200.0).contains(&ms) {
        return;
    }

    TIMING.with(|t| {
        let mut timing = t.borrow_mut();
        // Exponential moving average for smooth display
        timing.frame_time_ms = timing.frame_time_ms * 0.9 + ms * 0.1;
    });
}

/// Get formatted overlay text (called from JS to update HTML)
#[wasm_bindgen]
pub fn get_debug_overlay_text() -> String {
    let frame_time_ms = TIMING.with(|t| t.borrow().frame_time_ms);

    with_session(|s| {
        let thresholds = s.sensitivity.thresholds();
        let status = s.last_report.map(|r| r.assessment.status).unwrap_or_default();
        let measurements = s.last_report.and_then(|r| r.assessment.measurements);

        let arm = match measurements {
            Some(m) => format!(
                "Arm: {:.1}°/{:.0}° {} | Lateral: {:.3}/{:.2}{}",
                m.angle_deviation,
                thresholds.arm_angle,
                if m.used_elbow { "3pt" } else { "2pt" },
                m.lateral_offset,
                thresholds.lateral,
                if m.points_upward { " ⬆" } else { "" },
            ),
            None => "Arm: --".to_string(),
        };
        let head = match measurements.and_then(|m| m.head_tilt) {
            Some(tilt) => format!("Head: {:.1}°/{:.0}°", tilt, thresholds.head_tilt),
            None => "Head: --".to_string(),
        };

        format!(
            "Tier: {} | Frame: {:.1}ms\n\
             Status: {}\n\
             {}\n\
             {}\n\
             Frames: {} ({} rejected) | Cues: +{} -{}",
            s.sensitivity.name(),
            frame_time_ms,
            status.as_str(),
            arm,
            head,
            s.counters.processed,
            s.counters.rejected,
            s.counters.positive_cues,
            s.counters.negative_cues,
        )
    })
}
