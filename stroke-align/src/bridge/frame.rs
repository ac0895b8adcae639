//! Per-frame JS entry points
//!
//! JavaScript hands over the detector output as a flat Float32Array of
//! (x, y, confidence) triples in the fixed order shoulder, [elbow], wrist,
//! [eye, eye, [nose]]. Results are read back through the getters below.

use wasm_bindgen::prelude::*;
use crate::landmarks::{Point, MAX_POINTS, ROLE_COUNT};
use super::error::FrameError;
use super::session::{with_session, FrameReport};

/// Floats per point in the host buffer
const STRIDE: usize = 3;

/// Placeholder for an absent role in `get_pose_points`
const ABSENT: f32 = -1.0;

/// Split the host buffer into points without judging their values
pub fn parse_points(data: &[f32]) -> Result<Vec<Point>, FrameError> {
    if data.len() % STRIDE != 0 {
        return Err(FrameError::MisalignedBuffer(data.len()));
    }
    let count = data.len() / STRIDE;
    if count > MAX_POINTS {
        return Err(FrameError::TooManyPoints(count));
    }

    Ok(data
        .chunks_exact(STRIDE)
        .map(|c| Point::new(c[0], c[1], c[2]))
        .collect())
}

/// Run one frame through the pipeline (internal API, no JsValue)
///
/// A rejected buffer leaves the previous status and report untouched.
pub fn process_frame(data: &[f32]) -> Result<FrameReport, FrameError> {
    let points = match parse_points(data) {
        Ok(points) => points,
        Err(err) => {
            with_session(|s| s.reject());
            console_warn!("{}", err);
            return Err(err);
        }
    };
    Ok(with_session(|s| s.advance(&points)))
}

/// Latest processed frame, if any since the last reset
pub fn last_report() -> Option<FrameReport> {
    with_session(|s| s.last_report)
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript once per detector frame
#[wasm_bindgen]
pub fn update_frame(data: &[f32]) -> Result<(), JsValue> {
    process_frame(data)?;
    Ok(())
}

/// "aligned" | "misaligned" | "not_detected"
#[wasm_bindgen]
pub fn get_alignment_status() -> String {
    with_session(|s| {
        s.last_report
            .map(|r| r.assessment.status)
            .unwrap_or_default()
            .as_str()
            .to_string()
    })
}

/// "level" | "tilted" | "not_available"
#[wasm_bindgen]
pub fn get_head_tilt_status() -> String {
    with_session(|s| {
        s.last_report
            .map(|r| r.assessment.head_tilt)
            .unwrap_or_default()
            .as_str()
            .to_string()
    })
}

/// "positive" | "negative", at most once per frame
#[wasm_bindgen]
pub fn take_feedback_cue() -> Option<String> {
    with_session(|s| s.pending_cue.take().map(|cue| cue.as_str().to_string()))
}

/// 6 role slots × (x, y, confidence): shoulder, elbow, wrist, left eye,
/// right eye, nose. Absent roles are (-1, -1, -1).
#[wasm_bindgen]
pub fn get_pose_points() -> Vec<f32> {
    let slots = last_report()
        .map(|r| r.pose.role_slots())
        .unwrap_or([None; ROLE_COUNT]);

    slots
        .iter()
        .flat_map(|slot| match slot {
            Some(p) => [p.x, p.y, p.confidence],
            None => [ABSENT; STRIDE],
        })
        .collect()
}
