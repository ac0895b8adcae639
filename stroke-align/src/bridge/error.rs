//! Errors for malformed host input
//!
//! The classification core never fails; only the raw buffer handed over
//! by JavaScript can be rejected before it reaches the core.

use std::fmt;
use wasm_bindgen::prelude::*;
use crate::landmarks::MAX_POINTS;

/// Reasons a host call is refused
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameError {
    /// Flat buffer length is not a multiple of 3 (x, y, confidence)
    MisalignedBuffer(usize),
    /// More points than the detector layout allows
    TooManyPoints(usize),
    /// Tier name that is not beginner / intermediate / advanced
    UnknownSensitivity(String),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::MisalignedBuffer(len) => {
                write!(f, "Invalid landmark data length: {} (expected a multiple of 3)", len)
            }
            FrameError::TooManyPoints(count) => {
                write!(f, "Too many landmarks: {} (expected at most {})", count, MAX_POINTS)
            }
            FrameError::UnknownSensitivity(name) => {
                write!(f, "Unknown sensitivity '{}' (expected beginner, intermediate or advanced)", name)
            }
        }
    }
}

impl std::error::Error for FrameError {}

impl From<FrameError> for JsValue {
    fn from(err: FrameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
