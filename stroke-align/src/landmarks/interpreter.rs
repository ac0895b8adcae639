//! Landmark interpreter - positional role assignment
//!
//! The detector sends 0-7 points with no role labels. Roles are recovered
//! from count and vertical order:
//! - point 1 is always the shoulder
//! - 2 points: shoulder, wrist
//! - 3+ points: if point 2 sits strictly above point 3 it is the elbow and
//!   point 3 the wrist, otherwise point 2 is the wrist
//! - everything after the wrist is head data: eye, eye, optional nose
//!
//! With exactly 3 points this cannot tell "elbow present" from "one eye
//! present" apart except by that vertical guess. The order above is kept
//! for compatibility with the host's point layout; do not reorder it.

use super::point::Point;
use super::pose::{EyePair, Pose};

/// Largest frame the detector sends (shoulder, elbow, wrist, 2 eyes, nose, spare)
pub const MAX_POINTS: usize = 7;

/// Minimum confidence per role; below it the role is absent
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfidenceCutoffs {
    pub shoulder: f32,
    pub elbow: f32,
    pub wrist: f32,
    pub eye: f32,
    pub nose: f32,
}

impl Default for ConfidenceCutoffs {
    fn default() -> Self {
        Self {
            shoulder: 0.5,
            elbow: 0.5,
            wrist: 0.5,
            eye: 0.4,
            nose: 0.4,
        }
    }
}

/// Resolve an unlabeled point list into a pose
///
/// Pure and infallible: short or garbage input yields a pose without a wrist.
pub fn interpret(points: &[Point], cutoffs: &ConfidenceCutoffs) -> Pose {
    let (Some(&shoulder), Some(&second)) = (points.first(), points.get(1)) else {
        return Pose::empty();
    };

    let (elbow, wrist, head_start) = match points.get(2) {
        Some(&third) if second.y < third.y => (Some(second), third, 3),
        _ => (None, second, 2),
    };

    let head = points.get(head_start..).unwrap_or(&[]);
    let eyes = match head {
        [left, right, ..] if left.is_usable(cutoffs.eye) && right.is_usable(cutoffs.eye) => {
            Some(EyePair { left: *left, right: *right })
        }
        _ => None,
    };

    Pose {
        shoulder: accept(shoulder, cutoffs.shoulder),
        elbow: elbow.and_then(|p| accept(p, cutoffs.elbow)),
        wrist: accept(wrist, cutoffs.wrist),
        eyes,
        nose: head.get(2).and_then(|&p| accept(p, cutoffs.nose)),
    }
}

fn accept(point: Point, cutoff: f32) -> Option<Point> {
    Some(point).filter(|p| p.is_usable(cutoff))
}
