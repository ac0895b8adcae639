//! Pose - role-labeled landmarks for one frame
//!
//! Built fresh from every detector frame and never mutated afterwards.

use super::point::Point;

/// Number of role slots exposed to the renderer
pub const ROLE_COUNT: usize = 6;

/// Both eyes, or nothing. A lone eye carries no tilt information.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EyePair {
    pub left: Point,
    pub right: Point,
}

/// Landmarks resolved to anatomical roles
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    /// Anchor for arm angle and lateral weighting
    pub shoulder: Option<Point>,
    /// Optional middle joint; the classifier falls back to shoulder-wrist without it
    pub elbow: Option<Point>,
    /// Required for any classification
    pub wrist: Option<Point>,
    pub eyes: Option<EyePair>,
    /// Informational only
    pub nose: Option<Point>,
}

impl Pose {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_wrist(&self) -> bool {
        self.wrist.is_some()
    }

    /// Role slots in render order: shoulder, elbow, wrist, left eye, right eye, nose
    pub fn role_slots(&self) -> [Option<Point>; ROLE_COUNT] {
        [
            self.shoulder,
            self.elbow,
            self.wrist,
            self.eyes.map(|e| e.left),
            self.eyes.map(|e| e.right),
            self.nose,
        ]
    }
}
