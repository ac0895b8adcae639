//! A single detector landmark in normalized image space

/// 2-D landmark estimate (top-left origin, portrait, pre-mirrored by the host)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,  // 0-1 normalized, left to right
    pub y: f32,  // 0-1 normalized, top to bottom
    pub confidence: f32,  // 0-1
}

impl Point {
    pub fn new(x: f32, y: f32, confidence: f32) -> Self {
        Self { x, y, confidence }
    }

    /// Both coordinates are finite and inside [0, 1]
    pub fn is_in_frame(&self) -> bool {
        in_unit_range(self.x) && in_unit_range(self.y)
    }

    /// In frame and confident enough for a role with the given cutoff
    pub fn is_usable(&self, cutoff: f32) -> bool {
        self.is_in_frame() && self.confidence >= cutoff
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

fn in_unit_range(v: f32) -> bool {
    v.is_finite() && (0.0..=1.0).contains(&v)
}
