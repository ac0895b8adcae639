//! Segment angles in normalized image space
//!
//! y grows downward, so "straight down" is +90° from the x axis.

/// Wrist must sit at least this far below the upper point (normalized units)
pub const MIN_VERTICAL_DROP: f32 = 0.02;

/// Vertical reference line the arm should hang on
pub const CENTER_LINE_X: f32 = 0.5;

/// Angle between upper→lower and straight down, in degrees [0, 180]
pub fn deviation_from_vertical(upper: (f32, f32), lower: (f32, f32)) -> f32 {
    let dx = lower.0 - upper.0;
    let dy = lower.1 - upper.1;
    wrap_degrees(dy.atan2(dx).to_degrees() - 90.0)
}

/// Angle between the a-b line and horizontal, in degrees [0, 90]
///
/// Independent of point order: swapping the eyes gives the same tilt.
pub fn tilt_from_horizontal(a: (f32, f32), b: (f32, f32)) -> f32 {
    let angle = (b.1 - a.1).atan2(b.0 - a.0).to_degrees().abs();
    if angle > 90.0 {
        180.0 - angle
    } else {
        angle
    }
}

/// Fold any angle into its absolute distance from 0, [0, 180]
fn wrap_degrees(angle: f32) -> f32 {
    let a = angle.rem_euclid(360.0);
    if a > 180.0 {
        360.0 - a
    } else {
        a
    }
}
