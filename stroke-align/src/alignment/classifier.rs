//! Alignment classifier
//!
//! Two stages, both pure:
//! 1. `measure` - raw geometry (arm angle, lateral offset, head tilt)
//! 2. `evaluate` - thresholds plus tier policy
//!
//! Tier leniency lives only in `evaluate`; the geometry never depends on it
//! except for the tier's wrist weight in the two-point centroid.

use crate::landmarks::{Point, Pose};
use super::geometry::{deviation_from_vertical, tilt_from_horizontal, CENTER_LINE_X, MIN_VERTICAL_DROP};
use super::sensitivity::Sensitivity;
use super::status::{AlignmentStatus, HeadTiltStatus};

/// Lateral centroid weights when shoulder, elbow and wrist are all usable
const SHOULDER_WEIGHT: f32 = 0.2;
const ELBOW_WEIGHT: f32 = 0.3;
const WRIST_WEIGHT: f32 = 0.5;

/// Raw geometry of one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurements {
    /// Arm segment deviation from straight down (degrees, 0-180)
    pub angle_deviation: f32,
    /// Weighted arm centroid distance from the center line (fraction of width)
    pub lateral_offset: f32,
    /// Wrist is not clearly below the upper point
    pub points_upward: bool,
    /// Elbow was present and plausible, so the three-point model was used
    pub used_elbow: bool,
    /// Eye-line deviation from horizontal (degrees), when both eyes are present
    pub head_tilt: Option<f32>,
}

/// Everything the host needs from one classification
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Assessment {
    pub status: AlignmentStatus,
    pub head_tilt: HeadTiltStatus,
    pub measurements: Option<Measurements>,
}

/// Measure arm and head geometry
///
/// Returns None when there is nothing to measure: no usable wrist or no
/// usable shoulder anchor.
pub fn measure(pose: &Pose, sensitivity: Sensitivity) -> Option<Measurements> {
    let wrist = pose.wrist.filter(Point::is_in_frame)?;
    let shoulder = pose.shoulder.filter(Point::is_in_frame)?;

    // An elbow out of shoulder-elbow-wrist order is discarded for this frame
    let elbow = pose
        .elbow
        .filter(|e| e.is_in_frame() && shoulder.y < e.y && e.y < wrist.y);

    let upper = elbow.unwrap_or(shoulder);
    let angle_deviation = deviation_from_vertical(upper.position(), wrist.position());

    let centroid_x = match elbow {
        Some(elbow) => {
            shoulder.x * SHOULDER_WEIGHT + elbow.x * ELBOW_WEIGHT + wrist.x * WRIST_WEIGHT
        }
        None => {
            let w = sensitivity.thresholds().wrist_weight;
            wrist.x * w + shoulder.x * (1.0 - w)
        }
    };

    Some(Measurements {
        angle_deviation,
        lateral_offset: (centroid_x - CENTER_LINE_X).abs(),
        points_upward: wrist.y - upper.y <= MIN_VERTICAL_DROP,
        used_elbow: elbow.is_some(),
        head_tilt: eye_line_tilt(pose),
    })
}

/// Apply a tier's thresholds and leniency to measured geometry
pub fn evaluate(m: &Measurements, sensitivity: Sensitivity) -> AlignmentStatus {
    let t = sensitivity.thresholds();

    // Angle dominates: a failed or upward arm is never rescued
    if m.points_upward || m.angle_deviation > t.arm_angle {
        return AlignmentStatus::Misaligned;
    }

    let lateral_ok = m.lateral_offset <= t.lateral;
    if !lateral_ok && !sensitivity.forgives_lateral() {
        return AlignmentStatus::Misaligned;
    }

    if tilt_status(m.head_tilt, sensitivity) == HeadTiltStatus::Tilted
        && !sensitivity.head_is_advisory()
    {
        return AlignmentStatus::Misaligned;
    }

    AlignmentStatus::Aligned
}

/// Classify one pose
pub fn classify(pose: &Pose, sensitivity: Sensitivity) -> AlignmentStatus {
    match measure(pose, sensitivity) {
        Some(m) => evaluate(&m, sensitivity),
        None => AlignmentStatus::NotDetected,
    }
}

/// Head tilt verdict on its own; available even when the arm is not
pub fn head_tilt(pose: &Pose, sensitivity: Sensitivity) -> HeadTiltStatus {
    tilt_status(eye_line_tilt(pose), sensitivity)
}

/// Classify and keep the intermediate geometry for display
pub fn assess(pose: &Pose, sensitivity: Sensitivity) -> Assessment {
    let measurements = measure(pose, sensitivity);
    Assessment {
        status: measurements
            .as_ref()
            .map_or(AlignmentStatus::NotDetected, |m| evaluate(m, sensitivity)),
        head_tilt: head_tilt(pose, sensitivity),
        measurements,
    }
}

fn eye_line_tilt(pose: &Pose) -> Option<f32> {
    let eyes = pose
        .eyes
        .filter(|e| e.left.is_in_frame() && e.right.is_in_frame())?;
    Some(tilt_from_horizontal(eyes.left.position(), eyes.right.position()))
}

fn tilt_status(tilt: Option<f32>, sensitivity: Sensitivity) -> HeadTiltStatus {
    match tilt {
        None => HeadTiltStatus::NotAvailable,
        Some(deg) if deg <= sensitivity.thresholds().head_tilt => HeadTiltStatus::Level,
        Some(_) => HeadTiltStatus::Tilted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::EyePair;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y, 0.9)
    }

    fn arm(shoulder: (f32, f32), elbow: Option<(f32, f32)>, wrist: (f32, f32)) -> Pose {
        Pose {
            shoulder: Some(p(shoulder.0, shoulder.1)),
            elbow: elbow.map(|e| p(e.0, e.1)),
            wrist: Some(p(wrist.0, wrist.1)),
            ..Pose::empty()
        }
    }

    fn with_eyes(pose: Pose, left: (f32, f32), right: (f32, f32)) -> Pose {
        Pose {
            eyes: Some(EyePair { left: p(left.0, left.1), right: p(right.0, right.1) }),
            ..pose
        }
    }

    fn straight_arm() -> Pose {
        arm((0.5, 0.2), Some((0.5, 0.5)), (0.5, 0.8))
    }

    #[test]
    fn test_missing_wrist_is_not_detected() {
        let pose = Pose { wrist: None, ..straight_arm() };
        for tier in Sensitivity::ALL {
            assert_eq!(classify(&pose, tier), AlignmentStatus::NotDetected);
            assert_eq!(classify(&Pose::empty(), tier), AlignmentStatus::NotDetected);
        }
    }

    #[test]
    fn test_missing_shoulder_is_not_detected() {
        let pose = Pose { shoulder: None, ..straight_arm() };
        assert_eq!(classify(&pose, Sensitivity::Beginner), AlignmentStatus::NotDetected);
    }

    #[test]
    fn test_out_of_frame_wrist_is_not_detected() {
        let pose = arm((0.5, 0.2), None, (0.5, 1.2));
        assert_eq!(classify(&pose, Sensitivity::Beginner), AlignmentStatus::NotDetected);
    }

    #[test]
    fn test_vertical_two_point_arm_aligned_at_every_tier() {
        let pose = arm((0.5, 0.2), None, (0.5, 0.8));
        for tier in Sensitivity::ALL {
            assert_eq!(classify(&pose, tier), AlignmentStatus::Aligned);
        }
    }

    #[test]
    fn test_straight_three_point_arm_intermediate() {
        assert_eq!(classify(&straight_arm(), Sensitivity::Intermediate), AlignmentStatus::Aligned);
        let m = measure(&straight_arm(), Sensitivity::Intermediate).unwrap();
        assert!(m.used_elbow);
        assert!(m.angle_deviation.abs() < 1e-4);
        assert!(m.lateral_offset.abs() < 1e-4);
    }

    #[test]
    fn test_swung_wrist_misaligned_at_every_tier() {
        let pose = arm((0.5, 0.2), Some((0.5, 0.5)), (0.65, 0.8));
        for tier in Sensitivity::ALL {
            assert_eq!(classify(&pose, tier), AlignmentStatus::Misaligned);
        }
        // Same wrist measured from the shoulder alone is ~14°
        let two_point = arm((0.5, 0.2), None, (0.65, 0.8));
        let m = measure(&two_point, Sensitivity::Intermediate).unwrap();
        assert!((m.angle_deviation - 14.04).abs() < 0.05);
        assert_eq!(classify(&two_point, Sensitivity::Beginner), AlignmentStatus::Misaligned);
    }

    #[test]
    fn test_level_head_keeps_aligned() {
        let pose = with_eyes(straight_arm(), (0.45, 0.3), (0.55, 0.3));
        for tier in Sensitivity::ALL {
            assert_eq!(classify(&pose, tier), AlignmentStatus::Aligned);
            assert_eq!(head_tilt(&pose, tier), HeadTiltStatus::Level);
        }
    }

    #[test]
    fn test_tilted_head_downgrades_except_beginner() {
        let pose = with_eyes(straight_arm(), (0.45, 0.25), (0.55, 0.35));
        assert_eq!(classify(&pose, Sensitivity::Beginner), AlignmentStatus::Aligned);
        assert_eq!(classify(&pose, Sensitivity::Intermediate), AlignmentStatus::Misaligned);
        assert_eq!(classify(&pose, Sensitivity::Advanced), AlignmentStatus::Misaligned);
        assert_eq!(head_tilt(&pose, Sensitivity::Beginner), HeadTiltStatus::Tilted);
    }

    #[test]
    fn test_head_tilt_without_arm() {
        let pose = with_eyes(Pose::empty(), (0.45, 0.3), (0.55, 0.3));
        let a = assess(&pose, Sensitivity::Advanced);
        assert_eq!(a.status, AlignmentStatus::NotDetected);
        assert_eq!(a.head_tilt, HeadTiltStatus::Level);
        assert!(a.measurements.is_none());
        assert_eq!(head_tilt(&straight_arm(), Sensitivity::Advanced), HeadTiltStatus::NotAvailable);
    }

    #[test]
    fn test_upward_arm_is_misaligned() {
        let pose = arm((0.5, 0.8), None, (0.5, 0.2));
        for tier in Sensitivity::ALL {
            assert_eq!(classify(&pose, tier), AlignmentStatus::Misaligned);
        }
        // Inside the noise floor: still treated as not hanging down
        let flat = arm((0.5, 0.5), None, (0.5, 0.515));
        assert!(measure(&flat, Sensitivity::Beginner).unwrap().points_upward);
        assert_eq!(classify(&flat, Sensitivity::Beginner), AlignmentStatus::Misaligned);
    }

    #[test]
    fn test_implausible_elbow_falls_back_to_two_points() {
        // Elbow above the shoulder: ignored, shoulder-wrist is vertical
        let pose = arm((0.5, 0.3), Some((0.7, 0.1)), (0.5, 0.8));
        let m = measure(&pose, Sensitivity::Advanced).unwrap();
        assert!(!m.used_elbow);
        assert!(m.angle_deviation.abs() < 1e-4);
        assert_eq!(classify(&pose, Sensitivity::Advanced), AlignmentStatus::Aligned);
    }

    #[test]
    fn test_lateral_leniency_only_for_beginner() {
        // Vertical arm hanging off-center: centroid 0.1 from the line
        let pose = arm((0.6, 0.2), None, (0.6, 0.8));
        let m = measure(&pose, Sensitivity::Beginner).unwrap();
        assert!(m.angle_deviation.abs() < 1e-4);
        assert!((m.lateral_offset - 0.1).abs() < 1e-4);
        assert_eq!(classify(&pose, Sensitivity::Intermediate), AlignmentStatus::Misaligned);
        assert_eq!(classify(&pose, Sensitivity::Advanced), AlignmentStatus::Misaligned);

        let far = arm((0.8, 0.2), None, (0.8, 0.8));
        assert_eq!(classify(&far, Sensitivity::Beginner), AlignmentStatus::Aligned);
    }

    #[test]
    fn test_two_point_centroid_uses_tier_wrist_weight() {
        let pose = arm((0.4, 0.2), None, (0.5, 0.8));
        let b = measure(&pose, Sensitivity::Beginner).unwrap();
        let a = measure(&pose, Sensitivity::Advanced).unwrap();
        // 0.4 * 0.4 + 0.5 * 0.6 = 0.46 ; 0.4 * 0.2 + 0.5 * 0.8 = 0.48
        assert!((b.lateral_offset - 0.04).abs() < 1e-4);
        assert!((a.lateral_offset - 0.02).abs() < 1e-4);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let pose = with_eyes(arm((0.5, 0.2), Some((0.52, 0.5)), (0.55, 0.8)), (0.45, 0.3), (0.55, 0.32));
        for tier in Sensitivity::ALL {
            assert_eq!(classify(&pose, tier), classify(&pose, tier));
            assert_eq!(assess(&pose, tier), assess(&pose, tier));
        }
    }

    #[test]
    fn test_angle_sweep_flips_once() {
        for tier in Sensitivity::ALL {
            let mut seen_misaligned = false;
            for step in 0..=40 {
                // Wrist swings out by d while the weighted centroid stays on the line
                let d = step as f32 * 0.01;
                let s = CENTER_LINE_X - tier.thresholds().wrist_weight * d;
                let pose = arm((s, 0.2), None, (s + d, 0.8));
                match classify(&pose, tier) {
                    AlignmentStatus::Misaligned => seen_misaligned = true,
                    AlignmentStatus::Aligned => assert!(!seen_misaligned, "{:?} flipped back at {}", tier, d),
                    AlignmentStatus::NotDetected => panic!("unexpected NotDetected"),
                }
            }
            assert!(seen_misaligned);
        }
    }

    #[test]
    fn test_tiers_are_ordered_by_strictness() {
        let poses = [
            arm((0.5, 0.2), None, (0.58, 0.8)),
            arm((0.5, 0.2), Some((0.5, 0.5)), (0.54, 0.8)),
            arm((0.6, 0.2), None, (0.62, 0.8)),
            with_eyes(straight_arm(), (0.45, 0.3), (0.55, 0.32)),
            with_eyes(straight_arm(), (0.45, 0.28), (0.55, 0.33)),
            arm((0.55, 0.2), Some((0.56, 0.5)), (0.58, 0.85)),
        ];
        let rank = |s: AlignmentStatus| (s == AlignmentStatus::Aligned) as u8;
        for pose in &poses {
            let b = rank(classify(pose, Sensitivity::Beginner));
            let i = rank(classify(pose, Sensitivity::Intermediate));
            let a = rank(classify(pose, Sensitivity::Advanced));
            assert!(b >= i && i >= a, "tier order violated for {:?}", pose);
        }
    }
}
