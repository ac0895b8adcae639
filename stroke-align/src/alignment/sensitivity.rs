//! Sensitivity tiers - one immutable threshold table per skill level

/// Numeric thresholds for one tier
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    /// Max arm deviation from vertical (degrees)
    pub arm_angle: f32,
    /// Max eye-line deviation from horizontal (degrees)
    pub head_tilt: f32,
    /// Max centroid distance from the center line (fraction of frame width)
    pub lateral: f32,
    /// Wrist share of the two-point lateral centroid (0-1)
    pub wrist_weight: f32,
}

const BEGINNER: Thresholds = Thresholds {
    arm_angle: 12.0,
    head_tilt: 15.0,
    lateral: 0.12,
    wrist_weight: 0.6,
};

const INTERMEDIATE: Thresholds = Thresholds {
    arm_angle: 8.0,
    head_tilt: 10.0,
    lateral: 0.08,
    wrist_weight: 0.7,
};

const ADVANCED: Thresholds = Thresholds {
    arm_angle: 5.0,
    head_tilt: 6.0,
    lateral: 0.05,
    wrist_weight: 0.8,
};

/// Skill tier selected by the host
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Sensitivity {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl Sensitivity {
    pub const ALL: [Sensitivity; 3] = [
        Sensitivity::Beginner,
        Sensitivity::Intermediate,
        Sensitivity::Advanced,
    ];

    pub fn thresholds(&self) -> &'static Thresholds {
        match self {
            Sensitivity::Beginner => &BEGINNER,
            Sensitivity::Intermediate => &INTERMEDIATE,
            Sensitivity::Advanced => &ADVANCED,
        }
    }

    /// Parse a tier name, ignoring case and surrounding whitespace
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "beginner" => Some(Sensitivity::Beginner),
            "intermediate" => Some(Sensitivity::Intermediate),
            "advanced" => Some(Sensitivity::Advanced),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Sensitivity::Beginner => "beginner",
            Sensitivity::Intermediate => "intermediate",
            Sensitivity::Advanced => "advanced",
        }
    }

    /// A straight arm off the center line still counts as aligned
    pub fn forgives_lateral(&self) -> bool {
        matches!(self, Sensitivity::Beginner)
    }

    /// Head tilt is reported but never downgrades the arm verdict
    pub fn head_is_advisory(&self) -> bool {
        matches!(self, Sensitivity::Beginner)
    }
}
