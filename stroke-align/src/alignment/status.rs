//! Per-frame verdicts handed to the renderer and the feedback sequencer

/// Arm alignment verdict
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AlignmentStatus {
    Aligned,
    Misaligned,
    #[default]
    NotDetected,
}

impl AlignmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlignmentStatus::Aligned => "aligned",
            AlignmentStatus::Misaligned => "misaligned",
            AlignmentStatus::NotDetected => "not_detected",
        }
    }
}

/// Eye-line verdict, for display
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HeadTiltStatus {
    Level,
    Tilted,
    #[default]
    NotAvailable,
}

impl HeadTiltStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadTiltStatus::Level => "level",
            HeadTiltStatus::Tilted => "tilted",
            HeadTiltStatus::NotAvailable => "not_available",
        }
    }
}
