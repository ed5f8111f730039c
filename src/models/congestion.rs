use serde::{Deserialize, Serialize};
use crate::constants::{HIGH_DELAY_FACTOR, MEDIUM_DELAY_FACTOR};

/// Discrete congestion category of a road segment
///
/// Known levels are ordered `Low < Medium < High`; `Unknown` sorts before them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CongestionLevel {
    Unknown,
    Low,
    Medium,
    High,
}

impl CongestionLevel {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Unknown];

    /// Classify a segment by the ratio of its live travel time to its reference time
    ///
    /// A non-positive (or NaN) reference time has no meaningful delay factor and
    /// yields `Unknown`. Each higher tier includes its lower bound: a factor of
    /// exactly 1.2 is `Medium`, exactly 1.8 is `High`.
    #[must_use]
    pub fn classify(live_time: f64, base_time: f64) -> Self {
        if base_time.is_nan() || base_time <= 0.0 {
            return Self::Unknown;
        }

        let delay_factor = live_time / base_time;
        if delay_factor.is_nan() {
            Self::Unknown
        } else if delay_factor < MEDIUM_DELAY_FACTOR {
            Self::Low
        } else if delay_factor < HIGH_DELAY_FACTOR {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Stroke colour used for traffic overlays
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Unknown => "grey",
            Self::Low => "#28a745",
            Self::Medium => "#ffc107",
            Self::High => "#dc3545",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unknown => "No data",
            Self::Low => "Free flowing",
            Self::Medium => "Moderate delays",
            Self::High => "Heavy congestion",
        }
    }
}
