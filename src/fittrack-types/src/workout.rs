use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Workout kind reported by the sensor feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkoutKind {
    Running,
    Walking,
    Swimming,
}

impl WorkoutKind {
    /// Metres per step on land.
    const STEP_M: f64 = 0.65;
    /// Metres per stroke in the pool.
    const STROKE_M: f64 = 1.38;

    /// Wire codes the feed is allowed to send.
    pub const CODES: [&'static str; 3] = ["RUN", "WLK", "SWM"];

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "RUN" => Some(Self::Running),
            "WLK" => Some(Self::Walking),
            "SWM" => Some(Self::Swimming),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::Walking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Metres covered by one action of this kind.
    pub fn stride_m(self) -> f64 {
        match self {
            Self::Running | Self::Walking => Self::STEP_M,
            Self::Swimming => Self::STROKE_M,
        }
    }
}

impl Display for WorkoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Running => "Running",
            Self::Walking => "Walking",
            Self::Swimming => "Swimming",
        };
        f.write_str(label)
    }
}

/// One workout record with the raw inputs delivered by the sensors.
///
/// `action` is the raw step or stroke count; the remaining fields are the
/// athlete's profile and, per kind, the extra geometry the calorie formula
/// needs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Workout {
    Running {
        action: u32,
        duration_h: f64,
        weight_kg: f64,
    },
    Walking {
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        height_cm: f64,
    },
    Swimming {
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u32,
    },
}

impl Workout {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Self::Running { .. } => WorkoutKind::Running,
            Self::Walking { .. } => WorkoutKind::Walking,
            Self::Swimming { .. } => WorkoutKind::Swimming,
        }
    }

    pub fn action(&self) -> u32 {
        match *self {
            Self::Running { action, .. }
            | Self::Walking { action, .. }
            | Self::Swimming { action, .. } => action,
        }
    }

    pub fn duration_h(&self) -> f64 {
        match *self {
            Self::Running { duration_h, .. }
            | Self::Walking { duration_h, .. }
            | Self::Swimming { duration_h, .. } => duration_h,
        }
    }

    pub fn weight_kg(&self) -> f64 {
        match *self {
            Self::Running { weight_kg, .. }
            | Self::Walking { weight_kg, .. }
            | Self::Swimming { weight_kg, .. } => weight_kg,
        }
    }
}
