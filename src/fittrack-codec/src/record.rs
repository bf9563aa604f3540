use fittrack_types::{Workout, WorkoutKind};
use serde::{Deserialize, Serialize};

use crate::{error::DecodeError, helpers::count_field};

/// One (code, values) pair as delivered by the sensor feed.
///
/// Serializes as the wire tuple form, e.g. `["RUN", [15000, 1, 75]]`, so a
/// feed file is a plain JSON array of records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensorRecord(String, Vec<f64>);

impl SensorRecord {
    pub fn new(code: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self(code.into(), values.into())
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    pub fn values(&self) -> &[f64] {
        &self.1
    }

    /// Map the record onto the matching [`Workout`] variant.
    ///
    /// Rejects codes outside the dispatch table and records whose value
    /// array does not have exactly the shape the kind requires.
    pub fn decode(&self) -> Result<Workout, DecodeError> {
        let kind = WorkoutKind::from_code(self.code())
            .ok_or_else(|| DecodeError::UnknownWorkoutType(self.code().to_owned()))?;

        match (kind, self.values()) {
            (WorkoutKind::Running, &[action, duration_h, weight_kg]) => Ok(Workout::Running {
                action: count_field("action", action)?,
                duration_h,
                weight_kg,
            }),
            (WorkoutKind::Walking, &[action, duration_h, weight_kg, height_cm]) => {
                Ok(Workout::Walking {
                    action: count_field("action", action)?,
                    duration_h,
                    weight_kg,
                    height_cm,
                })
            }
            (WorkoutKind::Swimming, &[action, duration_h, weight_kg, pool_length_m, pool_laps]) => {
                Ok(Workout::Swimming {
                    action: count_field("action", action)?,
                    duration_h,
                    weight_kg,
                    pool_length_m,
                    pool_laps: count_field("pool_laps", pool_laps)?,
                })
            }
            _ => Err(DecodeError::ValueCount {
                kind,
                expected: Self::arity(kind),
                got: self.values().len(),
            }),
        }
    }

    /// Number of positional values each kind expects.
    fn arity(kind: WorkoutKind) -> usize {
        match kind {
            WorkoutKind::Running => 3,
            WorkoutKind::Walking => 4,
            WorkoutKind::Swimming => 5,
        }
    }
}
