use fittrack_types::WorkoutKind;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    #[error("unknown workout type `{0}`, valid types are {valid}", valid = WorkoutKind::CODES.join(", "))]
    UnknownWorkoutType(String),

    #[error("{kind} record carries {got} values, expected {expected}")]
    ValueCount {
        kind: WorkoutKind,
        expected: usize,
        got: usize,
    },

    #[error("{field} must be a whole non-negative count, got {value}")]
    InvalidCount { field: &'static str, value: f64 },
}
