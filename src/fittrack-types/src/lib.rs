mod workout;
pub use workout::{Workout, WorkoutKind};
