use std::fmt::Display;

use fittrack_types::{Workout, WorkoutKind};

use crate::{
    calories::calories_kcal,
    distance::distance_km,
    error::{positive, MetricsError},
    speed::{mean_speed_kmh, positive_duration},
};

/// Computed metrics for one workout record. Built once per record,
/// rendered once, then discarded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorkoutSummary {
    pub kind: WorkoutKind,
    pub duration_h: f64,
    pub distance_km: f64,
    pub avg_speed_kmh: f64,
    pub calories_kcal: f64,
}

/// Validate the record against the positive-input contract, then compute
/// all derived metrics.
pub fn summarize(workout: &Workout) -> Result<WorkoutSummary, MetricsError> {
    validate(workout)?;

    Ok(WorkoutSummary {
        kind: workout.kind(),
        duration_h: workout.duration_h(),
        distance_km: distance_km(workout),
        avg_speed_kmh: mean_speed_kmh(workout)?,
        calories_kcal: calories_kcal(workout)?,
    })
}

fn validate(workout: &Workout) -> Result<(), MetricsError> {
    positive_duration(workout)?;

    let weight_kg = workout.weight_kg();
    if !positive(weight_kg) {
        return Err(MetricsError::InvalidWeight(weight_kg));
    }

    match *workout {
        Workout::Walking { height_cm, .. } if !positive(height_cm) => {
            Err(MetricsError::InvalidHeight(height_cm))
        }
        Workout::Swimming { pool_length_m, .. } if !positive(pool_length_m) => {
            Err(MetricsError::InvalidPoolLength(pool_length_m))
        }
        _ => Ok(()),
    }
}

impl Display for WorkoutSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories: {:.3}.",
            self.kind, self.duration_h, self.distance_km, self.avg_speed_kmh, self.calories_kcal
        )
    }
}
