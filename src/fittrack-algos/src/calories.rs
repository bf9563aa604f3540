use fittrack_types::Workout;

use crate::{
    distance::M_IN_KM,
    error::{positive, MetricsError},
    speed::mean_speed_kmh,
};

const MIN_IN_H: f64 = 60.0;

/// Running: (18 x speed - 20) x weight / 1000 x minutes
const RUN_SPEED_FACTOR: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;

/// Walking: (0.035 x weight + floor(speed^2 / height) x 0.029 x weight) x minutes
const WALK_WEIGHT_FACTOR: f64 = 0.035;
const WALK_SPEED_FACTOR: f64 = 0.029;

/// Swimming: (speed + 1.1) x 2 x weight
const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_FACTOR: f64 = 2.0;

/// Energy burned over the workout, in kcal, with a kind-specific formula.
pub fn calories_kcal(workout: &Workout) -> Result<f64, MetricsError> {
    let speed = mean_speed_kmh(workout)?;

    match *workout {
        Workout::Running {
            duration_h,
            weight_kg,
            ..
        } => Ok(
            (RUN_SPEED_FACTOR * speed - RUN_SPEED_SHIFT) * weight_kg / M_IN_KM
                * (duration_h * MIN_IN_H),
        ),
        Workout::Walking {
            duration_h,
            weight_kg,
            height_cm,
            ..
        } => {
            if !positive(height_cm) {
                return Err(MetricsError::InvalidHeight(height_cm));
            }

            // The speed^2/height term is calibrated on the floored quotient.
            let speed_term = (speed.powi(2) / height_cm).floor();
            Ok(
                (WALK_WEIGHT_FACTOR * weight_kg + speed_term * WALK_SPEED_FACTOR * weight_kg)
                    * (duration_h * MIN_IN_H),
            )
        }
        Workout::Swimming { weight_kg, .. } => {
            Ok((speed + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_FACTOR * weight_kg)
        }
    }
}
