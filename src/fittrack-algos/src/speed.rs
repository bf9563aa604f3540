use fittrack_types::Workout;

use crate::{
    distance::{distance_km, M_IN_KM},
    error::{positive, MetricsError},
};

/// Mean speed over the full workout, in km/h.
///
/// Running and walking derive it from stride distance; swimming from pool
/// geometry (length x laps), independent of the stroke count.
pub fn mean_speed_kmh(workout: &Workout) -> Result<f64, MetricsError> {
    let duration_h = positive_duration(workout)?;

    let speed = match *workout {
        Workout::Running { .. } | Workout::Walking { .. } => distance_km(workout) / duration_h,
        Workout::Swimming {
            pool_length_m,
            pool_laps,
            ..
        } => pool_length_m * f64::from(pool_laps) / M_IN_KM / duration_h,
    };

    Ok(speed)
}

pub(crate) fn positive_duration(workout: &Workout) -> Result<f64, MetricsError> {
    let duration_h = workout.duration_h();
    if !positive(duration_h) {
        return Err(MetricsError::InvalidDuration(duration_h));
    }

    Ok(duration_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(action: u32, duration_h: f64) -> Workout {
        Workout::Running {
            action,
            duration_h,
            weight_kg: 75.0,
        }
    }

    #[test]
    fn running_speed_is_distance_over_duration() {
        let speed = mean_speed_kmh(&running(15000, 1.0)).unwrap();
        assert!((speed - 9.75).abs() < 1e-9);
    }

    #[test]
    fn walking_speed_is_distance_over_duration() {
        let workout = Workout::Walking {
            action: 9000,
            duration_h: 1.0,
            weight_kg: 75.0,
            height_cm: 180.0,
        };
        let speed = mean_speed_kmh(&workout).unwrap();
        assert!((speed - 5.85).abs() < 1e-9);
    }

    #[test]
    fn swimming_speed_from_pool_geometry() {
        let workout = Workout::Swimming {
            action: 720,
            duration_h: 1.0,
            weight_kg: 80.0,
            pool_length_m: 25.0,
            pool_laps: 40,
        };
        let speed = mean_speed_kmh(&workout).unwrap();
        assert!((speed - 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_laps_give_zero_speed() {
        let workout = Workout::Swimming {
            action: 720,
            duration_h: 1.0,
            weight_kg: 80.0,
            pool_length_m: 25.0,
            pool_laps: 0,
        };
        assert_eq!(mean_speed_kmh(&workout).unwrap(), 0.0);
    }

    #[test]
    fn halving_duration_doubles_speed() {
        let full = mean_speed_kmh(&running(15000, 1.0)).unwrap();
        let half = mean_speed_kmh(&running(15000, 0.5)).unwrap();
        assert!((half - 2.0 * full).abs() < 1e-9);
    }

    #[test]
    fn zero_duration_errors() {
        assert_eq!(
            mean_speed_kmh(&running(15000, 0.0)),
            Err(MetricsError::InvalidDuration(0.0))
        );
    }

    #[test]
    fn negative_duration_errors() {
        assert_eq!(
            mean_speed_kmh(&running(15000, -1.0)),
            Err(MetricsError::InvalidDuration(-1.0))
        );
    }

    #[test]
    fn non_finite_duration_errors() {
        assert!(mean_speed_kmh(&running(15000, f64::NAN)).is_err());
    }
}
