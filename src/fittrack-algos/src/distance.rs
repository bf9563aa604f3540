use fittrack_types::Workout;

/// Metres in a kilometre.
pub(crate) const M_IN_KM: f64 = 1000.0;

/// Distance covered over the workout, in km.
///
/// Every action advances the athlete by the kind's stride length: 0.65 m
/// per step on land, 1.38 m per stroke in the pool.
pub fn distance_km(workout: &Workout) -> f64 {
    f64::from(workout.action()) * workout.kind().stride_m() / M_IN_KM
}
