use crate::error::DecodeError;

/// The feed carries every value as a float; count fields must still be
/// whole, non-negative and within u32 range.
pub(crate) fn count_field(field: &'static str, value: f64) -> Result<u32, DecodeError> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(DecodeError::InvalidCount { field, value });
    }

    Ok(value as u32)
}
