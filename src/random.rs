use rand::Rng;

use crate::error::{Result, WallgenError};

pub const DEFAULT_INT_MIN: i64 = 1;
pub const DEFAULT_INT_MAX: i64 = 100;
pub const DEFAULT_FLOAT_MIN: f64 = 0.0;
pub const DEFAULT_FLOAT_MAX: f64 = 1.0;

/// Uniform integer in `min..=max`.
pub fn random_integer(min: i64, max: i64) -> Result<i64> {
    if min > max {
        return Err(WallgenError::InvalidInput(format!(
            "min_value ({}) must not exceed max_value ({})",
            min, max
        )));
    }
    Ok(rand::thread_rng().gen_range(min..=max))
}

/// Uniform float in `min..=max`.
pub fn random_float(min: f64, max: f64) -> Result<f64> {
    if !min.is_finite() || !max.is_finite() {
        return Err(WallgenError::InvalidInput(
            "bounds must be finite numbers".to_string(),
        ));
    }
    if min > max {
        return Err(WallgenError::InvalidInput(format!(
            "min_value ({}) must not exceed max_value ({})",
            min, max
        )));
    }
    if !(max - min).is_finite() {
        return Err(WallgenError::InvalidInput(format!(
            "range {}..={} is too wide",
            min, max
        )));
    }
    Ok(rand::thread_rng().gen_range(min..=max))
}
