//! Declarative range checks used by the per-field validation pass.

use super::error::ValidationError;

pub(crate) fn at_most(field: &str, value: u32, max: u32) -> Result<(), ValidationError> {
    if value > max {
        return Err(ValidationError::new(
            field,
            format!("must be at most {} (got {})", max, value),
        ));
    }
    Ok(())
}

pub(crate) fn ratio(field: &str, value: f64, max: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 || value > max {
        return Err(ValidationError::new(
            field,
            format!("must be between 0 and {} (got {})", max, value),
        ));
    }
    Ok(())
}

pub(crate) fn percentage(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(ValidationError::new(
            field,
            format!("must be a percentage between 0 and 100 (got {})", value),
        ));
    }
    Ok(())
}

pub(crate) fn non_empty(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    Ok(())
}
