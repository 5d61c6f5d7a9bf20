//! Common Validation Utilities
//!
//! Pure helpers shared by the validators and the calculator. No allocation,
//! no side effects; invalid inputs return errors, never panic.

use crate::{
    errors::{PsychroError, PsychroResult},
    traits::Validatable,
};

/// Fail with `InvalidValue` unless the value is a finite number
pub fn ensure_finite(value: f64) -> PsychroResult<()> {
    if value.is_valid() {
        Ok(())
    } else {
        Err(PsychroError::InvalidValue)
    }
}

/// `min < value <= max`
pub fn in_half_open_range(value: f64, min_exclusive: f64, max_inclusive: f64) -> bool {
    value > min_exclusive && value <= max_inclusive
}
