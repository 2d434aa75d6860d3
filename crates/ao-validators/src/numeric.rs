//! Integer-valued fields: House districts and Senate classes.

use crate::{FieldError, RawValue, Rule};

/// Lowest House district number (at-large seats use 0).
pub const DISTRICT_MIN: u8 = 0;

/// Highest House district number (California's 53rd).
pub const DISTRICT_MAX: u8 = 53;

/// Valid Senate classes.
pub const SENATE_CLASSES: [u8; 3] = [1, 2, 3];

/// Coerce to an integer. A whole number too large for `i64` is a number all
/// the same, so it fails with `out_of_range` rather than a coercion error.
fn coerce(rule: &Rule, value: &RawValue, out_of_range: &str) -> Result<i64, FieldError> {
    value.coerce_int().ok_or_else(|| {
        if value.overflows_int() {
            rule.invalid(out_of_range)
        } else {
            rule.coercion("cannot be converted to an integer")
        }
    })
}

/// Validate a House district number.
///
/// # Errors
///
/// Returns [`FieldError::Coercion`] when the value is not an integer and
/// [`FieldError::Invalid`] when it lies outside `DISTRICT_MIN..=DISTRICT_MAX`.
pub fn district(rule: &Rule, value: &RawValue) -> Result<u8, FieldError> {
    let number = coerce(rule, value, "out of range")?;
    u8::try_from(number)
        .ok()
        .filter(|n| (DISTRICT_MIN..=DISTRICT_MAX).contains(n))
        .ok_or_else(|| rule.invalid("out of range"))
}

/// Validate a Senate class. Empty values mean "unknown".
///
/// # Errors
///
/// Returns [`FieldError::Coercion`] when the value is not an integer and
/// [`FieldError::Invalid`] when it is not one of [`SENATE_CLASSES`].
pub fn senate_class(rule: &Rule, value: &RawValue) -> Result<Option<u8>, FieldError> {
    if value.is_empty() {
        return Ok(None);
    }
    let number = coerce(rule, value, "not an allowed value")?;
    u8::try_from(number)
        .ok()
        .filter(|n| SENATE_CLASSES.contains(n))
        .map(Some)
        .ok_or_else(|| rule.invalid("not an allowed value"))
}
