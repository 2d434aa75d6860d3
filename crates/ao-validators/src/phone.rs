//! North American Numbering Plan phone numbers in `NNN-NNN-NNNN` form.

use crate::{text, FieldError, RawValue, Rule};

fn is_digits(value: &str) -> bool {
    value.bytes().all(|b| b.is_ascii_digit())
}

fn is_normalized(value: &str) -> bool {
    let groups: Vec<&str> = value.split('-').collect();
    matches!(groups.as_slice(), [a, b, c] if a.len() == 3 && b.len() == 3 && c.len() == 4
        && is_digits(a) && is_digits(b) && is_digits(c))
}

/// Rewrite a leading `(NNN)` area code to `NNN-`.
fn unwrap_area_code(value: &str) -> String {
    match value.strip_prefix('(').and_then(|rest| rest.get(..4).map(|head| (head, rest))) {
        Some((head, rest)) if head.ends_with(')') && is_digits(&head[..3]) => {
            format!("{}-{}", &head[..3], &rest[4..])
        }
        _ => value.to_string(),
    }
}

/// Hyphenate a bare run of exactly ten digits.
fn hyphenate(value: String) -> String {
    if value.len() == 10 && is_digits(&value) {
        format!("{}-{}-{}", &value[..3], &value[3..6], &value[6..])
    } else {
        value
    }
}

/// Validate and normalize a phone number.
///
/// Values already in `NNN-NNN-NNNN` form pass unchanged. Otherwise a leading
/// `(NNN)` becomes `NNN-` and a bare ten-digit run gets its hyphens back
/// before the value is checked again.
///
/// # Errors
///
/// Returns [`FieldError::Invalid`] when the value still does not match after
/// reformatting, or the error of [`text`] when it is not text.
pub fn phone_number(rule: &Rule, value: &RawValue) -> Result<String, FieldError> {
    let value = text(rule, value)?;
    if is_normalized(&value) {
        return Ok(value);
    }

    let value = hyphenate(unwrap_area_code(&value));
    if is_normalized(&value) {
        Ok(value)
    } else {
        Err(rule.invalid("not a valid phone number"))
    }
}
