//! Field validators for `articleone` roster records.
//!
//! Every validator is an ordinary function with the shape
//! `fn(&Rule, &RawValue, ...) -> Result<T, FieldError>`. It returns the
//! normalized value or fails; it never hands back something it did not check.
//! The [`Rule`] carries the human-readable message template the validator
//! fills in with a short reason when it rejects a value.
//!
//! ```
//! use ao_validators::{phone_number, rules, RawValue};
//!
//! let phone = phone_number(&rules::PHONE, &RawValue::from("(309)555-5555")).unwrap();
//! assert_eq!(phone, "309-555-5555");
//! ```

mod codes;
mod numeric;
mod phone;
mod raw;
mod text;
mod url;

pub use codes::{chamber, party_code, senate_rank, state, whitelist, Chamber, Rank};
pub use codes::{PARTY_CODES, STATE_CODES};
pub use numeric::{district, senate_class, DISTRICT_MAX, DISTRICT_MIN, SENATE_CLASSES};
pub use phone::phone_number;
pub use raw::RawValue;
pub use text::{text, text_with, Charset, NormalForm};
pub use url::http_url;

/// Error returned when a raw value is rejected by a validator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The value has the right shape but is not allowed (bad code, bad format, out of range).
    #[error("{0}")]
    Invalid(String),

    /// The value cannot be converted to the primitive type the field needs.
    #[error("{0}")]
    Coercion(String),
}

impl FieldError {
    /// True when the value could not be converted at all.
    #[must_use]
    pub const fn is_coercion(&self) -> bool {
        matches!(self, Self::Coercion(_))
    }

    /// The formatted failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Invalid(msg) | Self::Coercion(msg) => msg,
        }
    }
}

/// Context handed to every validator: a rule name and its message template.
///
/// The template holds a single `{}` placeholder that receives the reason a
/// value was rejected, e.g. `"Invalid HTTP URL ({})."`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    name: &'static str,
    message: &'static str,
}

impl Rule {
    #[must_use]
    pub const fn new(name: &'static str, message: &'static str) -> Self {
        Self { name, message }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.message
    }

    /// Fill the message template with `reason`.
    #[must_use]
    pub fn format(&self, reason: &str) -> String {
        self.message.replacen("{}", reason, 1)
    }

    #[must_use]
    pub fn invalid(&self, reason: &str) -> FieldError {
        FieldError::Invalid(self.format(reason))
    }

    #[must_use]
    pub fn coercion(&self, reason: &str) -> FieldError {
        FieldError::Coercion(self.format(reason))
    }
}

/// Message templates for each kind of roster field.
pub mod rules {
    use super::Rule;

    pub const TEXT: Rule = Rule::new("Text", "Invalid text ({}).");
    pub const PARTY: Rule = Rule::new("PartyCode", "Invalid party code ({}).");
    pub const CHAMBER: Rule = Rule::new("ChamberName", "Invalid chamber ({}).");
    pub const STATE: Rule = Rule::new("StatePostalCode", "Invalid state ({}).");
    pub const HTTP_URL: Rule = Rule::new("HttpUrl", "Invalid HTTP URL ({}).");
    pub const PHONE: Rule = Rule::new("Phone", "Invalid Phone Number ({}).");
    pub const DISTRICT: Rule = Rule::new("District", "Invalid district ({}).");
    pub const SENATE_CLASS: Rule = Rule::new("SenateClass", "Invalid Senate class ({}).");
    pub const SENATE_RANK: Rule = Rule::new("SenateRank", "Invalid state rank ({}).");
}
