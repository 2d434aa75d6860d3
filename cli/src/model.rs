//! Validate-on-write record fields.
//!
//! Each record field is declared once as a [`Field`] constant that binds the
//! field name to a validator and its message [`Rule`]. Constructors and
//! setters go through [`Field::validate`] or [`Field::assign`], so a record
//! never holds a value that did not pass its validator.
//!
//! ```
//! use ao_validators::{rules, RawValue};
//! use articleone::model::Field;
//!
//! const PHONE: Field<String> = Field::new("phone", rules::PHONE, ao_validators::phone_number);
//!
//! let mut phone = PHONE.validate(&RawValue::from("3095555555")).unwrap();
//! assert_eq!(phone, "309-555-5555");
//!
//! assert!(PHONE.assign(&mut phone, &RawValue::from("spam")).is_err());
//! assert_eq!(phone, "309-555-5555");
//! ```

use ao_validators::{FieldError, RawValue, Rule};

/// Signature shared by every field validator.
pub type Validator<T> = fn(&Rule, &RawValue) -> Result<T, FieldError>;

/// Errors raised while building a record from source data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// A value was present but rejected by its field's validator.
    #[error("{field}: {source}")]
    Field {
        field: &'static str,
        #[source]
        source: FieldError,
    },

    /// A value the record requires was absent from the source.
    #[error("missing field: {0}")]
    Missing(String),

    /// The source record does not have the expected shape.
    #[error("malformed record: {0}")]
    Malformed(String),
}

impl RecordError {
    /// True when a value could not be coerced to its field's primitive type.
    #[must_use]
    pub const fn is_coercion(&self) -> bool {
        matches!(self, Self::Field { source, .. } if source.is_coercion())
    }

    /// Name of the rejected field, if the error came from a validator.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::Field { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// A named record field bound to its validator.
#[derive(Debug)]
pub struct Field<T> {
    name: &'static str,
    rule: Rule,
    validator: Validator<T>,
}

impl<T> Field<T> {
    #[must_use]
    pub const fn new(name: &'static str, rule: Rule, validator: Validator<T>) -> Self {
        Self {
            name,
            rule,
            validator,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Run the validator and return the normalized value.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Field`] naming this field when the validator
    /// rejects the value.
    pub fn validate(&self, value: &RawValue) -> Result<T, RecordError> {
        (self.validator)(&self.rule, value).map_err(|source| RecordError::Field {
            field: self.name,
            source,
        })
    }

    /// Validate `value` and store it in `slot`. On failure `slot` keeps its
    /// previous value.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Field`] when the validator rejects the value.
    pub fn assign(&self, slot: &mut T, value: &RawValue) -> Result<(), RecordError> {
        *slot = self.validate(value)?;
        Ok(())
    }
}
