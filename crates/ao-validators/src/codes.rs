//! Closed vocabularies: party codes, chambers, postal codes and Senate ranks.

use std::fmt;

use crate::{FieldError, RawValue, Rule};

/// Party codes accepted from either upstream feed.
pub const PARTY_CODES: [&str; 6] = ["D", "I", "R", "Democrat", "Republican", "Independent"];

/// USPS codes for the 50 states, the District of Columbia and the five
/// inhabited territories that send delegates to the House.
pub const STATE_CODES: [&str; 56] = [
    "AK", "AL", "AR", "AZ", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "IA", "ID", "IL", "IN",
    "KS", "KY", "LA", "MA", "MD", "ME", "MI", "MN", "MO", "MS", "MT", "NC", "ND", "NE", "NH",
    "NJ", "NM", "NV", "NY", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VA",
    "VT", "WA", "WI", "WV", "WY", "DC", "AS", "GU", "MP", "PR", "VI",
];

/// Which house of Congress a member sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Chamber {
    House,
    Senate,
}

impl Chamber {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::House => "House",
            Self::Senate => "Senate",
        }
    }
}

impl fmt::Display for Chamber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A senator's seniority within their state delegation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Junior,
    Senior,
}

impl Rank {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Junior => "junior",
            Self::Senior => "senior",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A closed vocabulary matches strings exactly as given. Bytes, numbers and
/// nulls are never members.
fn as_given(value: &RawValue) -> Option<&str> {
    match value {
        RawValue::Str(s) => Some(s),
        _ => None,
    }
}

/// Accept the value only if it is one of `allowed`, compared as given with no
/// decoding or normalization.
///
/// # Errors
///
/// Returns [`FieldError::Invalid`] when the value is not in `allowed`.
pub fn whitelist(rule: &Rule, value: &RawValue, allowed: &[&str]) -> Result<String, FieldError> {
    as_given(value)
        .filter(|value| allowed.contains(value))
        .map(str::to_string)
        .ok_or_else(|| rule.invalid("not an allowed value"))
}

/// Validate a party code. The code is stored as given (`D` stays `D`).
///
/// # Errors
///
/// Returns [`FieldError::Invalid`] for anything outside [`PARTY_CODES`].
pub fn party_code(rule: &Rule, value: &RawValue) -> Result<String, FieldError> {
    whitelist(rule, value, &PARTY_CODES)
}

/// Map a chamber short code (`rep`, `sen`, `none`) or canonical name to a
/// [`Chamber`]. `none` and empty values mean "no chamber".
///
/// # Errors
///
/// Returns [`FieldError::Invalid`] for any other value.
pub fn chamber(rule: &Rule, value: &RawValue) -> Result<Option<Chamber>, FieldError> {
    if value.is_empty() {
        return Ok(None);
    }
    match as_given(value) {
        Some("rep" | "House") => Ok(Some(Chamber::House)),
        Some("sen" | "Senate") => Ok(Some(Chamber::Senate)),
        Some("none") => Ok(None),
        _ => Err(rule.invalid("not an allowed value")),
    }
}

/// Validate a USPS state or territory code. Empty values mean "no state".
///
/// # Errors
///
/// Returns [`FieldError::Invalid`] for anything outside [`STATE_CODES`].
pub fn state(rule: &Rule, value: &RawValue) -> Result<Option<String>, FieldError> {
    if value.is_empty() {
        return Ok(None);
    }
    whitelist(rule, value, &STATE_CODES).map(Some)
}

/// Validate a senator's state rank. Empty values mean "unknown".
///
/// # Errors
///
/// Returns [`FieldError::Invalid`] for anything but `junior` or `senior`.
pub fn senate_rank(rule: &Rule, value: &RawValue) -> Result<Option<Rank>, FieldError> {
    if value.is_empty() {
        return Ok(None);
    }
    match as_given(value) {
        Some("junior") => Ok(Some(Rank::Junior)),
        Some("senior") => Ok(Some(Rank::Senior)),
        _ => Err(rule.invalid("not an allowed value")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules;

    #[test]
    fn whitelist_accepts_members() {
        let allowed = ["spam", "eggs", "bacon"];
        assert_eq!(whitelist(&rules::TEXT, &"spam".into(), &allowed).unwrap(), "spam");
    }

    #[test]
    fn whitelist_rejects_others() {
        let rule = Rule::new("Spam", "{}");
        let err = whitelist(&rule, &"baked beans".into(), &["spam", "eggs", "bacon"]).unwrap_err();
        assert_eq!(err, FieldError::Invalid("not an allowed value".into()));
    }

    #[test]
    fn whitelist_compares_values_as_given() {
        let rule = Rule::new("Spam", "{}");
        let cases = [
            (RawValue::from(b"spam"), "bytes"),
            (RawValue::from(1), "integer"),
            (RawValue::from(true), "bool"),
            (RawValue::Null, "null"),
            (RawValue::from("cafe\u{0301}"), "decomposed form of a member"),
        ];

        for (value, desc) in cases {
            let err = whitelist(&rule, &value, &["spam", "1", "True", "café"]).unwrap_err();
            assert_eq!(err, FieldError::Invalid("not an allowed value".into()), "case '{desc}'");
        }
    }

    #[test]
    fn party_code_rejects_bytes() {
        assert!(party_code(&rules::PARTY, &RawValue::from(b"D")).is_err());
    }

    #[test]
    fn party_codes_pass_unchanged() {
        for code in PARTY_CODES {
            assert_eq!(party_code(&rules::PARTY, &code.into()).unwrap(), code);
        }
    }

    #[test]
    fn party_code_rejects_others() {
        for code in ["d", "Democratic", "Green", "", "1"] {
            assert!(party_code(&rules::PARTY, &code.into()).is_err(), "case '{code}'");
        }
    }

    #[test]
    fn chamber_short_codes() {
        let cases = [
            ("sen", Some(Chamber::Senate)),
            ("rep", Some(Chamber::House)),
            ("none", None),
            ("Senate", Some(Chamber::Senate)),
            ("House", Some(Chamber::House)),
            ("", None),
        ];
        for (value, expected) in cases {
            let actual = chamber(&rules::CHAMBER, &value.into()).unwrap();
            assert_eq!(actual, expected, "case '{value}'");
        }
    }

    #[test]
    fn chamber_rejects_others() {
        for value in ["senate", "Congress", "spam"] {
            assert!(chamber(&rules::CHAMBER, &value.into()).is_err(), "case '{value}'");
        }
    }

    #[test]
    fn state_codes() {
        assert_eq!(state(&rules::STATE, &"IL".into()).unwrap().as_deref(), Some("IL"));
        assert_eq!(state(&rules::STATE, &"PR".into()).unwrap().as_deref(), Some("PR"));
        assert_eq!(state(&rules::STATE, &RawValue::Null).unwrap(), None);
        assert!(state(&rules::STATE, &"il".into()).is_err());
        assert!(state(&rules::STATE, &"XX".into()).is_err());
    }

    #[test]
    fn state_table_has_no_duplicates() {
        let mut codes = STATE_CODES.to_vec();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), STATE_CODES.len());
    }

    #[test]
    fn senate_ranks() {
        assert_eq!(senate_rank(&rules::SENATE_RANK, &"junior".into()).unwrap(), Some(Rank::Junior));
        assert_eq!(senate_rank(&rules::SENATE_RANK, &"senior".into()).unwrap(), Some(Rank::Senior));
        assert_eq!(senate_rank(&rules::SENATE_RANK, &RawValue::Null).unwrap(), None);
        assert!(senate_rank(&rules::SENATE_RANK, &1.into()).is_err());
    }
}
