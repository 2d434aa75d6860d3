//! Text decoding and Unicode normalization.

use encoding_rs::Encoding;
use unicode_normalization::UnicodeNormalization;

use crate::{FieldError, RawValue, Rule};

/// Unicode normalization form applied to every text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalForm {
    #[default]
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
}

impl NormalForm {
    #[must_use]
    pub fn apply(self, value: &str) -> String {
        match self {
            Self::Nfc => value.nfc().collect(),
            Self::Nfd => value.nfd().collect(),
            Self::Nfkc => value.nfkc().collect(),
            Self::Nfkd => value.nfkd().collect(),
        }
    }
}

/// Character set used to decode byte values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charset(&'static Encoding);

impl Charset {
    #[must_use]
    pub fn utf_8() -> Self {
        Self(encoding_rs::UTF_8)
    }

    /// Look up a charset by label. Underscores are read as hyphens, so
    /// `utf_8` and `iso_8859_1` resolve like `utf-8` and `iso-8859-1`.
    #[must_use]
    pub fn for_label(label: &str) -> Option<Self> {
        let label = label.trim().replace('_', "-");
        Encoding::for_label(label.as_bytes()).map(Self)
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    fn decode(self, bytes: &[u8]) -> Option<String> {
        self.0
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(std::borrow::Cow::into_owned)
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::utf_8()
    }
}

/// Normalize a text value: UTF-8 decoding for bytes, NFC for everything.
///
/// # Errors
///
/// Returns [`FieldError::Invalid`] for bytes that are not valid UTF-8 and
/// [`FieldError::Coercion`] for a null value.
pub fn text(rule: &Rule, value: &RawValue) -> Result<String, FieldError> {
    text_with(rule, value, Charset::default(), NormalForm::default())
}

/// Normalize a text value with an explicit charset and normal form.
///
/// Bytes are decoded with `charset`; any other value goes through generic
/// text coercion. The result is normalized to `form`.
///
/// # Errors
///
/// Returns [`FieldError::Invalid`] when the bytes cannot be decoded and
/// [`FieldError::Coercion`] for a null value.
pub fn text_with(
    rule: &Rule,
    value: &RawValue,
    charset: Charset,
    form: NormalForm,
) -> Result<String, FieldError> {
    decode(rule, value, charset).map(|decoded| form.apply(&decoded))
}

/// Text form of a value as given: bytes decoded with `charset`, anything else
/// through generic text coercion, no normalization.
pub(crate) fn decode(
    rule: &Rule,
    value: &RawValue,
    charset: Charset,
) -> Result<String, FieldError> {
    match value {
        RawValue::Bytes(bytes) => charset
            .decode(bytes)
            .ok_or_else(|| rule.invalid("unable to decode character")),
        other => other
            .coerce_text()
            .ok_or_else(|| rule.coercion("no value to convert to text")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules;
    use proptest::prelude::*;

    #[test]
    fn passes_plain_text() {
        assert_eq!(text(&rules::TEXT, &"spam".into()).unwrap(), "spam");
    }

    #[test]
    fn coerces_numbers() {
        assert_eq!(text(&rules::TEXT, &100.into()).unwrap(), "100");
    }

    #[test]
    fn decodes_given_charset() {
        let latin1 = Charset::for_label("iso_8859_1").unwrap();
        let value = RawValue::from(b"r\xe9sum\xe9");
        let actual = text_with(&rules::TEXT, &value, latin1, NormalForm::Nfc).unwrap();
        assert_eq!(actual, "résumé");
    }

    #[test]
    fn rejects_invalid_utf8() {
        let rule = Rule::new("Spam", "Bad ({}).");
        let err = text(&rule, &RawValue::from(b"r\xc3sum\xc3")).unwrap_err();
        assert_eq!(err, FieldError::Invalid("Bad (unable to decode character).".into()));
    }

    #[test]
    fn composes_decomposed_characters() {
        let actual = text(&rules::TEXT, &"\u{0061}\u{0301}".into()).unwrap();
        assert_eq!(actual, "á");
        assert_eq!(actual, text(&rules::TEXT, &"á".into()).unwrap());
    }

    #[test]
    fn other_normal_forms() {
        let utf_8 = Charset::default();
        let nfd = text_with(&rules::TEXT, &"á".into(), utf_8, NormalForm::Nfd).unwrap();
        assert_eq!(nfd, "\u{0061}\u{0301}");
        let nfkc = text_with(&rules::TEXT, &"ﬁ".into(), utf_8, NormalForm::Nfkc).unwrap();
        assert_eq!(nfkc, "fi");
    }

    #[test]
    fn decode_keeps_the_value_as_given() {
        let utf_8 = Charset::default();
        let decomposed = decode(&rules::TEXT, &"e\u{0301}".into(), utf_8).unwrap();
        assert_eq!(decomposed, "e\u{0301}");
        let bytes = RawValue::from(b"e\xcc\x81");
        assert_eq!(decode(&rules::TEXT, &bytes, utf_8).unwrap(), "e\u{0301}");
        assert!(decode(&rules::TEXT, &RawValue::Null, utf_8).unwrap_err().is_coercion());
    }

    #[test]
    fn null_is_a_coercion_error() {
        assert!(text(&rules::TEXT, &RawValue::Null).unwrap_err().is_coercion());
    }

    #[test]
    fn charset_labels() {
        assert_eq!(Charset::for_label("utf_8"), Some(Charset::utf_8()));
        assert!(Charset::for_label("not-a-charset").is_none());
    }

    proptest! {
        #[test]
        fn normalization_is_idempotent(s in "\\PC*") {
            let once = text(&rules::TEXT, &RawValue::from(s.as_str())).unwrap();
            let twice = text(&rules::TEXT, &RawValue::from(once.as_str())).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
