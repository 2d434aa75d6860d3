//! HTTP(S) URL canonicalization.
//!
//! The URL is split into scheme, network location, path, params, query and
//! fragment, the location and path are percent-encoded, and the parts are
//! reassembled without delimiters for empty params/query/fragment. Leading
//! spaces and control characters are dropped first, as are tabs and line
//! breaks anywhere in the URL. The text is otherwise taken as given: a
//! decomposed character stays decomposed and is encoded as such.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::text::{decode, Charset};
use crate::{FieldError, RawValue, Rule};

/// Characters never escaped: ASCII letters, digits and `_.-~`.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~');

const NETLOC: &AsciiSet = &UNRESERVED.remove(b'@').remove(b':').remove(b'%');

const PATH: &AsciiSet = &UNRESERVED.remove(b'/').remove(b'%');

#[derive(Debug, Default, PartialEq, Eq)]
struct Parts<'a> {
    scheme: String,
    netloc: &'a str,
    path: &'a str,
    params: &'a str,
    query: &'a str,
    fragment: &'a str,
}

/// Validate and canonicalize an HTTP or HTTPS URL.
///
/// # Errors
///
/// Returns [`FieldError::Invalid`] when the scheme is not `http` or `https`,
/// or a text decoding error when the value is not text.
pub fn http_url(rule: &Rule, value: &RawValue) -> Result<String, FieldError> {
    let value = strip_unsafe(&decode(rule, value, Charset::default())?);
    let parts = split(&value);
    if parts.scheme != "http" && parts.scheme != "https" {
        return Err(rule.invalid("URL scheme not http or https"));
    }

    let netloc = utf8_percent_encode(parts.netloc, NETLOC).to_string();
    let path = utf8_percent_encode(parts.path, PATH).to_string();
    Ok(join(&parts, &netloc, &path))
}

/// Drop leading C0 controls and spaces, and every tab, CR and LF.
fn strip_unsafe(url: &str) -> String {
    url.trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect()
}

fn split(url: &str) -> Parts<'_> {
    let mut parts = Parts::default();
    let mut rest = url;

    if let Some(colon) = url.find(':') {
        let candidate = &url[..colon];
        let valid = candidate
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic())
            && candidate
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if valid {
            parts.scheme = candidate.to_ascii_lowercase();
            rest = &url[colon + 1..];
        }
    }

    if let Some(after) = rest.strip_prefix("//") {
        let end = after.find(['/', '?', '#']).unwrap_or(after.len());
        parts.netloc = &after[..end];
        rest = &after[end..];
    }

    if let Some((before, fragment)) = rest.split_once('#') {
        parts.fragment = fragment;
        rest = before;
    }
    if let Some((before, query)) = rest.split_once('?') {
        parts.query = query;
        rest = before;
    }

    // Params only ever belong to the last path segment.
    let last_segment = rest.rfind('/').unwrap_or(0);
    if let Some(semi) = rest[last_segment..].find(';') {
        let semi = last_segment + semi;
        parts.params = &rest[semi + 1..];
        rest = &rest[..semi];
    }

    parts.path = rest;
    parts
}

fn join(parts: &Parts<'_>, netloc: &str, path: &str) -> String {
    let mut url = String::with_capacity(parts.scheme.len() + netloc.len() + path.len() + 8);
    url.push_str(&parts.scheme);
    url.push_str("://");
    url.push_str(netloc);
    if !path.is_empty() && !path.starts_with('/') {
        url.push('/');
    }
    url.push_str(path);
    for (delimiter, part) in [(';', parts.params), ('?', parts.query), ('#', parts.fragment)] {
        if !part.is_empty() {
            url.push(delimiter);
            url.push_str(part);
        }
    }
    url
}
