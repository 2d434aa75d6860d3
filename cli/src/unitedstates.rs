//! Client for the roster published by the `@unitedstates` project.
//!
//! The feed is a JSON array of legislators shaped like
//! `{"name": {"first", "last"}, "terms": [{"party", "type", "state", ...}]}`.
//! Only the last (most recent) term is read.

use ao_validators::{rules, Chamber, RawValue};
use serde_json::{Map, Value};

use crate::error::{ParseError, RosterError};
use crate::http::Fetcher;
use crate::model::RecordError;
use crate::records::{Member, Representative, Senator};

/// Parse the feed body into one JSON object per legislator.
///
/// # Errors
/// Returns an error if the body is not JSON or not an array.
pub fn parse_json(body: &str) -> Result<Vec<Value>, ParseError> {
    match serde_json::from_str::<Value>(body)? {
        Value::Array(details) => Ok(details),
        other => Err(ParseError::Shape(format!(
            "expected an array of legislators, got {}",
            kind(&other)
        ))),
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn name(details: &Value, key: &str) -> Result<RawValue, RecordError> {
    let name = details
        .get("name")
        .ok_or_else(|| RecordError::Missing("name".into()))?;
    name.get(key)
        .map(RawValue::from)
        .ok_or_else(|| RecordError::Missing(format!("name.{key}")))
}

fn last_term(details: &Value) -> Result<&Map<String, Value>, RecordError> {
    let terms = details
        .get("terms")
        .ok_or_else(|| RecordError::Missing("terms".into()))?
        .as_array()
        .ok_or_else(|| RecordError::Malformed("terms is not an array".into()))?;
    terms
        .last()
        .ok_or_else(|| RecordError::Missing("terms[-1]".into()))?
        .as_object()
        .ok_or_else(|| RecordError::Malformed("term is not an object".into()))
}

fn required(term: &Map<String, Value>, key: &str) -> Result<RawValue, RecordError> {
    term.get(key)
        .map(RawValue::from)
        .ok_or_else(|| RecordError::Missing(format!("terms[-1].{key}")))
}

fn optional(term: &Map<String, Value>, key: &str) -> RawValue {
    term.get(key).map_or(RawValue::Null, RawValue::from)
}

/// Chamber of the legislator's most recent term.
fn current_chamber(details: &Value) -> Result<Option<Chamber>, RecordError> {
    let value = optional(last_term(details)?, "type");
    ao_validators::chamber(&rules::CHAMBER, &value).map_err(|source| RecordError::Field {
        field: "chamber",
        source,
    })
}

fn member_with_required_term(
    details: &Value,
    term: &Map<String, Value>,
) -> Result<Member, RecordError> {
    Member::new(
        name(details, "last")?,
        name(details, "first")?,
        required(term, "party")?,
        required(term, "type")?,
        required(term, "state")?,
    )
}

impl Member {
    /// Build a member from one feed entry without knowing its chamber
    /// subtype. `type` and `state` are optional.
    ///
    /// # Errors
    /// Returns an error if a required value is absent or any value is invalid.
    pub fn from_json(details: &Value) -> Result<Self, RecordError> {
        let last_name = name(details, "last")?;
        let first_name = name(details, "first")?;
        let term = last_term(details)?;
        Self::new(
            last_name,
            first_name,
            required(term, "party")?,
            optional(term, "type"),
            optional(term, "state"),
        )
    }
}

impl Representative {
    /// Build a representative from one feed entry. `district`, `url` and
    /// `phone` are required.
    ///
    /// # Errors
    /// Returns an error if a required value is absent or any value is invalid.
    pub fn from_json(details: &Value) -> Result<Self, RecordError> {
        let term = last_term(details)?;
        let member = member_with_required_term(details, term)?;
        Self::new(
            member,
            required(term, "district")?,
            required(term, "url")?,
            required(term, "phone")?,
        )
    }
}

impl Senator {
    /// Build a senator from one feed entry. `state_rank`, `class`, `url` and
    /// `phone` default to empty when absent.
    ///
    /// # Errors
    /// Returns an error if a required value is absent or any value is invalid.
    pub fn from_json(details: &Value) -> Result<Self, RecordError> {
        let term = last_term(details)?;
        let member = member_with_required_term(details, term)?;
        Self::with_details(
            member,
            optional(term, "state_rank"),
            optional(term, "class"),
            optional(term, "url"),
            optional(term, "phone"),
        )
    }
}

/// Fetch and parse the feed.
///
/// # Errors
/// Returns an error if the fetch fails or the body cannot be parsed.
pub async fn members_details<F>(fetcher: &F, url: &str) -> Result<Vec<Value>, RosterError>
where
    F: Fetcher + ?Sized,
{
    let body = fetcher.get(url).await?;
    let details = parse_json(&body)?;
    tracing::debug!(url, entries = details.len(), "parsed roster");
    Ok(details)
}

/// Every current member of Congress.
///
/// # Errors
/// Returns an error if the feed cannot be fetched or parsed, or an entry is invalid.
pub async fn members<F>(fetcher: &F, url: &str) -> Result<Vec<Member>, RosterError>
where
    F: Fetcher + ?Sized,
{
    let details = members_details(fetcher, url).await?;
    all_members(&details)
}

/// Build a member for every entry, regardless of chamber.
///
/// # Errors
/// Returns the first entry that cannot be built.
pub fn all_members(details: &[Value]) -> Result<Vec<Member>, RosterError> {
    let members = details
        .iter()
        .enumerate()
        .map(|(index, detail)| Member::from_json(detail).map_err(|e| RosterError::record(index, e)))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::info!(selected = members.len(), "built records");
    Ok(members)
}

/// Every current member of the House of Representatives.
///
/// # Errors
/// Returns an error if the feed cannot be fetched or parsed, or an entry is invalid.
pub async fn representatives<F>(fetcher: &F, url: &str) -> Result<Vec<Representative>, RosterError>
where
    F: Fetcher + ?Sized,
{
    let details = members_details(fetcher, url).await?;
    select(&details, Chamber::House, Representative::from_json)
}

/// Every current member of the Senate.
///
/// # Errors
/// Returns an error if the feed cannot be fetched or parsed, or an entry is invalid.
pub async fn senators<F>(fetcher: &F, url: &str) -> Result<Vec<Senator>, RosterError>
where
    F: Fetcher + ?Sized,
{
    let details = members_details(fetcher, url).await?;
    select(&details, Chamber::Senate, Senator::from_json)
}

/// Build records for the entries whose current term is in `chamber`.
///
/// # Errors
/// Returns the first entry that cannot be classified or built.
pub fn select<T>(
    details: &[Value],
    chamber: Chamber,
    build: fn(&Value) -> Result<T, RecordError>,
) -> Result<Vec<T>, RosterError> {
    let mut records = Vec::new();
    for (index, detail) in details.iter().enumerate() {
        let current = current_chamber(detail).map_err(|e| RosterError::record(index, e))?;
        if current == Some(chamber) {
            records.push(build(detail).map_err(|e| RosterError::record(index, e))?);
        }
    }
    tracing::info!(%chamber, selected = records.len(), of = details.len(), "built records");
    Ok(records)
}
