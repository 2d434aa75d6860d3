//! Roster records: [`Member`] and its two refinements, [`Representative`]
//! and [`Senator`].
//!
//! Fields are private and only ever written through their [`Field`]
//! descriptor. Constructors assign fields in declaration order and stop at
//! the first rejected value.

use ao_validators::{rules, Chamber, RawValue, Rank};

use crate::model::{Field, RecordError};

const LAST_NAME: Field<String> = Field::new("last_name", rules::TEXT, ao_validators::text);
const FIRST_NAME: Field<String> = Field::new("first_name", rules::TEXT, ao_validators::text);
const PARTY: Field<String> = Field::new("party", rules::PARTY, ao_validators::party_code);
const CHAMBER: Field<Option<Chamber>> =
    Field::new("chamber", rules::CHAMBER, ao_validators::chamber);
const STATE: Field<Option<String>> = Field::new("state", rules::STATE, ao_validators::state);

const DISTRICT: Field<u8> = Field::new("district", rules::DISTRICT, ao_validators::district);
const REP_URL: Field<String> = Field::new("url", rules::HTTP_URL, ao_validators::http_url);
const REP_PHONE: Field<String> = Field::new("phone", rules::PHONE, ao_validators::phone_number);

const RANK: Field<Option<Rank>> =
    Field::new("rank", rules::SENATE_RANK, ao_validators::senate_rank);
const SENATE_CLASS: Field<Option<u8>> =
    Field::new("senate_class", rules::SENATE_CLASS, ao_validators::senate_class);
const SEN_URL: Field<Option<String>> = Field::new("url", rules::HTTP_URL, optional_url);
const SEN_PHONE: Field<Option<String>> = Field::new("phone", rules::PHONE, optional_phone);

fn optional_url(
    rule: &ao_validators::Rule,
    value: &RawValue,
) -> Result<Option<String>, ao_validators::FieldError> {
    if value.is_empty() {
        return Ok(None);
    }
    ao_validators::http_url(rule, value).map(Some)
}

fn optional_phone(
    rule: &ao_validators::Rule,
    value: &RawValue,
) -> Result<Option<String>, ao_validators::FieldError> {
    if value.is_empty() {
        return Ok(None);
    }
    ao_validators::phone_number(rule, value).map(Some)
}

/// Anything that carries the shared [`Member`] field set.
pub trait Legislator {
    fn member(&self) -> &Member;

    /// `"Last, First"`, as used in reports.
    fn display_name(&self) -> String {
        let member = self.member();
        format!("{}, {}", member.last_name(), member.first_name())
    }
}

/// A member of Congress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    last_name: String,
    first_name: String,
    party: String,
    chamber: Option<Chamber>,
    state: Option<String>,
}

impl Member {
    /// Build a member from raw values. Pass `""` or [`RawValue::Null`] for an
    /// unknown chamber or state.
    ///
    /// # Errors
    ///
    /// Returns the [`RecordError`] of the first field, in argument order, that
    /// fails validation.
    pub fn new(
        last_name: impl Into<RawValue>,
        first_name: impl Into<RawValue>,
        party: impl Into<RawValue>,
        chamber: impl Into<RawValue>,
        state: impl Into<RawValue>,
    ) -> Result<Self, RecordError> {
        Ok(Self {
            last_name: LAST_NAME.validate(&last_name.into())?,
            first_name: FIRST_NAME.validate(&first_name.into())?,
            party: PARTY.validate(&party.into())?,
            chamber: CHAMBER.validate(&chamber.into())?,
            state: STATE.validate(&state.into())?,
        })
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn party(&self) -> &str {
        &self.party
    }

    #[must_use]
    pub const fn chamber(&self) -> Option<Chamber> {
        self.chamber
    }

    #[must_use]
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    /// # Errors
    ///
    /// Returns [`RecordError::Field`] and keeps the old value when rejected.
    pub fn set_last_name(&mut self, value: impl Into<RawValue>) -> Result<(), RecordError> {
        LAST_NAME.assign(&mut self.last_name, &value.into())
    }

    /// # Errors
    ///
    /// Returns [`RecordError::Field`] and keeps the old value when rejected.
    pub fn set_first_name(&mut self, value: impl Into<RawValue>) -> Result<(), RecordError> {
        FIRST_NAME.assign(&mut self.first_name, &value.into())
    }

    /// # Errors
    ///
    /// Returns [`RecordError::Field`] and keeps the old value when rejected.
    pub fn set_party(&mut self, value: impl Into<RawValue>) -> Result<(), RecordError> {
        PARTY.assign(&mut self.party, &value.into())
    }

    /// # Errors
    ///
    /// Returns [`RecordError::Field`] and keeps the old value when rejected.
    pub fn set_chamber(&mut self, value: impl Into<RawValue>) -> Result<(), RecordError> {
        CHAMBER.assign(&mut self.chamber, &value.into())
    }

    /// # Errors
    ///
    /// Returns [`RecordError::Field`] and keeps the old value when rejected.
    pub fn set_state(&mut self, value: impl Into<RawValue>) -> Result<(), RecordError> {
        STATE.assign(&mut self.state, &value.into())
    }
}

impl Legislator for Member {
    fn member(&self) -> &Member {
        self
    }
}

/// A member of the House of Representatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Representative {
    member: Member,
    district: u8,
    url: String,
    phone: String,
}

impl Representative {
    /// Extend a validated member with House-specific fields.
    ///
    /// # Errors
    ///
    /// Returns the [`RecordError`] of the first rejected field, in the order
    /// district, url, phone.
    pub fn new(
        member: Member,
        district: impl Into<RawValue>,
        url: impl Into<RawValue>,
        phone: impl Into<RawValue>,
    ) -> Result<Self, RecordError> {
        Ok(Self {
            member,
            district: DISTRICT.validate(&district.into())?,
            url: REP_URL.validate(&url.into())?,
            phone: REP_PHONE.validate(&phone.into())?,
        })
    }

    #[must_use]
    pub const fn district(&self) -> u8 {
        self.district
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Mutable access to the shared member fields (their setters validate).
    pub fn member_mut(&mut self) -> &mut Member {
        &mut self.member
    }

    /// # Errors
    ///
    /// Returns [`RecordError::Field`] and keeps the old value when rejected.
    pub fn set_district(&mut self, value: impl Into<RawValue>) -> Result<(), RecordError> {
        DISTRICT.assign(&mut self.district, &value.into())
    }

    /// # Errors
    ///
    /// Returns [`RecordError::Field`] and keeps the old value when rejected.
    pub fn set_url(&mut self, value: impl Into<RawValue>) -> Result<(), RecordError> {
        REP_URL.assign(&mut self.url, &value.into())
    }

    /// # Errors
    ///
    /// Returns [`RecordError::Field`] and keeps the old value when rejected.
    pub fn set_phone(&mut self, value: impl Into<RawValue>) -> Result<(), RecordError> {
        REP_PHONE.assign(&mut self.phone, &value.into())
    }
}

impl Legislator for Representative {
    fn member(&self) -> &Member {
        &self.member
    }
}

/// A member of the Senate. Every Senate-specific field may be unknown; the
/// senate.gov feed, for one, only carries names and party.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Senator {
    member: Member,
    rank: Option<Rank>,
    senate_class: Option<u8>,
    url: Option<String>,
    phone: Option<String>,
}

impl Senator {
    /// A senator known only by name and party.
    ///
    /// # Errors
    ///
    /// Returns the [`RecordError`] of the first rejected field.
    pub fn new(
        last_name: impl Into<RawValue>,
        first_name: impl Into<RawValue>,
        party: impl Into<RawValue>,
    ) -> Result<Self, RecordError> {
        let member = Member::new(last_name, first_name, party, RawValue::Null, RawValue::Null)?;
        Ok(Self::from_member(member))
    }

    /// Extend a validated member with Senate-specific fields. Empty values
    /// leave the field unknown.
    ///
    /// # Errors
    ///
    /// Returns the [`RecordError`] of the first rejected field, in the order
    /// rank, class, url, phone.
    pub fn with_details(
        member: Member,
        rank: impl Into<RawValue>,
        senate_class: impl Into<RawValue>,
        url: impl Into<RawValue>,
        phone: impl Into<RawValue>,
    ) -> Result<Self, RecordError> {
        Ok(Self {
            member,
            rank: RANK.validate(&rank.into())?,
            senate_class: SENATE_CLASS.validate(&senate_class.into())?,
            url: SEN_URL.validate(&url.into())?,
            phone: SEN_PHONE.validate(&phone.into())?,
        })
    }

    #[must_use]
    pub const fn from_member(member: Member) -> Self {
        Self {
            member,
            rank: None,
            senate_class: None,
            url: None,
            phone: None,
        }
    }

    #[must_use]
    pub const fn rank(&self) -> Option<Rank> {
        self.rank
    }

    #[must_use]
    pub const fn senate_class(&self) -> Option<u8> {
        self.senate_class
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Mutable access to the shared member fields (their setters validate).
    pub fn member_mut(&mut self) -> &mut Member {
        &mut self.member
    }

    /// # Errors
    ///
    /// Returns [`RecordError::Field`] and keeps the old value when rejected.
    pub fn set_rank(&mut self, value: impl Into<RawValue>) -> Result<(), RecordError> {
        RANK.assign(&mut self.rank, &value.into())
    }

    /// # Errors
    ///
    /// Returns [`RecordError::Field`] and keeps the old value when rejected.
    pub fn set_senate_class(&mut self, value: impl Into<RawValue>) -> Result<(), RecordError> {
        SENATE_CLASS.assign(&mut self.senate_class, &value.into())
    }

    /// # Errors
    ///
    /// Returns [`RecordError::Field`] and keeps the old value when rejected.
    pub fn set_url(&mut self, value: impl Into<RawValue>) -> Result<(), RecordError> {
        SEN_URL.assign(&mut self.url, &value.into())
    }

    /// # Errors
    ///
    /// Returns [`RecordError::Field`] and keeps the old value when rejected.
    pub fn set_phone(&mut self, value: impl Into<RawValue>) -> Result<(), RecordError> {
        SEN_PHONE.assign(&mut self.phone, &value.into())
    }
}

impl Legislator for Senator {
    fn member(&self) -> &Member {
        &self.member
    }
}

/// Any roster record.
///
/// Two records are equal only when they are the same kind and every field
/// matches; [`Record::try_eq`] reports a kind mismatch as "incomparable".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Member(Member),
    Representative(Representative),
    Senator(Senator),
}

impl Record {
    /// Compare two records, or `None` when they are different kinds.
    #[must_use]
    pub fn try_eq(&self, other: &Self) -> Option<bool> {
        match (self, other) {
            (Self::Member(a), Self::Member(b)) => Some(a == b),
            (Self::Representative(a), Self::Representative(b)) => Some(a == b),
            (Self::Senator(a), Self::Senator(b)) => Some(a == b),
            _ => None,
        }
    }
}

impl Legislator for Record {
    fn member(&self) -> &Member {
        match self {
            Self::Member(member) => member,
            Self::Representative(rep) => rep.member(),
            Self::Senator(senator) => senator.member(),
        }
    }
}

impl From<Member> for Record {
    fn from(value: Member) -> Self {
        Self::Member(value)
    }
}

impl From<Representative> for Record {
    fn from(value: Representative) -> Self {
        Self::Representative(value)
    }
}

impl From<Senator> for Record {
    fn from(value: Senator) -> Self {
        Self::Senator(value)
    }
}
