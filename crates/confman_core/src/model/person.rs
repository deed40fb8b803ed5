//! Person base fields and the closed person hierarchy.
//!
//! # Invariants
//! - `PersonName` fields are trimmed on construction; setters store input as-is.
//! - [`Person`] has exactly four variants. Adding a variant is a breaking change
//!   by construction, not by convention.

use super::attendee::Attendee;
use super::sealed::Sealed;
use super::speaker::Speaker;
use super::staff::Staff;
use super::validation::{normalize, RequiredFields, ValidationError};
use super::vendor::VendorSponsor;
use super::EntityKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display identifier assigned once per person record.
///
/// Not used as a lookup key; lists are addressed by position.
pub type UniqueId = Uuid;

/// First and last name shared by every person variant.
///
/// Flattened into each variant's JSON object as `firstName` / `lastName`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    first_name: String,
    last_name: String,
}

impl PersonName {
    pub(crate) fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: normalize(first_name),
            last_name: normalize(last_name),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub(crate) fn required(&self, fields: RequiredFields) -> RequiredFields {
        fields
            .text("firstName", &self.first_name)
            .text("lastName", &self.last_name)
    }
}

/// Capability shared by all person variants.
///
/// Sealed: only [`Attendee`], [`Speaker`], [`Staff`], [`VendorSponsor`] and
/// [`Person`] implement it.
pub trait HasName: Sealed {
    fn person_name(&self) -> &PersonName;

    fn person_name_mut(&mut self) -> &mut PersonName;

    fn first_name(&self) -> &str {
        self.person_name().first_name()
    }

    fn last_name(&self) -> &str {
        self.person_name().last_name()
    }

    /// `"First Last"`, as shown for a session's speaker.
    fn full_name(&self) -> String {
        format!("{} {}", self.first_name(), self.last_name())
    }

    /// Replaces the first name. Does not validate.
    fn set_first_name(&mut self, first_name: impl Into<String>)
    where
        Self: Sized,
    {
        self.person_name_mut().first_name = first_name.into();
    }

    /// Replaces the last name. Does not validate.
    fn set_last_name(&mut self, last_name: impl Into<String>)
    where
        Self: Sized,
    {
        self.person_name_mut().last_name = last_name.into();
    }
}

/// Any person record, as a closed sum over the allowed variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Person {
    Attendee(Attendee),
    Speaker(Speaker),
    Staff(Staff),
    VendorSponsor(VendorSponsor),
}

impl Person {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Attendee(_) => EntityKind::Attendee,
            Self::Speaker(_) => EntityKind::Speaker,
            Self::Staff(_) => EntityKind::Staff,
            Self::VendorSponsor(_) => EntityKind::VendorSponsor,
        }
    }

    pub fn unique_id(&self) -> UniqueId {
        match self {
            Self::Attendee(attendee) => attendee.unique_id(),
            Self::Speaker(speaker) => speaker.unique_id(),
            Self::Staff(staff) => staff.unique_id(),
            Self::VendorSponsor(vendor) => vendor.unique_id(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        use super::Record;

        match self {
            Self::Attendee(attendee) => attendee.validate(),
            Self::Speaker(speaker) => speaker.validate(),
            Self::Staff(staff) => staff.validate(),
            Self::VendorSponsor(vendor) => vendor.validate(),
        }
    }
}

impl Sealed for Person {}

impl HasName for Person {
    fn person_name(&self) -> &PersonName {
        match self {
            Self::Attendee(attendee) => attendee.person_name(),
            Self::Speaker(speaker) => speaker.person_name(),
            Self::Staff(staff) => staff.person_name(),
            Self::VendorSponsor(vendor) => vendor.person_name(),
        }
    }

    fn person_name_mut(&mut self) -> &mut PersonName {
        match self {
            Self::Attendee(attendee) => attendee.person_name_mut(),
            Self::Speaker(speaker) => speaker.person_name_mut(),
            Self::Staff(staff) => staff.person_name_mut(),
            Self::VendorSponsor(vendor) => vendor.person_name_mut(),
        }
    }
}

impl From<Attendee> for Person {
    fn from(value: Attendee) -> Self {
        Self::Attendee(value)
    }
}

impl From<Speaker> for Person {
    fn from(value: Speaker) -> Self {
        Self::Speaker(value)
    }
}

impl From<Staff> for Person {
    fn from(value: Staff) -> Self {
        Self::Staff(value)
    }
}

impl From<VendorSponsor> for Person {
    fn from(value: VendorSponsor) -> Self {
        Self::VendorSponsor(value)
    }
}
