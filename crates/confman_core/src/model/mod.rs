//! Conference domain model.
//!
//! # Responsibility
//! - Define the record shapes persisted by the core.
//! - Centralize required-field validation at construction time.
//!
//! # Invariants
//! - The person hierarchy is closed: only the four variants of [`Person`]
//!   implement [`HasName`], and the trait cannot be implemented downstream.
//! - Unique identifiers are assigned once at construction and never change.

pub mod attendee;
pub mod conference;
pub mod person;
pub mod session;
pub mod speaker;
pub mod staff;
pub mod validation;
pub mod vendor;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub use validation::ValidationError;

mod sealed {
    pub trait Sealed {}
}

/// One of the six kinds of record the core persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Conference,
    Attendee,
    Speaker,
    Staff,
    VendorSponsor,
    Session,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Conference,
        EntityKind::Attendee,
        EntityKind::Speaker,
        EntityKind::Staff,
        EntityKind::VendorSponsor,
        EntityKind::Session,
    ];

    /// Stable lowercase label used in logs and CLI arguments.
    pub fn label(self) -> &'static str {
        match self {
            Self::Conference => "conference",
            Self::Attendee => "attendees",
            Self::Speaker => "speakers",
            Self::Staff => "staff",
            Self::VendorSponsor => "vendors",
            Self::Session => "sessions",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "conference" | "conferences" => Ok(Self::Conference),
            "attendee" | "attendees" => Ok(Self::Attendee),
            "speaker" | "speakers" => Ok(Self::Speaker),
            "staff" => Ok(Self::Staff),
            "vendor" | "vendors" | "sponsor" | "sponsors" => Ok(Self::VendorSponsor),
            "session" | "sessions" => Ok(Self::Session),
            other => Err(format!(
                "unknown entity kind `{other}`; expected conference|attendees|speakers|staff|vendors|sessions"
            )),
        }
    }
}

/// A persistable record with a table projection.
///
/// Sealed: implemented only by the record types in this module.
pub trait Record: Serialize + DeserializeOwned + Clone + sealed::Sealed {
    const KIND: EntityKind;
    /// Column headers shown when the record kind is rendered as a table.
    const COLUMNS: &'static [&'static str];

    /// Re-checks required fields; setters do not validate.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Row cells, one per entry of [`Record::COLUMNS`].
    fn cells(&self) -> Vec<String>;
}

/// Record kinds stored as a JSON array, one document per kind.
pub trait CollectionRecord: Record {}

pub use attendee::{Attendee, PaymentType};
pub use conference::{Conference, Year};
pub use person::{HasName, Person, PersonName, UniqueId};
pub use session::Session;
pub use speaker::Speaker;
pub use staff::Staff;
pub use vendor::VendorSponsor;
