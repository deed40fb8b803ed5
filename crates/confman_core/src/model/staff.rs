//! Staff record.

use super::person::{HasName, PersonName, UniqueId};
use super::sealed::Sealed;
use super::validation::{normalize, RequiredFields, ValidationError};
use super::{CollectionRecord, EntityKind, Record};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Conference staff member.
///
/// Documents written before staff carried an ID load with a fresh one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    #[serde(flatten)]
    name: PersonName,
    hat_size: String,
    #[serde(default = "Uuid::new_v4")]
    unique_id: UniqueId,
}

impl Staff {
    /// Creates a staff member with a freshly generated unique ID.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        hat_size: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let staff = Self {
            name: PersonName::new(first_name, last_name),
            hat_size: normalize(hat_size),
            unique_id: Uuid::new_v4(),
        };
        staff.validate()?;
        Ok(staff)
    }

    pub fn hat_size(&self) -> &str {
        &self.hat_size
    }

    pub fn unique_id(&self) -> UniqueId {
        self.unique_id
    }
}

impl Sealed for Staff {}

impl HasName for Staff {
    fn person_name(&self) -> &PersonName {
        &self.name
    }

    fn person_name_mut(&mut self) -> &mut PersonName {
        &mut self.name
    }
}

impl Record for Staff {
    const KIND: EntityKind = EntityKind::Staff;
    const COLUMNS: &'static [&'static str] = &["First Name", "Last Name", "Hat Size", "Unique ID"];

    fn validate(&self) -> Result<(), ValidationError> {
        self.name
            .required(RequiredFields::new())
            .text("hatSize", &self.hat_size)
            .finish()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.first_name().to_string(),
            self.last_name().to_string(),
            self.hat_size.clone(),
            self.unique_id.to_string(),
        ]
    }
}

impl CollectionRecord for Staff {}
