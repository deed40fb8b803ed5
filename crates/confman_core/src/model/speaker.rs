//! Speaker record.

use super::person::{HasName, PersonName, UniqueId};
use super::sealed::Sealed;
use super::validation::{normalize, RequiredFields, ValidationError};
use super::{CollectionRecord, EntityKind, Record};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Conference speaker; also embedded in [`super::Session`] as its moderator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    #[serde(flatten)]
    name: PersonName,
    shirt_size: String,
    unique_id: UniqueId,
}

impl Speaker {
    /// Creates a speaker with a freshly generated unique ID.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        shirt_size: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let speaker = Self {
            name: PersonName::new(first_name, last_name),
            shirt_size: normalize(shirt_size),
            unique_id: Uuid::new_v4(),
        };
        speaker.validate()?;
        Ok(speaker)
    }

    pub fn shirt_size(&self) -> &str {
        &self.shirt_size
    }

    pub fn unique_id(&self) -> UniqueId {
        self.unique_id
    }
}

impl Sealed for Speaker {}

impl HasName for Speaker {
    fn person_name(&self) -> &PersonName {
        &self.name
    }

    fn person_name_mut(&mut self) -> &mut PersonName {
        &mut self.name
    }
}

impl Record for Speaker {
    const KIND: EntityKind = EntityKind::Speaker;
    const COLUMNS: &'static [&'static str] =
        &["First Name", "Last Name", "Shirt Size", "Unique ID"];

    fn validate(&self) -> Result<(), ValidationError> {
        self.name
            .required(RequiredFields::new())
            .text("shirtSize", &self.shirt_size)
            .finish()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.first_name().to_string(),
            self.last_name().to_string(),
            self.shirt_size.clone(),
            self.unique_id.to_string(),
        ]
    }
}

impl CollectionRecord for Speaker {}
