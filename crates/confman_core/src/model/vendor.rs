//! Vendor / sponsor record.

use super::person::{HasName, PersonName, UniqueId};
use super::sealed::Sealed;
use super::validation::{normalize, RequiredFields, ValidationError};
use super::{CollectionRecord, EntityKind, Record};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Vendor or sponsor contact with an exhibition booth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorSponsor {
    #[serde(flatten)]
    name: PersonName,
    booth_name: String,
    unique_id: UniqueId,
}

impl VendorSponsor {
    /// Creates a vendor/sponsor with a freshly generated unique ID.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        booth_name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let vendor = Self {
            name: PersonName::new(first_name, last_name),
            booth_name: normalize(booth_name),
            unique_id: Uuid::new_v4(),
        };
        vendor.validate()?;
        Ok(vendor)
    }

    pub fn booth_name(&self) -> &str {
        &self.booth_name
    }

    /// Replaces the booth name. Does not validate.
    pub fn set_booth_name(&mut self, booth_name: impl Into<String>) {
        self.booth_name = booth_name.into();
    }

    pub fn unique_id(&self) -> UniqueId {
        self.unique_id
    }
}

impl Sealed for VendorSponsor {}

impl HasName for VendorSponsor {
    fn person_name(&self) -> &PersonName {
        &self.name
    }

    fn person_name_mut(&mut self) -> &mut PersonName {
        &mut self.name
    }
}

impl Record for VendorSponsor {
    const KIND: EntityKind = EntityKind::VendorSponsor;
    const COLUMNS: &'static [&'static str] =
        &["First Name", "Last Name", "Booth Name", "Unique ID"];

    fn validate(&self) -> Result<(), ValidationError> {
        self.name
            .required(RequiredFields::new())
            .text("boothName", &self.booth_name)
            .finish()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.first_name().to_string(),
            self.last_name().to_string(),
            self.booth_name.clone(),
            self.unique_id.to_string(),
        ]
    }
}

impl CollectionRecord for VendorSponsor {}
