//! Attendee record and payment type.

use super::person::{HasName, PersonName, UniqueId};
use super::sealed::Sealed;
use super::validation::{RequiredFields, ValidationError};
use super::{CollectionRecord, EntityKind, Record};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// How an attendee pays for registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    CreditCard,
    Check,
    Cash,
    Invoice,
}

impl PaymentType {
    /// All variants in display order.
    pub const ALL: [PaymentType; 4] = [
        PaymentType::CreditCard,
        PaymentType::Check,
        PaymentType::Cash,
        PaymentType::Invoice,
    ];

    /// Wire name, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreditCard => "CREDIT_CARD",
            Self::Check => "CHECK",
            Self::Cash => "CASH",
            Self::Invoice => "INVOICE",
        }
    }
}

impl Display for PaymentType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|payment_type| payment_type.as_str() == normalized)
            .ok_or_else(|| ValidationError::InvalidPaymentType(value.trim().to_string()))
    }
}

/// Registered conference attendee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    #[serde(flatten)]
    name: PersonName,
    payment_type: PaymentType,
    unique_id: UniqueId,
}

impl Attendee {
    /// Creates an attendee with a freshly generated unique ID.
    ///
    /// # Errors
    /// - `MissingFields` when a name is blank or `payment_type` is `None`;
    ///   all offending keys are reported together.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        payment_type: Option<PaymentType>,
    ) -> Result<Self, ValidationError> {
        let name = PersonName::new(first_name, last_name);
        let required = name
            .required(RequiredFields::new())
            .present("paymentType", payment_type.as_ref());
        let Some(payment_type) = payment_type else {
            return Err(required.into_error());
        };
        required.finish()?;

        Ok(Self {
            name,
            payment_type,
            unique_id: Uuid::new_v4(),
        })
    }

    pub fn payment_type(&self) -> PaymentType {
        self.payment_type
    }

    pub fn set_payment_type(&mut self, payment_type: PaymentType) {
        self.payment_type = payment_type;
    }

    pub fn unique_id(&self) -> UniqueId {
        self.unique_id
    }
}

impl Sealed for Attendee {}

impl HasName for Attendee {
    fn person_name(&self) -> &PersonName {
        &self.name
    }

    fn person_name_mut(&mut self) -> &mut PersonName {
        &mut self.name
    }
}

impl Record for Attendee {
    const KIND: EntityKind = EntityKind::Attendee;
    const COLUMNS: &'static [&'static str] =
        &["First Name", "Last Name", "Payment Type", "Unique ID"];

    fn validate(&self) -> Result<(), ValidationError> {
        self.name.required(RequiredFields::new()).finish()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.first_name().to_string(),
            self.last_name().to_string(),
            self.payment_type.to_string(),
            self.unique_id.to_string(),
        ]
    }
}

impl CollectionRecord for Attendee {}
