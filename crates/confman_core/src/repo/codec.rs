//! Field-level JSON codecs and document encoding.
//!
//! # Responsibility
//! - Encode value types whose wire shape differs from their Rust shape.
//! - Produce the pretty-printed document text written to disk.
//!
//! # Invariants
//! - `Year` is written as a bare integer and read back only from an integer
//!   in `Year::MIN..=Year::MAX`.
//! - Codecs are attached to the value type, so every record embedding it
//!   shares one encoding.

use crate::model::Year;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Formatter;

impl Serialize for Year {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.get())
    }
}

impl<'de> Deserialize<'de> for Year {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_i64(YearVisitor)
    }
}

struct YearVisitor;

impl<'de> Visitor<'de> for YearVisitor {
    type Value = Year;

    fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "an integer year in {}..={}", Year::MIN, Year::MAX)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Year, E> {
        Year::new(value).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Year, E> {
        let value = i64::try_from(value)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))?;
        self.visit_i64(value)
    }
}

/// Encodes a document the way it is stored on disk: two-space indentation,
/// fields in declaration order.
pub fn to_document<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::to_document;
    use crate::model::Year;
    use serde_json::json;

    #[test]
    fn year_serializes_as_bare_integer() {
        let year = Year::new(2024).unwrap();
        assert_eq!(serde_json::to_value(year).unwrap(), json!(2024));
    }

    #[test]
    fn year_deserializes_from_integer_only() {
        let year: Year = serde_json::from_value(json!(1987)).unwrap();
        assert_eq!(year.get(), 1987);

        assert!(serde_json::from_value::<Year>(json!({ "year": 1987 })).is_err());
        assert!(serde_json::from_value::<Year>(json!("1987")).is_err());
    }

    #[test]
    fn year_deserialize_rejects_out_of_range_value() {
        let err = serde_json::from_value::<Year>(json!(12_345)).unwrap_err();
        assert!(
            err.to_string().contains("year 12345 is out of range"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn documents_use_two_space_indentation() {
        let text = to_document(&json!({ "year": 2024 })).unwrap();
        assert_eq!(text, "{\n  \"year\": 2024\n}");
    }
}
