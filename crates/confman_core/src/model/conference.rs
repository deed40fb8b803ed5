//! Conference record and calendar year value.
//!
//! # Invariants
//! - `Year` always holds a value in `1000..=9999`.
//! - `Year` is encoded as a bare JSON integer; see `repo::codec`.

use super::sealed::Sealed;
use super::validation::{normalize, RequiredFields, ValidationError};
use super::{EntityKind, Record};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Calendar year of a conference edition.
///
/// Limited to four-digit years so the bare integer on disk always reads as
/// a full year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(u16);

impl Year {
    pub const MIN: i64 = 1000;
    pub const MAX: i64 = 9999;

    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::YearOutOfRange(value));
        }
        u16::try_from(value)
            .map(Self)
            .map_err(|_| ValidationError::YearOutOfRange(value))
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl Display for Year {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Year {
    type Err = ValidationError;

    /// Parses trimmed decimal text such as `"2024"` or `"+2024"`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let parsed = trimmed
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidYear(trimmed.to_string()))?;
        Self::new(parsed)
    }
}

/// The single conference edition managed by the tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conference {
    name: String,
    nick_name: String,
    year: Year,
    venue: String,
}

impl Conference {
    pub fn new(
        name: impl Into<String>,
        nick_name: impl Into<String>,
        year: Year,
        venue: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let conference = Self {
            name: normalize(name),
            nick_name: normalize(nick_name),
            year,
            venue: normalize(venue),
        };
        conference.validate()?;
        Ok(conference)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nick_name(&self) -> &str {
        &self.nick_name
    }

    pub fn year(&self) -> Year {
        self.year
    }

    pub fn venue(&self) -> &str {
        &self.venue
    }
}

impl Sealed for Conference {}

impl Record for Conference {
    const KIND: EntityKind = EntityKind::Conference;
    const COLUMNS: &'static [&'static str] = &["Name", "Nickname", "Year", "Venue"];

    fn validate(&self) -> Result<(), ValidationError> {
        RequiredFields::new()
            .text("name", &self.name)
            .text("nickName", &self.nick_name)
            .text("venue", &self.venue)
            .finish()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.nick_name.clone(),
            self.year.to_string(),
            self.venue.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::Year;
    use crate::model::ValidationError;

    #[test]
    fn year_parses_trimmed_decimal_text() {
        assert_eq!(" 2024 ".parse::<Year>().unwrap().get(), 2024);
        assert_eq!("+1999".parse::<Year>().unwrap().get(), 1999);
    }

    #[test]
    fn year_rejects_garbage_and_out_of_range_values() {
        assert_eq!(
            "twenty".parse::<Year>(),
            Err(ValidationError::InvalidYear("twenty".to_string()))
        );
        assert_eq!(Year::new(0), Err(ValidationError::YearOutOfRange(0)));
        assert_eq!(Year::new(999), Err(ValidationError::YearOutOfRange(999)));
        assert_eq!(Year::new(1000).map(Year::get), Ok(1000));
        assert_eq!(
            "10000".parse::<Year>(),
            Err(ValidationError::YearOutOfRange(10_000))
        );
    }
}
