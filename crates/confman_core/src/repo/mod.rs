//! Repository layer abstractions and JSON file persistence.
//!
//! # Responsibility
//! - Define the load/save contract services depend on.
//! - Isolate file layout and serialization details from callers.
//!
//! # Invariants
//! - Write paths validate every record before touching the file system.
//! - Read paths reject invalid persisted records instead of masking them.
//! - A missing document is absence, never an error.

pub mod codec;
pub mod json_repo;

use crate::model::{CollectionRecord, Conference, ValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub use json_repo::JsonRepository;

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Failure of a load or save call.
#[derive(Debug)]
pub enum PersistenceError {
    /// A record handed to a save call failed validation; nothing was written.
    Validation(ValidationError),
    /// Reading or writing the document failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Records could not be encoded as a JSON document; nothing was written.
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The document is not valid JSON for the expected shape.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The document parsed but holds a record that fails validation.
    InvalidData {
        path: PathBuf,
        index: Option<usize>,
        error: ValidationError,
    },
}

impl PersistenceError {
    /// Stable category for log lines; never carries document contents.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Io { .. } => "io",
            Self::Serialize { .. } => "serialize",
            Self::Parse { .. } => "parse",
            Self::InvalidData { .. } => "invalid_record",
        }
    }
}

impl Display for PersistenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Io { path, source } => write!(f, "i/o error on `{}`: {source}", path.display()),
            Self::Serialize { path, source } => {
                write!(f, "failed to encode `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "malformed json in `{}`: {source}", path.display())
            }
            Self::InvalidData {
                path,
                index: Some(index),
                error,
            } => write!(
                f,
                "invalid persisted record #{index} in `{}`: {error}",
                path.display()
            ),
            Self::InvalidData {
                path,
                index: None,
                error,
            } => write!(f, "invalid persisted record in `{}`: {error}", path.display()),
        }
    }
}

impl Error for PersistenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Io { source, .. } => Some(source),
            Self::Serialize { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::InvalidData { error, .. } => Some(error),
        }
    }
}

impl From<ValidationError> for PersistenceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Load/save contract for the conference document and record collections.
///
/// Implementations are stateless with respect to records: callers own the
/// in-memory lists and pass the full list back on every save.
pub trait RecordRepository {
    fn load_conference(&self) -> PersistenceResult<Option<Conference>>;
    fn save_conference(&self, conference: Option<&Conference>) -> PersistenceResult<()>;
    fn load_collection<T: CollectionRecord>(&self) -> PersistenceResult<Vec<T>>;
    fn save_collection<T: CollectionRecord>(&self, records: &[T]) -> PersistenceResult<()>;
}

impl<R: RecordRepository + ?Sized> RecordRepository for &R {
    fn load_conference(&self) -> PersistenceResult<Option<Conference>> {
        (**self).load_conference()
    }

    fn save_conference(&self, conference: Option<&Conference>) -> PersistenceResult<()> {
        (**self).save_conference(conference)
    }

    fn load_collection<T: CollectionRecord>(&self) -> PersistenceResult<Vec<T>> {
        (**self).load_collection()
    }

    fn save_collection<T: CollectionRecord>(&self, records: &[T]) -> PersistenceResult<()> {
        (**self).save_collection(records)
    }
}

#[cfg(test)]
mod tests {
    use super::PersistenceError;
    use crate::model::ValidationError;
    use std::error::Error;
    use std::path::PathBuf;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{").unwrap_err()
    }

    #[test]
    fn serialize_failure_is_reported_as_encoding_not_parsing() {
        let err = PersistenceError::Serialize {
            path: PathBuf::from("speakers_data.json"),
            source: json_error(),
        };

        let message = err.to_string();
        assert!(message.starts_with("failed to encode `speakers_data.json`"), "{message}");
        assert!(!message.contains("malformed"));
        assert_eq!(err.code(), "serialize");
        assert!(err.source().is_some());
    }

    #[test]
    fn error_codes_are_stable_categories() {
        let path = PathBuf::from("staff_data.json");
        let cases = [
            (
                PersistenceError::Validation(ValidationError::InvalidYear("x".to_string())),
                "validation",
            ),
            (
                PersistenceError::Io {
                    path: path.clone(),
                    source: std::io::Error::other("denied"),
                },
                "io",
            ),
            (
                PersistenceError::Parse {
                    path: path.clone(),
                    source: json_error(),
                },
                "parse",
            ),
            (
                PersistenceError::InvalidData {
                    path,
                    index: Some(2),
                    error: ValidationError::MissingFields(vec!["hatSize".to_string()]),
                },
                "invalid_record",
            ),
        ];

        for (err, code) in cases {
            assert_eq!(err.code(), code);
        }
    }
}
