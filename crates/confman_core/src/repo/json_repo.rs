//! JSON document repository: one file per entity kind.
//!
//! # Responsibility
//! - Map the conference and each record collection to its own document.
//! - Replace documents as whole files; there are no partial updates.
//!
//! # Invariants
//! - A missing document loads as `None` / empty, never as an error.
//! - Saves go through a temp file in the data directory and a rename, so a
//!   reader never observes a half-written document.
//! - There is no cross-document transaction.

use super::codec::to_document;
use super::{PersistenceError, PersistenceResult, RecordRepository};
use crate::model::{
    Attendee, CollectionRecord, Conference, EntityKind, Record, Session, Speaker, Staff,
    ValidationError, VendorSponsor,
};
use log::{error, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::NamedTempFile;

pub const CONFERENCE_FILE: &str = "conference_data.json";
pub const SPEAKERS_FILE: &str = "speakers_data.json";
pub const ATTENDEES_FILE: &str = "attendees_data.json";
pub const SESSIONS_FILE: &str = "sessions_data.json";
pub const STAFF_FILE: &str = "staff_data.json";
pub const VENDORS_FILE: &str = "vendors_data.json";

/// Returns the document file name backing `kind`.
pub fn file_name(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Conference => CONFERENCE_FILE,
        EntityKind::Attendee => ATTENDEES_FILE,
        EntityKind::Speaker => SPEAKERS_FILE,
        EntityKind::Staff => STAFF_FILE,
        EntityKind::VendorSponsor => VENDORS_FILE,
        EntityKind::Session => SESSIONS_FILE,
    }
}

/// File-backed repository rooted at a data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonRepository {
    data_dir: PathBuf,
}

impl JsonRepository {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Resolves document names against the process working directory.
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of the document backing `kind`.
    pub fn path_for(&self, kind: EntityKind) -> PathBuf {
        self.data_dir.join(file_name(kind))
    }

    pub fn save_speakers(&self, speakers: &[Speaker]) -> PersistenceResult<()> {
        self.save_collection(speakers)
    }

    pub fn load_speakers(&self) -> PersistenceResult<Vec<Speaker>> {
        self.load_collection()
    }

    pub fn save_attendees(&self, attendees: &[Attendee]) -> PersistenceResult<()> {
        self.save_collection(attendees)
    }

    pub fn load_attendees(&self) -> PersistenceResult<Vec<Attendee>> {
        self.load_collection()
    }

    pub fn save_sessions(&self, sessions: &[Session]) -> PersistenceResult<()> {
        self.save_collection(sessions)
    }

    pub fn load_sessions(&self) -> PersistenceResult<Vec<Session>> {
        self.load_collection()
    }

    pub fn save_staff(&self, staff: &[Staff]) -> PersistenceResult<()> {
        self.save_collection(staff)
    }

    pub fn load_staff(&self) -> PersistenceResult<Vec<Staff>> {
        self.load_collection()
    }

    pub fn save_vendors(&self, vendors: &[VendorSponsor]) -> PersistenceResult<()> {
        self.save_collection(vendors)
    }

    pub fn load_vendors(&self) -> PersistenceResult<Vec<VendorSponsor>> {
        self.load_collection()
    }

    /// Runs one load or save and emits its start/ok/error log lines.
    ///
    /// Error lines carry only `PersistenceError::code`, so document contents
    /// echoed by the JSON decoder never reach the log.
    fn logged<T>(
        &self,
        event: &str,
        kind: EntityKind,
        operation: impl FnOnce() -> PersistenceResult<T>,
        count: impl FnOnce(&T) -> usize,
    ) -> PersistenceResult<T> {
        let started_at = Instant::now();
        info!("event={} module=repo status=start kind={}", event, kind);

        let result = operation();
        match &result {
            Ok(value) => info!(
                "event={} module=repo status=ok kind={} count={} duration_ms={}",
                event,
                kind,
                count(value),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event={} module=repo status=error kind={} duration_ms={} error_code={}",
                event,
                kind,
                started_at.elapsed().as_millis(),
                err.code()
            ),
        }
        result
    }

    fn replace_file<T: Serialize + ?Sized>(
        &self,
        kind: EntityKind,
        value: &T,
    ) -> PersistenceResult<()> {
        let path = self.path_for(kind);
        let text = to_document(value).map_err(|source| PersistenceError::Serialize {
            path: path.clone(),
            source,
        })?;
        let io_error = |source: std::io::Error| PersistenceError::Io {
            path: path.clone(),
            source,
        };

        std::fs::create_dir_all(&self.data_dir).map_err(io_error)?;
        let mut staged = NamedTempFile::new_in(&self.data_dir).map_err(io_error)?;
        staged.write_all(text.as_bytes()).map_err(io_error)?;
        staged.as_file().sync_all().map_err(io_error)?;
        staged.persist(&path).map_err(|err| io_error(err.error))?;
        Ok(())
    }

    /// Reads and decodes a document; `Ok(None)` when the file is absent or
    /// holds only whitespace.
    fn read_document<T: DeserializeOwned>(&self, kind: EntityKind) -> PersistenceResult<Option<T>> {
        let path = self.path_for(kind);
        match std::fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => Ok(None),
            Ok(text) => serde_json::from_str::<Option<T>>(&text)
                .map_err(|source| PersistenceError::Parse { path, source }),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(PersistenceError::Io { path, source }),
        }
    }

    fn invalid_data(
        &self,
        kind: EntityKind,
        index: Option<usize>,
        error: ValidationError,
    ) -> PersistenceError {
        PersistenceError::InvalidData {
            path: self.path_for(kind),
            index,
            error,
        }
    }
}

impl Default for JsonRepository {
    fn default() -> Self {
        Self::current_dir()
    }
}

impl RecordRepository for JsonRepository {
    fn load_conference(&self) -> PersistenceResult<Option<Conference>> {
        self.logged(
            "doc_load",
            EntityKind::Conference,
            || {
                let conference = self.read_document::<Conference>(EntityKind::Conference)?;
                if let Some(conference) = &conference {
                    conference
                        .validate()
                        .map_err(|err| self.invalid_data(EntityKind::Conference, None, err))?;
                }
                Ok(conference)
            },
            |conference| usize::from(conference.is_some()),
        )
    }

    /// `None` writes a `null` document, which loads back as no conference.
    fn save_conference(&self, conference: Option<&Conference>) -> PersistenceResult<()> {
        let count = usize::from(conference.is_some());
        self.logged(
            "doc_save",
            EntityKind::Conference,
            || {
                if let Some(conference) = conference {
                    conference.validate()?;
                }
                self.replace_file(EntityKind::Conference, &conference)
            },
            |_| count,
        )
    }

    fn load_collection<T: CollectionRecord>(&self) -> PersistenceResult<Vec<T>> {
        self.logged(
            "doc_load",
            T::KIND,
            || {
                let records = self.read_document::<Vec<T>>(T::KIND)?.unwrap_or_default();
                for (index, record) in records.iter().enumerate() {
                    record
                        .validate()
                        .map_err(|err| self.invalid_data(T::KIND, Some(index), err))?;
                }
                Ok(records)
            },
            Vec::len,
        )
    }

    fn save_collection<T: CollectionRecord>(&self, records: &[T]) -> PersistenceResult<()> {
        self.logged(
            "doc_save",
            T::KIND,
            || {
                for record in records {
                    record.validate()?;
                }
                self.replace_file(T::KIND, records)
            },
            |_| records.len(),
        )
    }
}
