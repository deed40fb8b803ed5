//! Conference use-case service.
//!
//! # Invariants
//! - At most one conference exists; `set` covers both add and edit.
//! - Clearing writes a "no conference" document rather than deleting the file.

use super::roster_service::RosterError;
use crate::model::Conference;
use crate::repo::{PersistenceResult, RecordRepository};
use log::info;

/// Service for the single-conference document.
pub struct ConferenceService<R: RecordRepository> {
    repo: R,
}

impl<R: RecordRepository> ConferenceService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn load(&self) -> PersistenceResult<Option<Conference>> {
        self.repo.load_conference()
    }

    /// Stores `conference` as the current one and saves it.
    ///
    /// Returns the previous conference, if any. On failure `current` is
    /// left untouched.
    pub fn set(
        &self,
        current: &mut Option<Conference>,
        conference: Conference,
    ) -> Result<Option<Conference>, RosterError> {
        self.repo.save_conference(Some(&conference))?;
        info!(
            "event=conference_set module=service status=ok replaced={}",
            current.is_some()
        );
        Ok(current.replace(conference))
    }

    /// Deletes the current conference and saves "no conference".
    ///
    /// # Errors
    /// - `NoSelection` when there is no conference to delete.
    pub fn clear(&self, current: &mut Option<Conference>) -> Result<Conference, RosterError> {
        let Some(previous) = current.take() else {
            return Err(RosterError::NoSelection { index: 0, len: 0 });
        };
        if let Err(err) = self.repo.save_conference(None) {
            *current = Some(previous);
            return Err(err.into());
        }
        info!("event=conference_clear module=service status=ok");
        Ok(previous)
    }
}
