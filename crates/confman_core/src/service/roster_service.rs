//! Roster use-case service.
//!
//! # Responsibility
//! - Apply add/replace/remove to a caller-owned list and persist it.
//! - Report an out-of-range position as "no selection".
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - The list is rolled back when persistence fails.
//! - `replace` does not carry the old unique ID over; the replacement keeps
//!   the ID it was constructed with.

use crate::model::CollectionRecord;
use crate::repo::{PersistenceError, PersistenceResult, RecordRepository};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for roster and conference mutations.
#[derive(Debug)]
pub enum RosterError {
    /// Requested position does not exist in the list.
    NoSelection { index: usize, len: usize },
    /// Persistence-layer failure; the in-memory list was restored.
    Persistence(PersistenceError),
}

impl Display for RosterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSelection { index, len } => {
                write!(f, "no record selected: index {index} out of range for {len} record(s)")
            }
            Self::Persistence(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RosterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoSelection { .. } => None,
            Self::Persistence(err) => Some(err),
        }
    }
}

impl From<PersistenceError> for RosterError {
    fn from(value: PersistenceError) -> Self {
        Self::Persistence(value)
    }
}

/// Roster service facade over repository implementations.
pub struct RosterService<R: RecordRepository> {
    repo: R,
}

impl<R: RecordRepository> RosterService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Loads the full roster for `T`; empty when nothing was saved yet.
    pub fn load<T: CollectionRecord>(&self) -> PersistenceResult<Vec<T>> {
        self.repo.load_collection()
    }

    /// Appends `record` and saves the roster.
    pub fn add<T: CollectionRecord>(
        &self,
        roster: &mut Vec<T>,
        record: T,
    ) -> Result<(), RosterError> {
        roster.push(record);
        if let Err(err) = self.repo.save_collection(roster.as_slice()) {
            roster.pop();
            return Err(self.rolled_back("add", T::KIND, err));
        }

        info!(
            "event=roster_add module=service status=ok kind={} len={}",
            T::KIND,
            roster.len()
        );
        Ok(())
    }

    /// Replaces the record at `index` and saves the roster.
    ///
    /// Returns the record that was replaced.
    pub fn replace<T: CollectionRecord>(
        &self,
        roster: &mut Vec<T>,
        index: usize,
        record: T,
    ) -> Result<T, RosterError> {
        let slot = select(roster.as_mut_slice(), index)?;
        let previous = std::mem::replace(slot, record);
        if let Err(err) = self.repo.save_collection(roster.as_slice()) {
            roster[index] = previous;
            return Err(self.rolled_back("replace", T::KIND, err));
        }

        info!(
            "event=roster_replace module=service status=ok kind={} index={}",
            T::KIND,
            index
        );
        Ok(previous)
    }

    /// Removes the record at `index` and saves the roster.
    ///
    /// Returns the removed record.
    pub fn remove<T: CollectionRecord>(
        &self,
        roster: &mut Vec<T>,
        index: usize,
    ) -> Result<T, RosterError> {
        select(roster.as_mut_slice(), index)?;
        let removed = roster.remove(index);
        if let Err(err) = self.repo.save_collection(roster.as_slice()) {
            roster.insert(index, removed);
            return Err(self.rolled_back("remove", T::KIND, err));
        }

        info!(
            "event=roster_remove module=service status=ok kind={} len={}",
            T::KIND,
            roster.len()
        );
        Ok(removed)
    }

    fn rolled_back(
        &self,
        action: &str,
        kind: crate::model::EntityKind,
        err: PersistenceError,
    ) -> RosterError {
        warn!(
            "event=roster_{} module=service status=rolled_back kind={} error_code={}",
            action,
            kind,
            err.code()
        );
        RosterError::Persistence(err)
    }
}

fn select<T>(roster: &mut [T], index: usize) -> Result<&mut T, RosterError> {
    let len = roster.len();
    roster
        .get_mut(index)
        .ok_or(RosterError::NoSelection { index, len })
}
