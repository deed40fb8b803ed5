//! Core domain logic for the conference manager.
//! This crate is the single source of truth for record invariants and the
//! on-disk JSON format; UI layers call into it with plain lists.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::{
    Attendee, CollectionRecord, Conference, EntityKind, HasName, PaymentType, Person,
    PersonName, Record, Session, Speaker, Staff, UniqueId, ValidationError, VendorSponsor, Year,
};
pub use repo::{JsonRepository, PersistenceError, PersistenceResult, RecordRepository};
pub use service::conference_service::ConferenceService;
pub use service::roster_service::{RosterError, RosterService};
pub use service::table_view::TableView;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
