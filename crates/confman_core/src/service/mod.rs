//! Core use-case services.
//!
//! # Responsibility
//! - Provide the add/edit/delete flows a UI panel performs on a roster.
//! - Keep UI layers decoupled from storage details.
//!
//! # Invariants
//! - Every successful mutation is followed by a full-collection save.
//! - A failed save leaves the caller's list as it was before the call.

pub mod conference_service;
pub mod roster_service;
pub mod table_view;
