//! Session record.

use super::person::HasName;
use super::sealed::Sealed;
use super::speaker::Speaker;
use super::validation::{normalize, RequiredFields, ValidationError};
use super::{CollectionRecord, EntityKind, Record};
use serde::{Deserialize, Serialize};

/// Program session with its main speaker or moderator.
///
/// The speaker is embedded by value, not referenced: editing the speakers
/// roster does not change existing sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    session_title: String,
    session_abstract: String,
    main_speaker_moderator: Speaker,
}

impl Session {
    pub fn new(
        title: impl Into<String>,
        abstract_text: impl Into<String>,
        speaker: Speaker,
    ) -> Result<Self, ValidationError> {
        let session = Self {
            session_title: normalize(title),
            session_abstract: normalize(abstract_text),
            main_speaker_moderator: speaker,
        };
        session.validate()?;
        Ok(session)
    }

    pub fn title(&self) -> &str {
        &self.session_title
    }

    pub fn abstract_text(&self) -> &str {
        &self.session_abstract
    }

    pub fn speaker(&self) -> &Speaker {
        &self.main_speaker_moderator
    }
}

impl Sealed for Session {}

impl Record for Session {
    const KIND: EntityKind = EntityKind::Session;
    const COLUMNS: &'static [&'static str] = &["Title", "Abstract", "Speaker"];

    fn validate(&self) -> Result<(), ValidationError> {
        RequiredFields::new()
            .text("sessionTitle", &self.session_title)
            .text("sessionAbstract", &self.session_abstract)
            .nested(
                "mainSpeakerModerator",
                self.main_speaker_moderator.validate(),
            )
            .finish()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.session_title.clone(),
            self.session_abstract.clone(),
            self.main_speaker_moderator.full_name(),
        ]
    }
}

impl CollectionRecord for Session {}
