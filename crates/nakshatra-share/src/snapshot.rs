//! Versioned quiz session snapshots
//!
//! A snapshot is plain JSON. Anything without the current `version` is a
//! legacy snapshot and is refused before the body is interpreted.

use std::collections::BTreeMap;

use nakshatra_domain::{Position, Question, QuizSession, ResponseSet};
use serde::{Deserialize, Serialize};

use crate::{SharedPosition, ShareError};

/// Snapshot schema version written by this build
pub const SNAPSHOT_VERSION: u32 = 1;

/// Saved quiz state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Schema version
    pub version: u32,

    /// Question id to Likert value
    pub responses: BTreeMap<String, i64>,

    /// Zero-based cursor
    pub current_index: usize,

    /// Last computed result
    #[serde(default)]
    pub result: Option<SharedPosition>,
}

impl SessionSnapshot {
    /// Capture a session
    pub fn capture(session: &QuizSession<'_>) -> Self {
        let responses = session
            .responses()
            .iter()
            .map(|(id, likert)| (id.to_string(), i64::from(likert.value())))
            .collect();

        Self {
            version: SNAPSHOT_VERSION,
            responses,
            current_index: session.current_index(),
            result: session.result().as_ref().map(SharedPosition::from),
        }
    }

    /// Serialize as pretty JSON
    pub fn to_json(&self) -> Result<String, ShareError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a snapshot, refusing other versions
    ///
    /// # Errors
    /// [`ShareError::UnsupportedVersion`] for legacy snapshots, or
    /// [`ShareError::Json`] when the text is not a snapshot at all.
    pub fn from_json(json: &str) -> Result<Self, ShareError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let found = value.get("version").and_then(serde_json::Value::as_u64);
        if found != Some(u64::from(SNAPSHOT_VERSION)) {
            return Err(ShareError::UnsupportedVersion {
                found,
                expected: SNAPSHOT_VERSION,
            });
        }

        Ok(serde_json::from_value(value)?)
    }

    /// Rebuild a session over `questions`
    ///
    /// Every stored response and the stored result are re-validated.
    pub fn restore<'c>(&self, questions: &'c [Question]) -> Result<QuizSession<'c>, ShareError> {
        let responses = ResponseSet::from_raw(
            self.responses
                .iter()
                .map(|(id, value)| (id.clone(), *value)),
        )?;
        let result = self.result.map(Position::try_from).transpose()?;

        Ok(QuizSession::restore(
            questions,
            responses,
            self.current_index,
            result,
        )?)
    }
}
