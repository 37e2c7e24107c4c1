//! Raw pull request records as returned by the service.
//!
//! Every field is optional at the deserialization level so that a record with a
//! missing field still loads; [`crate::review::normalize`] then decides which
//! absences are errors and reports them with the record's position.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One pull request record, prior to normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    pub title: Option<String>,
    pub description: Option<String>,
    pub repository: Option<RepositoryRef>,
    #[serde(rename = "pullRequestId")]
    pub review_id: Option<ReviewId>,
    pub created_by: Option<IdentityRef>,
    #[serde(rename = "creationDate")]
    pub created_at: Option<String>,
    #[serde(rename = "closedDate")]
    pub closed_at: Option<String>,
    pub reviewers: Option<Vec<IdentityRef>>,
    /// Service-side state (`active`, `completed`, `abandoned`).
    pub status: Option<String>,
}

/// Repository a record belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RepositoryRef {
    pub name: Option<String>,
}

/// A person or service account: record author or reviewer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRef {
    pub display_name: Option<String>,
}

/// Pull request identifier; the service sends integers, some exports send strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ReviewId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<u64> for ReviewId {
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

/// An input document: a bare array, or the service's `{ "count", "value" }` envelope.
#[derive(Debug, Clone)]
pub enum ReviewBatch {
    Records(Vec<ReviewRecord>),
    Envelope {
        value: Vec<ReviewRecord>,
    },
}

#[derive(Deserialize)]
struct Envelope {
    value: Vec<ReviewRecord>,
}

impl ReviewBatch {
    /// Parse a batch from JSON text.
    ///
    /// The shape is chosen from the first non-whitespace character, so a badly
    /// typed field inside a record is reported by serde with its line and column
    /// instead of as a generic shape mismatch.
    ///
    /// # Errors
    ///
    /// Returns the [`serde_json::Error`] for malformed JSON or a record field of
    /// the wrong type.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        if content.trim_start().starts_with('[') {
            serde_json::from_str(content).map(Self::Records)
        } else {
            serde_json::from_str::<Envelope>(content).map(|envelope| Self::Envelope {
                value: envelope.value,
            })
        }
    }

    #[must_use]
    pub fn into_records(self) -> Vec<ReviewRecord> {
        match self {
            Self::Records(records)
            | Self::Envelope {
                value: records,
            } => records,
        }
    }
}
