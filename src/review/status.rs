//! Pull request status filter.

use crate::core::DevboardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ReviewRecord;

/// Which records to keep, by the service-side status of each record.
///
/// Mirrors the service's `searchCriteria.status` values. [`ReviewStatus::All`]
/// keeps every record, including ones that carry no status at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Active,
    Completed,
    Abandoned,
    #[default]
    All,
}

impl ReviewStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Abandoned => "abandoned",
            Self::All => "all",
        }
    }

    /// Whether `record` passes this filter. Status comparison ignores case.
    #[must_use]
    pub fn matches(self, record: &ReviewRecord) -> bool {
        match self {
            Self::All => true,
            status => record
                .status
                .as_deref()
                .is_some_and(|value| value.eq_ignore_ascii_case(status.as_str())),
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReviewStatus {
    type Err = DevboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "abandoned" => Ok(Self::Abandoned),
            "all" => Ok(Self::All),
            _ => Err(DevboardError::InvalidReviewStatus {
                status: s.to_string(),
            }),
        }
    }
}
