//! Pull request normalization.
//!
//! [`normalize`] maps raw [`ReviewRecord`]s into [`NormalizedReview`]s, the flat
//! shape the dashboard renders:
//!
//! - `link` is built from the caller's link prefix, the project, the record's own
//!   repository name and its id:
//!   `{prefix}/{project}/_git/{repository}/pullrequest/{id}`
//! - `completed_at` is copied from `closedDate` and omitted from the output when
//!   the record has none, so "still open" stays distinguishable from "closed"
//! - `reviewers` joins reviewer display names with `", "`, skipping empty names and
//!   domain-qualified service accounts (`DOMAIN\account`)
//!
//! The same reviewer filter applies to every record, whatever its status.
//! [`normalize_matching`] additionally selects records by [`ReviewStatus`].
//!
//! Normalization is all-or-nothing: the first record missing a required field
//! fails the batch with [`DevboardError::InvalidRecord`].

mod record;
mod status;

pub use record::{IdentityRef, RepositoryRef, ReviewBatch, ReviewId, ReviewRecord};
pub use status::ReviewStatus;

use crate::constants::{DOMAIN_SEPARATOR, REVIEWER_SEPARATOR};
use crate::core::{DevboardError, Result};
use serde::Serialize;

/// Display-ready pull request.
///
/// Serialized field names follow the dashboard's wire format (`prLink`,
/// `createdByDisplayName`, `creationDate`, `completionDate`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedReview {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "prLink")]
    pub link: String,
    #[serde(rename = "createdByDisplayName")]
    pub author_display_name: String,
    #[serde(rename = "creationDate")]
    pub created_at: String,
    #[serde(rename = "completionDate", skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    pub reviewers: String,
}

/// Normalize a batch of records.
///
/// `link_prefix` is used verbatim (no trailing `/` is added or removed) and
/// `project_id` names the project that contains every record.
///
/// # Errors
///
/// [`DevboardError::InvalidRecord`] naming the first record (by zero-based index)
/// that lacks `title`, `repository.name`, `pullRequestId`, `createdBy.displayName`,
/// `creationDate` or `reviewers`.
///
/// # Examples
///
/// ```rust,no_run
/// use devboard_cli::review::{normalize, ReviewRecord};
///
/// let records: Vec<ReviewRecord> = serde_json::from_str(r#"[{
///     "title": "PR 1",
///     "repository": { "name": "repo1" },
///     "pullRequestId": 123,
///     "createdBy": { "displayName": "User 1" },
///     "creationDate": "2025-01-01T00:00:00Z",
///     "reviewers": [{ "displayName": "Person 1" }, { "displayName": "DOMAIN\\svc" }]
/// }]"#)?;
///
/// let reviews = normalize(&records, "https://dev.azure.com/org", "my-project")?;
/// assert_eq!(reviews[0].link, "https://dev.azure.com/org/my-project/_git/repo1/pullrequest/123");
/// assert_eq!(reviews[0].reviewers, "Person 1");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn normalize(
    records: &[ReviewRecord],
    link_prefix: &str,
    project_id: &str,
) -> Result<Vec<NormalizedReview>> {
    normalize_matching(records, ReviewStatus::All, link_prefix, project_id)
}

/// Normalize only the records whose status matches `status`, preserving order.
///
/// Errors report the record's position in `records`, not among the matches, so
/// the index always points into the caller's input.
///
/// # Errors
///
/// As [`normalize`], for the first matching record that lacks a required field.
/// Records excluded by `status` are never validated.
pub fn normalize_matching(
    records: &[ReviewRecord],
    status: ReviewStatus,
    link_prefix: &str,
    project_id: &str,
) -> Result<Vec<NormalizedReview>> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| status.matches(record))
        .map(|(index, record)| normalize_record(index, record, link_prefix, project_id))
        .collect()
}

fn normalize_record(
    index: usize,
    record: &ReviewRecord,
    link_prefix: &str,
    project_id: &str,
) -> Result<NormalizedReview> {
    let missing = |field: &str| DevboardError::InvalidRecord {
        index,
        field: field.to_string(),
    };

    let title = record.title.as_ref().ok_or_else(|| missing("title"))?;
    let repository = record
        .repository
        .as_ref()
        .and_then(|repo| repo.name.as_deref())
        .ok_or_else(|| missing("repository.name"))?;
    let review_id = record.review_id.as_ref().ok_or_else(|| missing("pullRequestId"))?;
    let author = record
        .created_by
        .as_ref()
        .and_then(|identity| identity.display_name.as_ref())
        .ok_or_else(|| missing("createdBy.displayName"))?;
    let created_at = record.created_at.as_ref().ok_or_else(|| missing("creationDate"))?;
    let reviewers = record.reviewers.as_deref().ok_or_else(|| missing("reviewers"))?;

    Ok(NormalizedReview {
        title: title.clone(),
        description: record.description.clone(),
        link: review_link(link_prefix, project_id, repository, review_id),
        author_display_name: author.clone(),
        created_at: created_at.clone(),
        completed_at: record.closed_at.clone(),
        reviewers: join_reviewers(reviewers),
    })
}

/// Web link to a pull request.
#[must_use]
pub fn review_link(link_prefix: &str, project_id: &str, repository: &str, review_id: &ReviewId) -> String {
    format!("{link_prefix}/{project_id}/_git/{repository}/pullrequest/{review_id}")
}

/// Whether a reviewer display name should be shown to end users.
///
/// Empty names and domain-qualified accounts (containing `\`) are hidden.
#[must_use]
pub fn is_displayable_reviewer(display_name: &str) -> bool {
    !display_name.is_empty() && !display_name.contains(DOMAIN_SEPARATOR)
}

/// Join displayable reviewer names in their original order.
///
/// Returns an empty string when no reviewer survives the filter.
#[must_use]
pub fn join_reviewers(reviewers: &[IdentityRef]) -> String {
    reviewers
        .iter()
        .filter_map(|reviewer| reviewer.display_name.as_deref())
        .filter(|name| is_displayable_reviewer(name))
        .collect::<Vec<_>>()
        .join(REVIEWER_SEPARATOR)
}
