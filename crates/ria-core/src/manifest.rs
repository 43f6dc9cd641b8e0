//! Release manifest returned by `ria analyze`.
//!
//! The JSON shape is camelCase:
//!
//! ```json
//! {
//!   "totalWorkItems": 2,
//!   "totalRepositories": 1,
//!   "repositories": [
//!     {
//!       "repositoryId": "R1",
//!       "repositoryName": "checkout-service",
//!       "branches": ["main"],
//!       "workItemIds": [101],
//!       "artifactTypes": ["Branch"]
//!     }
//!   ],
//!   "unlinkedWorkItems": [102]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::AnalysisError;
use crate::ids::WorkItemId;

/// One repository that has to be released, with everything linking to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoReleaseEntry {
    pub repository_id: String,
    pub repository_name: String,
    pub branches: Vec<String>,
    pub work_item_ids: Vec<WorkItemId>,
    pub artifact_types: Vec<String>,
}

/// Per-repository release impact of a set of work items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseManifest {
    /// Number of resolved work item IDs, including any whose fetch failed.
    pub total_work_items: usize,
    pub total_repositories: usize,
    pub repositories: Vec<RepoReleaseEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unlinked_work_items: Vec<WorkItemId>,
}

/// Result of `analyze_release` as handed to callers that want plain JSON.
///
/// Serializes either as the manifest itself or as `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Manifest(ReleaseManifest),
    Error { error: String },
}

impl AnalysisOutcome {
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

impl From<Result<ReleaseManifest, AnalysisError>> for AnalysisOutcome {
    fn from(result: Result<ReleaseManifest, AnalysisError>) -> Self {
        match result {
            Ok(manifest) => Self::Manifest(manifest),
            Err(AnalysisError::NoWorkItems) => Self::Error {
                error: AnalysisError::NoWorkItems.to_string(),
            },
            Err(e) => Self::Error {
                error: format!("release analysis failed: {e}"),
            },
        }
    }
}
