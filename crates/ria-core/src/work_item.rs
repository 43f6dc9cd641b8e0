//! Work item records as returned by the work item detail service.
//!
//! Absent fields are defaulted here, once, at the deserialization boundary:
//! a record without `relations` has none, a relation without `rel` or `url`
//! carries an empty string. Aggregation never has to guess.

use serde::{Deserialize, Serialize};

use crate::ids::WorkItemId;

/// Relation type of links that point at source control artifacts.
pub const ARTIFACT_LINK: &str = "ArtifactLink";

/// A work item together with its ordered relation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItemRecord {
    pub id: WorkItemId,
    #[serde(default)]
    pub relations: Vec<Relation>,
}

/// A typed link from a work item to another entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    #[serde(default)]
    pub rel: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub attributes: RelationAttributes,
}

/// Free-form attributes attached to a relation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationAttributes {
    /// Link display name (e.g. `Branch`, `Fixed in Commit`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Relation {
    /// Whether this relation targets a source control artifact.
    #[must_use]
    pub fn is_artifact_link(&self) -> bool {
        self.rel == ARTIFACT_LINK
    }

    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.attributes.comment.as_deref()
    }
}
