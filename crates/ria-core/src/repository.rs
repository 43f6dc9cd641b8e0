//! Repository directory entries.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A git repository in the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Build an id → name lookup, skipping entries without an id.
///
/// A later duplicate id overwrites an earlier one.
#[must_use]
pub fn name_lookup(repositories: Vec<RepositoryInfo>) -> HashMap<String, String> {
    repositories
        .into_iter()
        .filter(|repo| !repo.id.is_empty())
        .map(|repo| (repo.id, repo.name))
        .collect()
}
