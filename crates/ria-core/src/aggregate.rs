//! Release aggregation: fold fetched work items into a [`ReleaseManifest`].
//!
//! Runs single-threaded after every fetch has completed, so the accumulator
//! needs no synchronization. Repositories keep first-discovery order and the
//! per-repository sets keep first-insertion order, which makes the output
//! deterministic for a given record order.

use std::collections::HashMap;

use crate::artifact::GitArtifactReference;
use crate::ids::WorkItemId;
use crate::manifest::{ReleaseManifest, RepoReleaseEntry};
use crate::work_item::WorkItemRecord;

/// Build the manifest for `resolved_ids` from the records that could be fetched.
///
/// `total_work_items` counts `resolved_ids`, so items whose fetch failed are
/// part of the total but appear neither under a repository nor as unlinked.
#[must_use]
pub fn aggregate(
    resolved_ids: &[WorkItemId],
    records: &[WorkItemRecord],
    repo_names: &HashMap<String, String>,
) -> ReleaseManifest {
    let mut accumulator = Accumulator::default();
    let mut unlinked = Vec::new();

    for record in records {
        let mut linked = false;
        for reference in record
            .relations
            .iter()
            .filter(|relation| relation.is_artifact_link())
            .filter_map(|relation| GitArtifactReference::parse(&relation.url))
        {
            linked = true;
            accumulator.record(record.id, &reference, repo_names);
        }
        if !linked {
            unlinked.push(record.id);
        }
    }

    let repositories = accumulator.into_entries();
    ReleaseManifest {
        total_work_items: resolved_ids.len(),
        total_repositories: repositories.len(),
        repositories,
        unlinked_work_items: unlinked,
    }
}

/// Insertion-ordered map from repository ID to its release entry.
#[derive(Default)]
struct Accumulator {
    entries: Vec<RepoReleaseEntry>,
    index: HashMap<String, usize>,
}

impl Accumulator {
    fn record(
        &mut self,
        work_item: WorkItemId,
        reference: &GitArtifactReference,
        repo_names: &HashMap<String, String>,
    ) {
        let entry = self.entry(&reference.repository_id, repo_names);
        push_unique(&mut entry.work_item_ids, work_item);
        push_unique(
            &mut entry.artifact_types,
            reference.artifact_type.as_str().to_string(),
        );
        if !reference.git_ref.is_empty() {
            push_unique(&mut entry.branches, reference.git_ref.clone());
        }
    }

    fn entry(
        &mut self,
        repository_id: &str,
        repo_names: &HashMap<String, String>,
    ) -> &mut RepoReleaseEntry {
        let idx = match self.index.get(repository_id) {
            Some(&idx) => idx,
            None => {
                let idx = self.entries.len();
                self.entries.push(RepoReleaseEntry {
                    repository_id: repository_id.to_string(),
                    repository_name: repo_names
                        .get(repository_id)
                        .cloned()
                        .unwrap_or_else(|| repository_id.to_string()),
                    branches: Vec::new(),
                    work_item_ids: Vec::new(),
                    artifact_types: Vec::new(),
                });
                self.index.insert(repository_id.to_string(), idx);
                idx
            }
        };
        &mut self.entries[idx]
    }

    fn into_entries(self) -> Vec<RepoReleaseEntry> {
        self.entries
    }
}

/// Ordered set insert over a small `Vec`.
fn push_unique<T: PartialEq>(set: &mut Vec<T>, value: T) {
    if !set.contains(&value) {
        set.push(value);
    }
}
