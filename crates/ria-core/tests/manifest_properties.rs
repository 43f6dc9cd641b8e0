//! Whole-manifest properties over a mixed fixture of work items.

use std::collections::{HashMap, HashSet};

use pretty_assertions::assert_eq;
use ria_core::{ReleaseManifest, WorkItemRecord, aggregate, parse_explicit_ids};

/// Work item detail responses as the service returns them.
const RECORDS: &str = r#"[
    {
        "id": 101,
        "relations": [
            { "rel": "ArtifactLink", "url": "vstfs:///Git/Ref/p1%2FR1%2Frefs%2Fheads%2Fmain" },
            { "rel": "ArtifactLink", "url": "vstfs:///Git/Commit/p1%2FR1%2F9e1f00d" }
        ]
    },
    {
        "id": 102,
        "relations": [
            { "rel": "System.LinkTypes.Hierarchy-Reverse", "url": "https://dev.azure.com/o/_apis/wit/workItems/100" }
        ]
    },
    {
        "id": 103,
        "relations": [
            { "rel": "ArtifactLink", "url": "vstfs:///Git/PullRequestId/p1%2FR2%2F77" },
            { "rel": "ArtifactLink", "url": "vstfs:///Git/Ref/p1%2FR1%2Frefs%2Fheads%2Fmain" }
        ]
    },
    { "id": 104 },
    {
        "id": 105,
        "relations": [
            { "rel": "ArtifactLink", "url": "vstfs:///Git/Ref/p1%2FR3%2Frefs%2Fheads%2Fbad%G1" },
            { "rel": "Hyperlink", "url": "https://wiki.example.com/page" }
        ]
    }
]"#;

fn records() -> Vec<WorkItemRecord> {
    serde_json::from_str(RECORDS).expect("fixture parses")
}

fn repo_names() -> HashMap<String, String> {
    HashMap::from([
        ("R1".to_string(), "checkout-service".to_string()),
        ("R2".to_string(), "payments-api".to_string()),
    ])
}

fn manifest() -> ReleaseManifest {
    let ids = parse_explicit_ids("101,102,103,104,105,106").expect("ids parse");
    aggregate(&ids, &records(), &repo_names())
}

#[test]
fn every_fetched_item_is_covered_exactly_once() {
    let manifest = manifest();
    for record in records() {
        let in_repos = manifest
            .repositories
            .iter()
            .filter(|entry| entry.work_item_ids.contains(&record.id))
            .count()
            > 0;
        let unlinked = manifest.unlinked_work_items.contains(&record.id);
        assert!(
            in_repos ^ unlinked,
            "work item {} must be linked xor unlinked",
            record.id
        );
    }
}

#[test]
fn entry_sets_have_no_duplicates() {
    let manifest = manifest();
    for entry in &manifest.repositories {
        assert_eq!(
            entry.work_item_ids.iter().collect::<HashSet<_>>().len(),
            entry.work_item_ids.len()
        );
        assert_eq!(
            entry.branches.iter().collect::<HashSet<_>>().len(),
            entry.branches.len()
        );
        assert_eq!(
            entry.artifact_types.iter().collect::<HashSet<_>>().len(),
            entry.artifact_types.len()
        );
        assert!(!entry.work_item_ids.is_empty());
    }
}

#[test]
fn mixed_fixture_produces_expected_manifest() {
    let json = serde_json::to_value(manifest()).expect("serializes");
    assert_eq!(
        json,
        serde_json::json!({
            "totalWorkItems": 6,
            "totalRepositories": 2,
            "repositories": [
                {
                    "repositoryId": "R1",
                    "repositoryName": "checkout-service",
                    "branches": ["main", "9e1f00d"],
                    "workItemIds": [101, 103],
                    "artifactTypes": ["Branch", "Commit"]
                },
                {
                    "repositoryId": "R2",
                    "repositoryName": "payments-api",
                    "branches": ["77"],
                    "workItemIds": [103],
                    "artifactTypes": ["PullRequest"]
                }
            ],
            "unlinkedWorkItems": [102, 104, 105]
        })
    );
}

#[test]
fn aggregation_is_idempotent() {
    let first = serde_json::to_string(&manifest()).expect("serializes");
    let second = serde_json::to_string(&manifest()).expect("serializes");
    assert_eq!(first, second);
}
