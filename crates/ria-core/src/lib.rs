//! # ria-core
//!
//! Core types, artifact link parsing, and manifest aggregation for the
//! release impact analyzer.
//!
//! This crate provides the foundational pieces shared across all `ria` crates:
//! - Work item, relation, and repository records as returned by the services
//! - The `vstfs:///Git/` artifact link parser
//! - Explicit work item ID list parsing
//! - The release aggregator that folds fetched records into a manifest
//! - Port traits implemented by infrastructure crates
//! - Cross-cutting error types
//!
//! Nothing in here performs I/O.

pub mod aggregate;
pub mod artifact;
pub mod errors;
pub mod ids;
pub mod manifest;
pub mod ports;
pub mod repository;
pub mod work_item;

pub use aggregate::aggregate;
pub use artifact::{ArtifactType, GitArtifactReference};
pub use errors::AnalysisError;
pub use ids::{MAX_WORK_ITEMS, WorkItemId, parse_explicit_ids};
pub use manifest::{AnalysisOutcome, ReleaseManifest, RepoReleaseEntry};
pub use ports::{RepositoryDirectory, WorkItemDetail, WorkItemQuery};
pub use repository::RepositoryInfo;
pub use work_item::{ARTIFACT_LINK, Relation, WorkItemRecord};
