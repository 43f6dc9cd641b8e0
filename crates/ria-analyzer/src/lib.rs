//! # ria-analyzer
//!
//! Release impact analysis over the `ria-core` service ports.
//!
//! - [`resolve`]: turn an explicit ID list or a WIQL query into work item IDs
//! - [`fetch`]: fetch work items with bounded concurrency and the repository
//!   directory, both tolerant of failures
//! - [`analyze`]: run resolution, both fetches, and aggregation under one
//!   time budget
//!
//! Infrastructure (HTTP, auth) lives in `ria-devops`; pure logic lives in
//! `ria-core`.

pub mod analyze;
pub mod fetch;
pub mod resolve;

pub use analyze::{ANALYSIS_TIMEOUT, ReleaseAnalyzer};
pub use fetch::{FETCH_CONCURRENCY, fetch_repo_map, fetch_work_items, try_fetch_repo_map};
pub use resolve::resolve_work_item_ids;
