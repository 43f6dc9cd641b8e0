//! Cross-cutting error types for the release impact analyzer.
//!
//! Only failures that abort an analysis live here. Degraded paths (a single
//! work item that cannot be fetched, an unreachable repository directory, an
//! unparseable artifact link) are recovered where they happen and never
//! surface as an [`AnalysisError`]. Transport errors are defined in
//! `ria-devops`.

use std::time::Duration;

use thiserror::Error;

/// Errors that abort a release analysis.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A token in an explicit comma-separated ID list is not an integer.
    #[error("invalid work item id '{token}'")]
    InvalidWorkItemId { token: String },

    /// The work tracking query service rejected or failed the query.
    #[error("work item query failed: {0}")]
    Query(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Resolution produced no work items to analyze.
    #[error("no work items found")]
    NoWorkItems,

    /// Every work item fetch failed and the repository directory was unreachable.
    #[error("work item and repository services are unreachable")]
    ServicesUnreachable,

    /// The whole analysis exceeded its time budget.
    #[error("analysis timed out after {}", format_budget(.budget))]
    Timeout { budget: Duration },
}

/// Whole seconds as `60s`, anything finer as `250ms`.
fn format_budget(budget: &Duration) -> String {
    if budget.subsec_nanos() == 0 {
        format!("{}s", budget.as_secs())
    } else {
        format!("{}ms", budget.as_millis())
    }
}
