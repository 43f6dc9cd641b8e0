//! Work item identifiers and explicit ID list parsing.

use crate::errors::AnalysisError;

/// Externally assigned work item identifier.
pub type WorkItemId = i64;

/// Upper bound on the number of work items a single analysis considers.
///
/// Applies to both explicit ID lists and query results; anything past the
/// first `MAX_WORK_ITEMS` entries is dropped.
pub const MAX_WORK_ITEMS: usize = 200;

/// Parse a comma-separated list such as `"101, 102,,103"`.
///
/// Tokens are trimmed and empty tokens are dropped. Order is preserved and
/// duplicates are kept. The result is truncated to [`MAX_WORK_ITEMS`].
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidWorkItemId`] for the first token (within
/// the kept prefix) that is not an integer.
pub fn parse_explicit_ids(input: &str) -> Result<Vec<WorkItemId>, AnalysisError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .take(MAX_WORK_ITEMS)
        .map(|token| {
            token
                .parse::<WorkItemId>()
                .map_err(|_| AnalysisError::InvalidWorkItemId {
                    token: token.to_string(),
                })
        })
        .collect()
}
