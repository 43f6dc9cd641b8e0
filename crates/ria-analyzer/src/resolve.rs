//! Work item ID resolution from either a WIQL query or an explicit list.

use ria_core::{AnalysisError, MAX_WORK_ITEMS, WorkItemId, WorkItemQuery, parse_explicit_ids};

/// Resolve the work items an analysis covers.
///
/// A non-blank `query` wins and `explicit_ids` is ignored. Otherwise a
/// non-blank `explicit_ids` is parsed as a comma-separated list. With neither
/// the result is empty. Both paths keep service/input order, keep duplicates,
/// and stop at [`MAX_WORK_ITEMS`].
///
/// # Errors
///
/// [`AnalysisError::Query`] if the query service fails,
/// [`AnalysisError::InvalidWorkItemId`] for a non-integer explicit token.
pub async fn resolve_work_item_ids<Q>(
    service: &Q,
    explicit_ids: Option<&str>,
    query: Option<&str>,
) -> Result<Vec<WorkItemId>, AnalysisError>
where
    Q: WorkItemQuery + ?Sized,
{
    if let Some(query) = query.filter(|q| !q.trim().is_empty()) {
        let mut ids = service
            .query_ids(query)
            .await
            .map_err(|e| AnalysisError::Query(Box::new(e)))?;
        ids.truncate(MAX_WORK_ITEMS);
        tracing::debug!(count = ids.len(), "resolved work items from query");
        return Ok(ids);
    }

    match explicit_ids.filter(|ids| !ids.trim().is_empty()) {
        Some(list) => {
            let ids = parse_explicit_ids(list)?;
            tracing::debug!(count = ids.len(), "resolved explicit work items");
            Ok(ids)
        }
        None => Ok(Vec::new()),
    }
}
