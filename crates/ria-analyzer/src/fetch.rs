//! Bounded concurrent retrieval of work item records and the repository
//! directory.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use ria_core::{RepositoryDirectory, WorkItemDetail, WorkItemId, WorkItemRecord, repository};

/// Maximum number of work item fetches in flight at once.
pub const FETCH_CONCURRENCY: usize = 5;

/// Fetch every work item in `ids` with at most [`FETCH_CONCURRENCY`]
/// requests in flight.
///
/// Failed items are logged and left out of the result; they are not retried.
/// Records come back in completion order, not input order. Dropping the
/// returned future aborts every outstanding fetch.
pub async fn fetch_work_items<D>(service: Arc<D>, ids: &[WorkItemId]) -> Vec<WorkItemRecord>
where
    D: WorkItemDetail + 'static,
{
    let mut set = tokio::task::JoinSet::new();
    let semaphore = Arc::new(tokio::sync::Semaphore::new(FETCH_CONCURRENCY));

    for &id in ids {
        let service = Arc::clone(&service);
        let sem = Arc::clone(&semaphore);
        set.spawn(async move {
            let Ok(_permit) = sem.acquire().await else {
                return (id, None);
            };
            (id, Some(service.work_item(id).await))
        });
    }

    let mut records = Vec::with_capacity(ids.len());
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((_, Some(Ok(record)))) => records.push(record),
            Ok((id, Some(Err(e)))) => {
                tracing::warn!(work_item = id, %e, "work item fetch failed, dropping it");
            }
            Ok((id, None)) => tracing::warn!(work_item = id, "work item fetch was not started"),
            Err(e) => tracing::warn!(%e, "work item fetch task failed"),
        }
    }

    tracing::debug!(
        requested = ids.len(),
        fetched = records.len(),
        "fetched work item relations"
    );
    records
}

/// Fetch the repository directory as an id → name lookup.
///
/// # Errors
///
/// Propagates the directory service error.
pub async fn try_fetch_repo_map<R>(service: &R) -> Result<HashMap<String, String>, R::Error>
where
    R: RepositoryDirectory + ?Sized,
{
    let repositories = service.repositories().await?;
    Ok(repository::name_lookup(repositories))
}

/// Fetch the repository directory, substituting an empty lookup on failure.
///
/// With an empty lookup every repository is reported under its raw ID.
pub async fn fetch_repo_map<R>(service: &R) -> HashMap<String, String>
where
    R: RepositoryDirectory + ?Sized,
{
    names_or_empty(try_fetch_repo_map(service).await)
}

/// Unwrap a directory lookup, logging the failure and falling back to an
/// empty map.
pub(crate) fn names_or_empty<E: fmt::Display>(
    lookup: Result<HashMap<String, String>, E>,
) -> HashMap<String, String> {
    lookup.unwrap_or_else(|e| {
        tracing::warn!(%e, "repository directory unavailable, using raw repository ids");
        HashMap::new()
    })
}
