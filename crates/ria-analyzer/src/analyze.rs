//! Release analysis orchestration.
//!
//! ```text
//! resolve ids ──► fetch work items (≤5 in flight) ──┐
//!             └─► fetch repository directory ───────┴─► aggregate
//! ```
//!
//! The two fetches run concurrently and aggregation starts only once both
//! have finished. The whole pipeline runs under a single time budget.

use std::sync::Arc;
use std::time::Duration;

use ria_core::{
    AnalysisError, AnalysisOutcome, ReleaseManifest, RepositoryDirectory, WorkItemDetail,
    WorkItemQuery, aggregate,
};

use crate::fetch::{fetch_work_items, names_or_empty, try_fetch_repo_map};
use crate::resolve::resolve_work_item_ids;

/// Time budget for one whole analysis.
pub const ANALYSIS_TIMEOUT: Duration = Duration::from_secs(60);

/// Runs release analyses against a set of service ports.
pub struct ReleaseAnalyzer<Q: ?Sized, D: ?Sized, R: ?Sized> {
    query: Arc<Q>,
    detail: Arc<D>,
    directory: Arc<R>,
    timeout: Duration,
}

impl<S> ReleaseAnalyzer<S, S, S>
where
    S: WorkItemQuery + WorkItemDetail + RepositoryDirectory + 'static,
{
    /// Analyzer backed by one client that implements every port.
    #[must_use]
    pub fn new(services: Arc<S>) -> Self {
        Self::from_parts(Arc::clone(&services), Arc::clone(&services), services)
    }
}

impl<Q, D, R> ReleaseAnalyzer<Q, D, R>
where
    Q: WorkItemQuery + ?Sized,
    D: WorkItemDetail + 'static,
    R: RepositoryDirectory + ?Sized,
{
    #[must_use]
    pub fn from_parts(query: Arc<Q>, detail: Arc<D>, directory: Arc<R>) -> Self {
        Self {
            query,
            detail,
            directory,
            timeout: ANALYSIS_TIMEOUT,
        }
    }

    /// Replace the default [`ANALYSIS_TIMEOUT`].
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Analyze and fold any failure into the `{"error": ...}` outcome.
    pub async fn analyze_release(
        &self,
        work_item_ids: Option<&str>,
        wiql_query: Option<&str>,
    ) -> AnalysisOutcome {
        self.try_analyze_release(work_item_ids, wiql_query)
            .await
            .into()
    }

    /// Analyze which repositories the given work items touch.
    ///
    /// `wiql_query`, when non-blank, overrides `work_item_ids`.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::InvalidWorkItemId`] / [`AnalysisError::Query`] from resolution
    /// - [`AnalysisError::NoWorkItems`] when resolution yields nothing
    /// - [`AnalysisError::ServicesUnreachable`] when no work item could be
    ///   fetched and the repository directory failed as well
    /// - [`AnalysisError::Timeout`] when the time budget runs out; no partial
    ///   manifest is produced and outstanding fetches are aborted
    #[tracing::instrument(skip(self))]
    pub async fn try_analyze_release(
        &self,
        work_item_ids: Option<&str>,
        wiql_query: Option<&str>,
    ) -> Result<ReleaseManifest, AnalysisError> {
        tokio::time::timeout(self.timeout, self.run(work_item_ids, wiql_query))
            .await
            .map_err(|_| AnalysisError::Timeout {
                budget: self.timeout,
            })?
    }

    async fn run(
        &self,
        work_item_ids: Option<&str>,
        wiql_query: Option<&str>,
    ) -> Result<ReleaseManifest, AnalysisError> {
        let ids = resolve_work_item_ids(self.query.as_ref(), work_item_ids, wiql_query).await?;
        if ids.is_empty() {
            return Err(AnalysisError::NoWorkItems);
        }

        let (records, repo_map) = tokio::join!(
            fetch_work_items(Arc::clone(&self.detail), &ids),
            try_fetch_repo_map(self.directory.as_ref()),
        );

        if repo_map.is_err() && records.is_empty() {
            return Err(AnalysisError::ServicesUnreachable);
        }
        let repo_map = names_or_empty(repo_map);

        let manifest = aggregate(&ids, &records, &repo_map);
        tracing::info!(
            work_items = manifest.total_work_items,
            fetched = records.len(),
            repositories = manifest.total_repositories,
            unlinked = manifest.unlinked_work_items.len(),
            "release analysis complete"
        );
        Ok(manifest)
    }
}
