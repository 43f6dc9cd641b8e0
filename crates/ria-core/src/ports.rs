//! Port traits for the services an analysis reads from.
//!
//! `ria-devops` implements all three against the Azure DevOps REST API;
//! tests implement them in memory. Each port carries its own error type so
//! infrastructure errors reach the analyzer without being stringified.

use async_trait::async_trait;

use crate::ids::WorkItemId;
use crate::repository::RepositoryInfo;
use crate::work_item::WorkItemRecord;

/// Work tracking query service: runs a WIQL query.
#[async_trait]
pub trait WorkItemQuery: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// IDs matched by `query`, in the order the service returns them.
    async fn query_ids(&self, query: &str) -> Result<Vec<WorkItemId>, Self::Error>;
}

/// Work item detail service: one work item with its relations expanded.
#[async_trait]
pub trait WorkItemDetail: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn work_item(&self, id: WorkItemId) -> Result<WorkItemRecord, Self::Error>;
}

/// Source control directory service: every repository in the project.
#[async_trait]
pub trait RepositoryDirectory: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn repositories(&self) -> Result<Vec<RepositoryInfo>, Self::Error>;
}
