//! Work item detail endpoint.

use async_trait::async_trait;
use ria_core::{WorkItemDetail, WorkItemId, WorkItemRecord};

use crate::{
    DevOpsClient,
    error::DevOpsError,
    http::{check_response, read_json},
};

impl DevOpsClient {
    /// Fetch one work item with its relations expanded.
    ///
    /// # Errors
    ///
    /// Returns [`DevOpsError`] if the HTTP request fails, the item does not
    /// exist, or the response cannot be parsed.
    pub async fn fetch_work_item(&self, id: WorkItemId) -> Result<WorkItemRecord, DevOpsError> {
        let url = self.api_url(&format!("wit/workitems/{id}"), "$expand=Relations");
        let resp = check_response(self.http.get(&url).send().await?).await?;
        read_json(resp).await
    }
}

#[async_trait]
impl WorkItemDetail for DevOpsClient {
    type Error = DevOpsError;

    async fn work_item(&self, id: WorkItemId) -> Result<WorkItemRecord, Self::Error> {
        self.fetch_work_item(id).await
    }
}
