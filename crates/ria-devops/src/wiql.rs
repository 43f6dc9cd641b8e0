//! WIQL query endpoint.

use async_trait::async_trait;
use ria_core::{WorkItemId, WorkItemQuery};
use serde::Deserialize;

use crate::{
    DevOpsClient,
    error::DevOpsError,
    http::{check_response, read_json},
};

#[derive(Deserialize)]
struct WiqlResponse {
    #[serde(default, rename = "workItems")]
    work_items: Vec<WiqlWorkItem>,
}

#[derive(Deserialize)]
struct WiqlWorkItem {
    id: WorkItemId,
}

impl DevOpsClient {
    /// Run a WIQL query and return matching IDs in service order.
    ///
    /// A response without a `workItems` array (e.g. a link query) yields an
    /// empty list.
    ///
    /// # Errors
    ///
    /// Returns [`DevOpsError`] if the HTTP request fails, the service
    /// returns a non-success status, or the response cannot be parsed.
    pub async fn query_work_item_ids(&self, query: &str) -> Result<Vec<WorkItemId>, DevOpsError> {
        let url = self.api_url("wit/wiql", "");
        let body = serde_json::json!({ "query": query });
        let resp = check_response(self.http.post(&url).json(&body).send().await?).await?;

        let data: WiqlResponse = read_json(resp).await?;
        tracing::debug!(count = data.work_items.len(), "wiql query returned work items");
        Ok(data.work_items.into_iter().map(|item| item.id).collect())
    }
}

#[async_trait]
impl WorkItemQuery for DevOpsClient {
    type Error = DevOpsError;

    async fn query_ids(&self, query: &str) -> Result<Vec<WorkItemId>, Self::Error> {
        self.query_work_item_ids(query).await
    }
}
