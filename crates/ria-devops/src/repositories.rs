//! Git repository directory endpoint.

use async_trait::async_trait;
use ria_core::{RepositoryDirectory, RepositoryInfo};
use serde::Deserialize;

use crate::{
    DevOpsClient,
    error::DevOpsError,
    http::{check_response, read_json},
};

#[derive(Deserialize)]
struct RepositoryList {
    #[serde(default)]
    value: Vec<RepositoryInfo>,
}

impl DevOpsClient {
    /// List every git repository in the project.
    ///
    /// # Errors
    ///
    /// Returns [`DevOpsError`] if the HTTP request fails, the service
    /// returns a non-success status, or the response cannot be parsed.
    pub async fn list_repositories(&self) -> Result<Vec<RepositoryInfo>, DevOpsError> {
        let url = self.api_url("git/repositories", "");
        let resp = check_response(self.http.get(&url).send().await?).await?;

        let data: RepositoryList = read_json(resp).await?;
        tracing::debug!(count = data.value.len(), "listed repositories");
        Ok(data.value)
    }
}

#[async_trait]
impl RepositoryDirectory for DevOpsClient {
    type Error = DevOpsError;

    async fn repositories(&self) -> Result<Vec<RepositoryInfo>, Self::Error> {
        self.list_repositories().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "value": [
            {
                "id": "9c7d1e02-55aa-4c31-9b1f-2f1b3f0c8a10",
                "name": "checkout-service",
                "url": "https://dev.azure.com/contoso/shop/_apis/git/repositories/9c7d1e02-55aa-4c31-9b1f-2f1b3f0c8a10",
                "project": { "id": "5b0a4f2e", "name": "shop" },
                "defaultBranch": "refs/heads/main",
                "size": 1048576
            },
            {
                "id": "1e2f3a4b-0000-4c31-9b1f-2f1b3f0c8a11",
                "name": "payments-api",
                "isDisabled": false
            }
        ],
        "count": 2
    }"#;

    #[test]
    fn parse_repository_list() {
        let data: RepositoryList = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(data.value.len(), 2);
        assert_eq!(data.value[0].name, "checkout-service");
        assert_eq!(data.value[1].id, "1e2f3a4b-0000-4c31-9b1f-2f1b3f0c8a11");
    }

    #[test]
    fn missing_value_is_empty() {
        let data: RepositoryList = serde_json::from_str(r#"{"count": 0}"#).unwrap();
        assert!(data.value.is_empty());
    }
}
