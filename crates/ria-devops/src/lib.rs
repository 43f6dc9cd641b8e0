//! # ria-devops
//!
//! Azure DevOps REST client for the release impact analyzer.
//!
//! Implements the three `ria-core` ports against a single project:
//! - [`WorkItemQuery`](ria_core::WorkItemQuery): `POST _apis/wit/wiql`
//! - [`WorkItemDetail`](ria_core::WorkItemDetail): `GET _apis/wit/workitems/{id}?$expand=Relations`
//! - [`RepositoryDirectory`](ria_core::RepositoryDirectory): `GET _apis/git/repositories`
//!
//! Authentication is HTTP Basic with an empty user and the personal access
//! token as password. No retries happen here; callers decide how to degrade.

pub mod repositories;
pub mod wiql;
pub mod work_items;

mod error;
mod http;

pub use error::DevOpsError;

use std::time::Duration;

use base64::Engine as _;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use ria_config::DevOpsConfig;

/// HTTP client bound to one Azure DevOps project.
#[derive(Clone)]
pub struct DevOpsClient {
    http: reqwest::Client,
    project_url: String,
    api_version: String,
}

impl DevOpsClient {
    /// Build a client from the `[devops]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`DevOpsError::InvalidCredentials`] if no PAT is configured and
    /// [`DevOpsError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &DevOpsConfig) -> Result<Self, DevOpsError> {
        if config.pat.is_empty() {
            return Err(DevOpsError::InvalidCredentials);
        }

        let credentials =
            base64::engine::general_purpose::STANDARD.encode(format!(":{}", config.pat));
        let mut auth = HeaderValue::from_str(&format!("Basic {credentials}"))
            .map_err(|_| DevOpsError::InvalidCredentials)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .user_agent(concat!("ria/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            project_url: config.project_url(),
            api_version: config.api_version.clone(),
        })
    }

    /// Project-scoped API URL for `path` with `api-version` appended.
    ///
    /// `query` holds extra parameters without leading `?` or `&`.
    fn api_url(&self, path: &str, query: &str) -> String {
        let separator = if query.is_empty() { "" } else { "&" };
        format!(
            "{}/_apis/{path}?{query}{separator}api-version={}",
            self.project_url,
            urlencoding::encode(&self.api_version)
        )
    }
}
