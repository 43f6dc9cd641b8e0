//! Azure DevOps connection configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_api_version() -> String {
    String::from("7.1")
}

const fn default_request_timeout_secs() -> u64 {
    30
}

#[derive(Clone, Deserialize, Serialize)]
pub struct DevOpsConfig {
    /// Organization slug, as in `https://dev.azure.com/{organization}`.
    #[serde(default)]
    pub organization: String,

    /// Project name or ID.
    #[serde(default)]
    pub project: String,

    /// Personal access token used for Basic authentication.
    #[serde(default)]
    pub pat: String,

    /// REST API version sent as `api-version`.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Overrides the project URL derived from organization and project
    /// (e.g. an on-premises collection). Empty means derive it.
    #[serde(default)]
    pub base_url: String,

    /// Timeout applied to each individual HTTP request.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for DevOpsConfig {
    fn default() -> Self {
        Self {
            organization: String::new(),
            project: String::new(),
            pat: String::new(),
            api_version: default_api_version(),
            base_url: String::new(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

// Hand-written so the PAT never ends up in logs.
impl std::fmt::Debug for DevOpsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DevOpsConfig")
            .field("organization", &self.organization)
            .field("project", &self.project)
            .field("pat", &if self.pat.is_empty() { "" } else { "***" })
            .field("api_version", &self.api_version)
            .field("base_url", &self.base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl DevOpsConfig {
    /// Keys that still need a value before a project can be reached.
    fn missing_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.pat.is_empty() {
            missing.push("pat");
        }
        if self.base_url.is_empty() {
            if self.organization.is_empty() {
                missing.push("organization");
            }
            if self.project.is_empty() {
                missing.push("project");
            }
        }
        missing
    }

    /// A pat plus either `base_url` or organization and project.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.missing_keys().is_empty()
    }

    /// Project-scoped base URL without a trailing slash.
    #[must_use]
    pub fn project_url(&self) -> String {
        if self.base_url.is_empty() {
            format!(
                "https://dev.azure.com/{}/{}",
                self.organization, self.project
            )
        } else {
            self.base_url.trim_end_matches('/').to_string()
        }
    }

    /// Fail with a precise error if the section cannot be used.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NotConfigured`] when required fields are missing,
    /// [`ConfigError::InvalidValue`] for a zero request timeout or a
    /// `base_url` that is not http(s).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let missing = self.missing_keys();
        if !missing.is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "devops",
                missing: missing.join(", "),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "devops.request_timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        let url = &self.base_url;
        if !url.is_empty() && !url.starts_with("https://") && !url.starts_with("http://") {
            return Err(ConfigError::InvalidValue {
                field: "devops.base_url",
                reason: format!("expected an http(s) URL, got '{url}'"),
            });
        }
        Ok(())
    }
}
