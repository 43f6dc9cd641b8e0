//! Status and body handling shared by every DevOps endpoint.

use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::DevOpsError;

const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Error document returned with most non-success responses.
#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

/// Turn a non-success response into a [`DevOpsError`].
///
/// A rejected PAT shows up either as 401/403 or as a 203 carrying the HTML
/// sign-in page; both become [`DevOpsError::InvalidCredentials`].
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, DevOpsError> {
    let status = resp.status();
    match status {
        StatusCode::NON_AUTHORITATIVE_INFORMATION
        | StatusCode::UNAUTHORIZED
        | StatusCode::FORBIDDEN => Err(DevOpsError::InvalidCredentials),
        StatusCode::TOO_MANY_REQUESTS => Err(DevOpsError::RateLimited {
            retry_after_secs: retry_after_secs(&resp),
        }),
        s if s.is_success() => Ok(resp),
        s => {
            let body = resp.text().await.unwrap_or_default();
            Err(DevOpsError::Api {
                status: s.as_u16(),
                message: error_message(body),
            })
        }
    }
}

/// Read a success body as `T`.
pub async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, DevOpsError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| DevOpsError::Parse(e.to_string()))
}

fn retry_after_secs(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

/// `message` from a JSON error document, or the raw body.
fn error_message(body: String) -> String {
    match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(doc) if !doc.message.is_empty() => doc.message,
        _ => body,
    }
}
