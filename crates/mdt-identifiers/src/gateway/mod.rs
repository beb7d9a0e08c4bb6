//! Verification gateway shared by every scheme
//!
//! Both operations gate on the caller's validator first: an identifier that
//! fails validation never reaches the network. A valid identifier costs
//! exactly one GET.

pub mod client;

pub use client::HttpClient;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {message}")]
    RequestFailed { message: String },
    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String },
    #[error("Timeout")]
    Timeout,
    #[error("Failed to read response body: {message}")]
    Body { message: String },
    #[error("Failed to create HTTP client: {message}")]
    ClientBuild { message: String },
}

impl From<reqwest::Error> for HttpError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            HttpError::Timeout
        } else {
            HttpError::RequestFailed {
                message: e.to_string(),
            }
        }
    }
}

/// Confirm that `identifier` exists by fetching `url`.
///
/// Returns `Ok(false)` without any request when `validate` rejects the
/// identifier, `Ok(true)` for a 2xx response and `Ok(false)` for any other
/// status. Transport failures are returned as `Err`.
pub async fn verify_identifier<F>(
    client: &HttpClient,
    identifier: &str,
    url: &str,
    validate: F,
) -> Result<bool, HttpError>
where
    F: Fn(&str) -> bool,
{
    if !validate(identifier) {
        debug!(identifier, "failed validation, skipping lookup");
        return Ok(false);
    }
    client.exists(url).await
}

/// Fetch the JSON record for `identifier` from `url`.
///
/// Same gating as [`verify_identifier`]. A non-2xx status or a body that
/// does not parse as JSON yields `Ok(None)`.
pub async fn get_object<F>(
    client: &HttpClient,
    identifier: &str,
    url: &str,
    validate: F,
) -> Result<Option<Value>, HttpError>
where
    F: Fn(&str) -> bool,
{
    if !validate(identifier) {
        debug!(identifier, "failed validation, skipping lookup");
        return Ok(None);
    }
    client.get_json(url).await
}
