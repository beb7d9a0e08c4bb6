//! Native HTTP client using reqwest

use super::HttpError;
use reqwest::header::USER_AGENT;
use reqwest::{Client, Response, Url};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin wrapper over a shared reqwest client.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    pub fn new(user_agent: &str) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| HttpError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            user_agent: user_agent.to_string(),
        })
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    async fn send(&self, url: &str) -> Result<Response, HttpError> {
        let parsed = Url::parse(url).map_err(|_| HttpError::InvalidUrl {
            url: url.to_string(),
        })?;

        debug!(url = %parsed, "GET");
        self.client
            .get(parsed)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(HttpError::from)
    }

    /// GET `url` and report whether the status was 2xx.
    ///
    /// The body is read chunk by chunk and dropped so the connection can go
    /// back to the pool without buffering the payload.
    pub async fn exists(&self, url: &str) -> Result<bool, HttpError> {
        let mut response = self.send(url).await?;
        let status = response.status();
        debug!(url, status = status.as_u16(), "registry responded");

        while let Ok(Some(_)) = response.chunk().await {}

        Ok(status.is_success())
    }

    /// GET `url` and parse a 2xx body as JSON.
    ///
    /// Non-2xx statuses and bodies that are not JSON yield `Ok(None)`.
    pub async fn get_json(&self, url: &str) -> Result<Option<Value>, HttpError> {
        let mut response = self.send(url).await?;
        let status = response.status();

        if !status.is_success() {
            debug!(url, status = status.as_u16(), "no object at registry");
            while let Ok(Some(_)) = response.chunk().await {}
            return Ok(None);
        }

        let body = response.text().await.map_err(|e| HttpError::Body {
            message: e.to_string(),
        })?;

        match serde_json::from_str(&body) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                debug!(url, error = %e, "registry body is not JSON");
                Ok(None)
            }
        }
    }
}
