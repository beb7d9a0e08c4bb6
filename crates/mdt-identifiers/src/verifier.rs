//! Registry-backed verification for any scheme
//!
//! [`Verifier`] ties the HTTP client to the configured endpoints and runs
//! the gateway operations for a scheme. At this level a transport failure is
//! indistinguishable from "not found": both report `false` / `None`.
//! Callers that need the difference use [`Verifier::try_verify`].

use crate::config::{Endpoints, MdtConfig};
use crate::gateway::{self, HttpClient, HttpError};
use crate::registry::{IdentifierScheme, SchemeKind};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("verification is not available for {scheme}")]
    Unsupported { scheme: SchemeKind },
    #[error(transparent)]
    Http(#[from] HttpError),
}

#[derive(Clone, Debug)]
pub struct Verifier {
    http: HttpClient,
    endpoints: Endpoints,
}

impl Verifier {
    pub fn new(config: &MdtConfig) -> Result<Self, HttpError> {
        Ok(Self {
            http: HttpClient::new(&config.user_agent)?,
            endpoints: config.endpoints.clone(),
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Check the identifier against its registry, surfacing transport errors.
    pub async fn try_verify(
        &self,
        scheme: &dyn IdentifierScheme,
        raw: &str,
    ) -> Result<bool, VerifyError> {
        let normalized = scheme.normalize(raw);
        let url = scheme
            .verify_target(&normalized, &self.endpoints)
            .ok_or(VerifyError::Unsupported {
                scheme: scheme.kind(),
            })?;

        let found =
            gateway::verify_identifier(&self.http, raw, &url, |id| scheme.validate(id)).await?;
        Ok(found)
    }

    /// Check the identifier against its registry.
    ///
    /// Only an unsupported scheme is an error; network failures read as
    /// `Ok(false)`.
    pub async fn verify(
        &self,
        scheme: &dyn IdentifierScheme,
        raw: &str,
    ) -> Result<bool, VerifyError> {
        match self.try_verify(scheme, raw).await {
            Err(VerifyError::Http(e)) => {
                warn!(scheme = %scheme.kind(), identifier = raw, error = %e, "verification request failed");
                Ok(false)
            }
            other => other,
        }
    }

    /// Retrieve the identifier's JSON record.
    ///
    /// Targets are tried in order until one yields an object, so a scheme
    /// with a fallback registry costs at most one extra request.
    pub async fn get_object(
        &self,
        scheme: &dyn IdentifierScheme,
        raw: &str,
    ) -> Result<Option<Value>, VerifyError> {
        let normalized = scheme.normalize(raw);
        let targets = scheme.object_targets(&normalized, &self.endpoints);
        if targets.is_empty() {
            return Err(VerifyError::Unsupported {
                scheme: scheme.kind(),
            });
        }

        for url in targets {
            match gateway::get_object(&self.http, raw, &url, |id| scheme.validate(id)).await {
                Ok(Some(obj)) => return Ok(Some(obj)),
                Ok(None) => {}
                Err(e) => {
                    warn!(scheme = %scheme.kind(), url = %url, error = %e, "object request failed");
                }
            }
        }
        Ok(None)
    }

    /// `verify` for schemes known to have a registry.
    pub(crate) async fn verify_or_false(&self, scheme: &dyn IdentifierScheme, raw: &str) -> bool {
        self.verify(scheme, raw).await.unwrap_or(false)
    }

    /// `get_object` for schemes known to offer records.
    pub(crate) async fn object_or_none(
        &self,
        scheme: &dyn IdentifierScheme,
        raw: &str,
    ) -> Option<Value> {
        self.get_object(scheme, raw).await.ok().flatten()
    }
}
