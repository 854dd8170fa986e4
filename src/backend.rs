//! HTTP transport for the backend service.
//!
//! Every backend endpoint is a GET with query parameters returning a JSON
//! body, so the transport is a thin wrapper over a shared `reqwest::Client`:
//! one generic `get` plus the envelope success check the query interfaces
//! apply to decoded bodies.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::config;
use crate::error::{BearlyError, Result};

// ---------------------------------------------------------------------------
// Backend
// ---------------------------------------------------------------------------

/// Shared HTTP transport for all query interfaces.
#[derive(Debug, Clone)]
pub struct Backend {
    client: reqwest::Client,
    base_url: String,
}

impl Backend {
    pub(crate) fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Backend> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Backend {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Issue a GET with the given query pairs and decode the JSON body.
    ///
    /// Transport failures become [`BearlyError::Network`], non-2xx statuses
    /// become [`BearlyError::Rejected`], and an undecodable body becomes
    /// [`BearlyError::Json`].
    pub(crate) async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!(%url, "backend request");
        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            error!(%status, %body, "backend request failed");
            return Err(BearlyError::Rejected(format!(
                "{path} returned status {status}"
            )));
        }
        Ok(serde_json::from_str(&body)?)
    }
}

// ---------------------------------------------------------------------------
// Envelope check
// ---------------------------------------------------------------------------

/// Enforce the `response_type == "success"` discriminator on a decoded body.
pub(crate) fn ensure_success(op: &str, response_type: &str, error: Option<&str>) -> Result<()> {
    if response_type == config::RESPONSE_SUCCESS {
        return Ok(());
    }
    let reason = match error {
        Some(message) => message.to_string(),
        None => format!("response_type was {response_type:?}"),
    };
    warn!(op, %reason, "backend rejected request");
    Err(BearlyError::Rejected(format!("{op}: {reason}")))
}
