//! HTTP client for the spreadsheet API.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use stockroom_core::{Domain, NewProduct};
use tracing::{debug, error, instrument};
use url::Url;

use super::envelope::Envelope;
use super::error::{ApiError, UNKNOWN_API_ERROR};
use crate::config::SheetsConfig;

/// Action used when the caller does not name one.
pub const DEFAULT_ACTION: &str = "read";

/// Spreadsheet API client.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct SheetsClient {
    inner: Arc<SheetsClientInner>,
}

struct SheetsClientInner {
    client: reqwest::Client,
    /// Deployment URL. Contains the deployment key, never logged.
    base_url: Url,
}

impl std::fmt::Debug for SheetsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetsClient")
            .field("base_url", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl SheetsClient {
    /// Create a client for the configured deployment.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the URL is malformed or the HTTP
    /// client cannot be built.
    pub fn new(config: &SheetsConfig) -> Result<Self, ApiError> {
        let base_url = config
            .base_url()
            .map_err(|e| ApiError::Transport(format!("Invalid API URL: {e}")))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            inner: Arc::new(SheetsClientInner { client, base_url }),
        })
    }

    /// Query URL for an endpoint/action pair plus extra parameters.
    ///
    /// Parameters already present on the base URL are kept.
    #[must_use]
    pub fn request_url(&self, endpoint: &str, action: &str, params: &[(&str, &str)]) -> Url {
        let mut url = self.inner.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("endpoint", endpoint);
            query.append_pair("action", action);
            for (key, value) in params {
                query.append_pair(key, value);
            }
        }
        url
    }

    /// Issue a query and unwrap the response envelope.
    ///
    /// # Errors
    ///
    /// - `ApiError::Transport` if the request fails or the status is not 2xx
    /// - `ApiError::Decode` if the body is not an envelope
    /// - `ApiError::Api` if the envelope reports failure
    #[instrument(skip(self, params))]
    pub async fn call(
        &self,
        endpoint: &str,
        action: &str,
        params: &[(&str, &str)],
    ) -> Result<Value, ApiError> {
        let result = self.send(endpoint, action, params).await;
        if let Err(e) = &result {
            error!(endpoint, action, "API Error: {e}");
        }
        result
    }

    async fn send(
        &self,
        endpoint: &str,
        action: &str,
        params: &[(&str, &str)],
    ) -> Result<Value, ApiError> {
        let url = self.request_url(endpoint, action, params);

        let response = self
            .inner
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::request(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::status(status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::request(&e))?;
        debug!(bytes = body.len(), "API response received");

        let envelope: Envelope =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        envelope.into_data()
    }

    /// Read every row of a domain.
    ///
    /// Returns `Ok(None)` when the API succeeds without data.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or `data` does not decode as `T`.
    pub async fn read<T: DeserializeOwned>(&self, domain: Domain) -> Result<Option<T>, ApiError> {
        let data = self.call(domain.endpoint(), DEFAULT_ACTION, &[]).await?;
        if data.is_null() {
            return Ok(None);
        }
        serde_json::from_value(data)
            .map(Some)
            .map_err(|e| {
                let err = ApiError::Decode(e.to_string());
                error!(endpoint = domain.endpoint(), "API Error: {err}");
                err
            })
    }

    /// Append a product row through the `inventory`/`create` action.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the script reports that the
    /// row was not written.
    pub async fn create_product(&self, product: &NewProduct) -> Result<(), ApiError> {
        let data = self
            .call(Domain::Inventory.endpoint(), "create", &product.params())
            .await?;
        check_write(&data)
    }
}

/// Interpret the `data` of a write action.
///
/// The script answers writes with `data: {success, message?, error?}`.
/// Only an object with `success: true` means the row was written.
fn check_write(data: &Value) -> Result<(), ApiError> {
    let Value::Object(map) = data else {
        return Err(ApiError::Api(UNKNOWN_API_ERROR.to_string()));
    };
    if map.get("success") == Some(&Value::Bool(true)) {
        return Ok(());
    }

    let message = ["error", "message"]
        .iter()
        .find_map(|key| map.get(*key).and_then(Value::as_str))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or(UNKNOWN_API_ERROR);
    Err(ApiError::Api(message.to_string()))
}
