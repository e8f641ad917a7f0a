//! Openpay HTTP client and request pipeline.

use std::fmt;
use std::time::Duration;

use openpay_core::ApiError;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::charges::Charges;
use crate::config::ClientOptions;
use crate::customers::Customers;
use crate::error::{OpenpayError, Result};
use crate::webhooks::Webhooks;

/// Openpay API client.
///
/// Holds the credentials and a pooled HTTP transport. Cloning is cheap and
/// clones share the same connection pool.
#[derive(Clone)]
pub struct OpenpayClient {
    client: Client,
    api_key: String,
    merchant_id: String,
    api_version: String,
    api_endpoint: String,
}

impl fmt::Debug for OpenpayClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenpayClient")
            .field("merchant_id", &self.merchant_id)
            .field("api_version", &self.api_version)
            .field("api_endpoint", &self.api_endpoint)
            .finish_non_exhaustive()
    }
}

impl OpenpayClient {
    /// Create a new Openpay client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Private API key (`sk_...`)
    /// * `merchant_id` - Merchant identifier scoping every call
    /// * `options` - Client options, `None` for the defaults
    ///
    /// # Errors
    ///
    /// Returns [`OpenpayError::Configuration`] if the API key or merchant ID
    /// is empty, if the timeout or keep-alive is zero, or if the HTTP
    /// transport cannot be built.
    pub fn new(
        api_key: impl Into<String>,
        merchant_id: impl Into<String>,
        options: Option<ClientOptions>,
    ) -> Result<Self> {
        let options = options.unwrap_or_default();
        let endpoint = options.environment().base_url();
        Self::build(api_key.into(), merchant_id.into(), &options, endpoint, true)
    }

    /// Create a client from `OPENPAY_API_KEY`, `OPENPAY_MERCHANT_ID` and the
    /// variables read by [`ClientOptions::from_env`].
    ///
    /// # Errors
    ///
    /// Returns [`OpenpayError::Configuration`] if either credential is unset
    /// or empty.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENPAY_API_KEY").unwrap_or_default();
        let merchant_id = std::env::var("OPENPAY_MERCHANT_ID").unwrap_or_default();
        Self::new(api_key, merchant_id, Some(ClientOptions::from_env()))
    }

    /// Client against an arbitrary base URL, plain HTTP allowed.
    #[cfg(test)]
    pub(crate) fn with_endpoint(
        api_key: impl Into<String>,
        merchant_id: impl Into<String>,
        options: ClientOptions,
        endpoint: &str,
    ) -> Result<Self> {
        let endpoint = format!("{}/", endpoint.trim_end_matches('/'));
        Self::build(api_key.into(), merchant_id.into(), &options, &endpoint, false)
    }

    fn build(
        api_key: String,
        merchant_id: String,
        options: &ClientOptions,
        endpoint: &str,
        https_only: bool,
    ) -> Result<Self> {
        if api_key.is_empty() {
            return Err(OpenpayError::Configuration("API key is required".into()));
        }
        if merchant_id.is_empty() {
            return Err(OpenpayError::Configuration("merchant ID is required".into()));
        }
        if options.timeout_seconds == 0 {
            return Err(OpenpayError::Configuration(
                "timeout must be at least one second".into(),
            ));
        }
        if options.keep_alive_seconds == 0 {
            return Err(OpenpayError::Configuration(
                "keep-alive must be at least one second".into(),
            ));
        }

        let timeout = Duration::from_secs(options.timeout_seconds);
        let keep_alive = Duration::from_secs(options.keep_alive_seconds);

        let mut builder = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .tcp_keepalive(keep_alive)
            .pool_idle_timeout(keep_alive)
            .pool_max_idle_per_host(options.max_connections)
            .https_only(https_only);
        if !options.user_agent.is_empty() {
            builder = builder.user_agent(options.user_agent.clone());
        }

        let client = builder.build().map_err(|e| {
            OpenpayError::Configuration(format!("failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            api_key,
            merchant_id,
            api_version: options.api_version.clone(),
            api_endpoint: endpoint.to_string(),
        })
    }

    /// Merchant this client is scoped to.
    #[must_use]
    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }

    /// Customer, customer card and bank account operations.
    #[must_use]
    pub fn customers(&self) -> Customers<'_> {
        Customers::new(self)
    }

    /// Merchant-level card and charge operations.
    #[must_use]
    pub fn charges(&self) -> Charges<'_> {
        Charges::new(self)
    }

    /// Webhook subscription operations.
    #[must_use]
    pub fn webhooks(&self) -> Webhooks<'_> {
        Webhooks::new(self)
    }

    /// Full URL of a merchant-scoped path.
    pub(crate) fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}{}",
            self.api_endpoint,
            path_join(&[&self.api_version, &self.merchant_id, path])
        )
    }

    /// Dispatch a single request and return the raw body of a successful
    /// response.
    ///
    /// The response body is read to completion on every path so the
    /// connection goes back to the pool.
    pub(crate) async fn request(&self, options: RequestOptions) -> Result<Vec<u8>> {
        let url = self.endpoint_url(&options.endpoint);

        let mut builder = self
            .client
            .request(options.method.clone(), &url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .basic_auth(&self.api_key, Option::<&str>::None);
        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }
        if let Some(body) = options.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        tracing::debug!(
            method = %options.method,
            endpoint = %options.endpoint,
            status = status.as_u16(),
            "Openpay request completed"
        );

        if status.as_u16() >= 400 {
            let error = ApiError::from_body(&body);
            tracing::warn!(
                status = status.as_u16(),
                error_code = error.error_code,
                category = %error.category,
                request_id = error.request_id.as_deref().unwrap_or_default(),
                "Openpay API error"
            );
            return Err(OpenpayError::Api {
                status: status.as_u16(),
                error,
            });
        }

        Ok(body.to_vec())
    }

    /// Dispatch a request and decode the body into a new value.
    pub(crate) async fn request_json<T: DeserializeOwned>(
        &self,
        options: RequestOptions,
    ) -> Result<T> {
        let body = self.request(options).await?;
        serde_json::from_slice(&body).map_err(OpenpayError::Decode)
    }

    /// Dispatch a request and decode the body into `target`.
    pub(crate) async fn request_into<T>(&self, options: RequestOptions, target: &mut T) -> Result<()>
    where
        T: Serialize + DeserializeOwned,
    {
        let body = self.request(options).await?;
        decode_into(&body, target)
    }
}

/// A request before it is bound to a client.
#[derive(Debug)]
pub(crate) struct RequestOptions {
    method: Method,
    endpoint: String,
    body: Option<Vec<u8>>,
    query: Vec<(String, String)>,
}

impl RequestOptions {
    pub(crate) fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            body: None,
            query: Vec::new(),
        }
    }

    pub(crate) fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::GET, endpoint)
    }

    pub(crate) fn post(endpoint: impl Into<String>) -> Self {
        Self::new(Method::POST, endpoint)
    }

    pub(crate) fn put(endpoint: impl Into<String>) -> Self {
        Self::new(Method::PUT, endpoint)
    }

    pub(crate) fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(Method::DELETE, endpoint)
    }

    /// Attach a JSON body.
    pub(crate) fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_vec(body).map_err(OpenpayError::Serialization)?);
        Ok(self)
    }

    /// Attach the top-level fields of `filters` as query parameters. Unset
    /// fields are skipped.
    pub(crate) fn query<T: Serialize + ?Sized>(mut self, filters: &T) -> Result<Self> {
        let value = serde_json::to_value(filters).map_err(OpenpayError::Serialization)?;
        if let Value::Object(fields) = value {
            for (key, value) in fields {
                let value = match value {
                    Value::Null => continue,
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                self.query.push((key, value));
            }
        }
        Ok(self)
    }
}

/// Join path fragments with `/`, dropping empty segments so the result has
/// no leading, trailing or doubled separators.
pub(crate) fn path_join(parts: &[&str]) -> String {
    parts
        .iter()
        .flat_map(|part| part.split('/'))
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Overlay a JSON response onto an existing value.
///
/// Object fields present in the response replace the caller's fields,
/// nested objects merge recursively, and fields that are absent or `null`
/// in the response keep the caller's value. `target` is only written once
/// the merged value has decoded successfully.
fn decode_into<T>(body: &[u8], target: &mut T) -> Result<()>
where
    T: Serialize + DeserializeOwned,
{
    let update: Value = serde_json::from_slice(body).map_err(OpenpayError::Decode)?;
    let mut merged = serde_json::to_value(&*target).map_err(OpenpayError::Serialization)?;
    merge_json(&mut merged, update);
    *target = serde_json::from_value(merged).map_err(OpenpayError::Decode)?;
    Ok(())
}

fn merge_json(base: &mut Value, update: Value) {
    match (base, update) {
        (_, Value::Null) => {}
        (Value::Object(base), Value::Object(update)) => {
            for (key, value) in update {
                match base.get_mut(&key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        if !value.is_null() {
                            base.insert(key, value);
                        }
                    }
                }
            }
        }
        (base, update) => *base = update,
    }
}
