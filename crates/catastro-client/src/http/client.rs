//! Shared request pipeline
//!
//! Every feature call funnels through [`ApiClient`]: the request is stamped
//! with timing metadata, dispatched, and its outcome either finalized
//! (success) or classified into the error taxonomy (failure). A 401 response
//! additionally broadcasts a session-expiry event before the error reaches
//! the caller.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client as ReqwestClient, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, warn};
use url::Url;

use crate::error::{Error, Result};
use crate::events::SessionEvents;
use crate::http::{RequestMetrics, TransportConfig};

/// Per-call overrides and custom metadata
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Extra headers merged over the defaults
    pub headers: Vec<(String, String)>,
    /// Query string parameters
    pub query: Vec<(String, String)>,
    /// Timeout override for this call only
    pub timeout: Option<Duration>,
    /// Custom fields carried on the request's metrics record
    pub metadata: HashMap<String, Value>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header for this call
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add a query string parameter
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Override the timeout for this call
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Attach a custom field to the request's metrics record
    pub fn metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

/// A successful response: status, raw JSON body, and (when enabled) the
/// request's timing metrics as a side channel
#[derive(Debug)]
pub struct ApiResponse {
    status: u16,
    body: Value,
    metrics: Option<RequestMetrics>,
}

impl ApiResponse {
    /// HTTP status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Raw JSON body as received from the backend
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Consume the response, yielding the raw body
    pub fn into_body(self) -> Value {
        self.body
    }

    /// Deserialize the body into a typed shape
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.body.clone())
            .map_err(|e| Error::configuration("failed to decode response body", e))
    }

    /// Timing metrics, present only when `attach_debug_metrics` is set
    pub fn metrics(&self) -> Option<&RequestMetrics> {
        self.metrics.as_ref()
    }
}

/// Shared HTTP client for all backend calls
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: ReqwestClient,
    config: TransportConfig,
    events: SessionEvents,
}

impl ApiClient {
    /// Create a client from a configuration and a session event bus.
    ///
    /// The bus is injected rather than ambient so tests and applications can
    /// subscribe their own listeners.
    pub fn new(config: TransportConfig, events: SessionEvents) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = ReqwestClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .cookie_store(config.forward_credentials)
            .default_headers(headers)
            .build()
            .map_err(|e| Error::configuration("failed to build HTTP client", e))?;

        Ok(Self {
            http,
            config,
            events,
        })
    }

    /// Create a client from environment-sourced configuration
    pub fn from_env(events: SessionEvents) -> Result<Self> {
        Self::new(TransportConfig::from_env(), events)
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// The session event bus this client emits on
    pub fn events(&self) -> &SessionEvents {
        &self.events
    }

    /// GET a path relative to the API root
    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.request(Method::GET, path, None, RequestOptions::default())
            .await
    }

    /// POST a JSON body to a path relative to the API root
    pub async fn post(&self, path: &str, body: &Value) -> Result<ApiResponse> {
        self.request(Method::POST, path, Some(body), RequestOptions::default())
            .await
    }

    /// PUT a JSON body to a path relative to the API root
    pub async fn put(&self, path: &str, body: &Value) -> Result<ApiResponse> {
        self.request(Method::PUT, path, Some(body), RequestOptions::default())
            .await
    }

    /// PATCH a path with a JSON body
    pub async fn patch(&self, path: &str, body: &Value) -> Result<ApiResponse> {
        self.request(Method::PATCH, path, Some(body), RequestOptions::default())
            .await
    }

    /// DELETE a path relative to the API root
    pub async fn delete(&self, path: &str) -> Result<ApiResponse> {
        self.request(Method::DELETE, path, None, RequestOptions::default())
            .await
    }

    /// Full pipeline entry point with per-call overrides.
    ///
    /// Stamps metrics, dispatches, and returns either the response with the
    /// body passed through untouched or a classified [`Error`]. Failures
    /// where the request never left the process keep the underlying error in
    /// the source chain instead of being reshaped.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        options: RequestOptions,
    ) -> Result<ApiResponse> {
        let url = self.endpoint_url(path)?;
        let mut metrics = RequestMetrics::start_with(options.metadata);

        if self.config.debug_logging {
            debug!(
                method = %method,
                url = %url,
                body = body.map(|b| b.to_string()).as_deref().unwrap_or("-"),
                "dispatching request"
            );
        }

        let mut builder = self.http.request(method, url.clone());
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        for (name, value) in &options.headers {
            builder = builder.header(name, value);
        }
        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        match builder.send().await {
            Ok(response) if TransportConfig::is_success(response.status().as_u16()) => {
                metrics.finish();
                let status = response.status().as_u16();
                let text = response.text().await.unwrap_or_default();
                let body = serde_json::from_str(&text).unwrap_or(Value::Null);

                if self.config.debug_logging {
                    debug!(
                        status,
                        url = %url,
                        duration_ms = metrics.duration_ms(),
                        body = %body,
                        "request completed"
                    );
                }

                Ok(ApiResponse {
                    status,
                    body,
                    metrics: self.config.attach_debug_metrics.then_some(metrics),
                })
            }
            Ok(response) => {
                metrics.finish();
                let error = Error::from_response(response).await;
                self.observe_failure(&error, &url, &metrics);
                if error.status() == Some(401) {
                    self.events.emit_expired();
                }
                Err(error)
            }
            Err(transport) => {
                metrics.finish();
                if self.config.debug_logging {
                    debug!(
                        url = %url,
                        duration_ms = metrics.duration_ms(),
                        error = %transport,
                        "request failed before a response was received"
                    );
                }
                Err(Error::from_transport(transport))
            }
        }
    }

    /// Build the absolute URL for a path under `{base_url}/{api_version}/`
    fn endpoint_url(&self, path: &str) -> Result<Url> {
        let joined = format!(
            "{}/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.api_version.trim_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined)
            .map_err(|e| Error::configuration(format!("invalid request URL: {}", joined), e))
    }

    /// Status-specific diagnostic observations. Purely observational: the
    /// classified error is identical regardless of which branch logs.
    fn observe_failure(&self, err: &Error, url: &Url, metrics: &RequestMetrics) {
        match err.status() {
            Some(401) => warn!(url = %url, "session no longer valid"),
            Some(403) => warn!(url = %url, "permission denied"),
            Some(404) => debug!(url = %url, "resource not found"),
            Some(422) => warn!(
                url = %url,
                payload = %err.data().unwrap_or(&serde_json::Value::Null),
                "validation rejected by backend"
            ),
            Some(500) => error!(url = %url, "backend internal error"),
            Some(status) => warn!(url = %url, status, "request rejected"),
            None => {}
        }

        if self.config.debug_logging {
            debug!(
                url = %url,
                duration_ms = metrics.duration_ms(),
                error = %err,
                data = %err.data().unwrap_or(&serde_json::Value::Null),
                "request failed"
            );
        }
    }
}
