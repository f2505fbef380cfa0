//! `HttpTransport` - single-attempt HTTP transport.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use serde::Deserialize;
use tracing::instrument;
use url::Url;

use crate::error::TransportError;

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default User-Agent.
const DEFAULT_USER_AGENT: &str = concat!("cinescope/", env!("CARGO_PKG_VERSION"));

/// TMDB error body (`{"status_code":7,"status_message":"...","success":false}`).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TmdbErrorResponse {
    /// TMDB internal status code.
    #[serde(default)]
    pub status_code: i32,
    /// Human-readable message.
    pub status_message: String,
    /// Always `false` for errors.
    #[serde(default)]
    pub success: bool,
}

/// Outgoing request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL.
    pub url: Url,
    /// Extra headers, added to the transport defaults.
    pub headers: Vec<(String, String)>,
    /// Query parameters, appended in order.
    pub query: Vec<(String, String)>,
    /// JSON body.
    pub body: Option<serde_json::Value>,
    /// Overrides the transport timeout for this request.
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    /// Creates a request with no headers, query or body.
    #[must_use]
    pub const fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
            timeout: None,
        }
    }

    /// Replaces the query parameters.
    #[must_use]
    pub fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Adds a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Successful (2xx) response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Raw body text.
    pub body: String,
    /// HTTP status code.
    pub status: u16,
    /// Reason phrase (e.g. `"OK"`).
    pub status_text: String,
    /// Response headers.
    pub headers: HeaderMap,
}

/// HTTP transport over `reqwest`.
///
/// Every call performs exactly one attempt.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// HTTP client.
    http_client: Client,
    /// Default timeout for requests without their own.
    timeout: Duration,
}

/// Builder for `HttpTransport`.
#[derive(Debug)]
pub struct HttpTransportBuilder {
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl HttpTransportBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            user_agent: None,
            timeout: None,
        }
    }

    /// Sets the User-Agent (default: `cinescope/<version>`).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the default timeout (default: 10s).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the transport.
    ///
    /// # Errors
    ///
    /// Returns a network-class [`TransportError`] if `reqwest::Client` build fails.
    pub fn build(self) -> Result<HttpTransport, TransportError> {
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| String::from(DEFAULT_USER_AGENT));
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .default_headers(headers)
            .timeout(timeout)
            .gzip(true)
            .build()
            .map_err(|e| TransportError::network(format!("failed to build HTTP client: {e}")))?;

        Ok(HttpTransport {
            http_client,
            timeout,
        })
    }
}

impl HttpTransport {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::new()
    }

    /// Default timeout applied to requests without their own.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends `req` once.
    ///
    /// # Errors
    ///
    /// - Non-2xx status: `TransportError` carrying the status, the upstream
    ///   `status_message` (or the reason phrase) and the raw body.
    /// - No response (connect, DNS, timeout): `TransportError` with status `0`.
    #[instrument(skip_all)]
    pub async fn request(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .http_client
            .request(req.method, req.url)
            .timeout(req.timeout.unwrap_or(self.timeout));

        if !req.query.is_empty() {
            builder = builder.query(&req.query);
        }
        for (name, value) in &req.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| TransportError::network(format!("invalid header name {name}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| TransportError::network(format!("invalid header value: {e}")))?;
            builder = builder.header(name, value);
        }
        if let Some(ref body) = req.body {
            builder = builder.json(body);
        }

        let request = builder
            .build()
            .map_err(|e| TransportError::network(format!("failed to build request: {e}")))?;

        tracing::debug!(method = %request.method(), url = %request.url(), "HTTP request");

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| TransportError::network(describe(&e)))?;

        let status = response.status();
        let status_text = String::from(status.canonical_reason().unwrap_or_default());
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::network(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            let message = serde_json::from_str::<TmdbErrorResponse>(&body).map_or_else(
                |_| status_text.clone(),
                |error_response| error_response.status_message,
            );
            tracing::debug!(status = status.as_u16(), %message, "HTTP error response");
            return Err(TransportError {
                status: status.as_u16(),
                message,
                body: Some(body),
            });
        }

        Ok(HttpResponse {
            body,
            status: status.as_u16(),
            status_text,
            headers,
        })
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`HttpTransport::request`].
    pub async fn get(
        &self,
        url: Url,
        query: Vec<(String, String)>,
    ) -> Result<HttpResponse, TransportError> {
        self.request(HttpRequest::new(Method::GET, url).query(query))
            .await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpTransport::request`].
    pub async fn post(
        &self,
        url: Url,
        body: serde_json::Value,
    ) -> Result<HttpResponse, TransportError> {
        self.request(HttpRequest::new(Method::POST, url).body(body))
            .await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpTransport::request`].
    pub async fn put(
        &self,
        url: Url,
        body: serde_json::Value,
    ) -> Result<HttpResponse, TransportError> {
        self.request(HttpRequest::new(Method::PUT, url).body(body))
            .await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`HttpTransport::request`].
    pub async fn delete(&self, url: Url) -> Result<HttpResponse, TransportError> {
        self.request(HttpRequest::new(Method::DELETE, url)).await
    }
}

/// Describes a failure that produced no response.
fn describe(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("request timed out: {err}")
    } else if err.is_connect() {
        format!("connection failed: {err}")
    } else {
        format!("request failed: {err}")
    }
}
