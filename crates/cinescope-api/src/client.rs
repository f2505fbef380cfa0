//! `TmdbClient` - TMDB API v3 client.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use crate::config::{DEFAULT_BASE_URL, DEFAULT_LANGUAGE, TmdbConfig};
use crate::error::{Result, TmdbError};
use crate::query::QueryParams;
use crate::transport::HttpTransport;

/// TMDB API client.
///
/// Adds `api_key` and `language` to every request, maps transport failures
/// to [`TmdbError`] kinds and decodes bodies into schema types.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClient {
    /// HTTP transport.
    transport: HttpTransport,
    /// Base URL for API requests (ends with `/`).
    base_url: Url,
    /// API key sent as `api_key`.
    api_key: String,
    /// Language sent when a call does not set one.
    language: String,
}

/// Builder for `TmdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClientBuilder {
    base_url: Option<Url>,
    api_key: Option<String>,
    language: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    transport: Option<HttpTransport>,
}

impl TmdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            language: None,
            user_agent: None,
            timeout: None,
            transport: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the default language (default: `en-US`).
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the User-Agent of the internally built transport.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the timeout of the internally built transport.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Uses an existing transport instead of building one.
    #[must_use]
    pub fn transport(mut self, transport: HttpTransport) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `api_key` is not set or empty.
    /// - The transport cannot be built.
    pub fn build(self) -> Result<TmdbClient> {
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| TmdbError::Configuration(String::from("api_key is required")))?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL).map_err(|e| {
                TmdbError::Configuration(format!("invalid default base URL: {e}"))
            })?,
        };

        let transport = match self.transport {
            Some(t) => t,
            None => {
                let mut builder = HttpTransport::builder();
                if let Some(ua) = self.user_agent {
                    builder = builder.user_agent(ua);
                }
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder
                    .build()
                    .map_err(|e| TmdbError::Configuration(e.message))?
            }
        };

        Ok(TmdbClient {
            transport,
            base_url,
            api_key,
            language: self
                .language
                .unwrap_or_else(|| String::from(DEFAULT_LANGUAGE)),
        })
    }
}

impl TmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TmdbClientBuilder {
        TmdbClientBuilder::new()
    }

    /// Creates a client from resolved configuration and a shared transport.
    ///
    /// # Errors
    ///
    /// Returns [`TmdbError::Configuration`] if the API key is empty.
    pub fn from_config(config: &TmdbConfig, transport: HttpTransport) -> Result<Self> {
        Self::builder()
            .base_url(config.base_url.clone())
            .api_key(config.api_key.clone())
            .language(config.default_language.clone())
            .transport(transport)
            .build()
    }

    /// Base URL for API requests.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Default language.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Sends a GET request to `path` and decodes the JSON body.
    ///
    /// `params` are applied over the defaults `api_key` and `language`.
    ///
    /// # Errors
    ///
    /// - Transport failures mapped by [`TmdbError::from_transport`].
    /// - [`TmdbError::Decode`] if the body does not match `T`.
    #[instrument(skip_all)]
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, params: QueryParams) -> Result<T> {
        let url = self.base_url.join(path).map_err(|e| {
            TmdbError::validation("path", format!("failed to join URL path {path}: {e}"))
        })?;

        let defaults = QueryParams::new()
            .set("api_key", &self.api_key)
            .set("language", &self.language);
        let query = params.over(defaults);

        tracing::debug!(
            url = %url,
            language = query.get("language").unwrap_or_default(),
            "TMDB API request"
        );

        let response = self
            .transport
            .get(url, query.into_pairs())
            .await
            .map_err(|e| TmdbError::from_transport(e, path))?;

        serde_json::from_str(&response.body).map_err(|source| TmdbError::Decode {
            context: String::from(path),
            source,
        })
    }
}
