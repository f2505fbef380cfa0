//! Error taxonomy for the TMDB client.

use std::fmt;

use thiserror::Error;

/// Failure raised by [`crate::transport::HttpTransport`].
///
/// `status` is the HTTP status code, or `0` when no response was received
/// (connection refused, DNS failure, timeout).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("HTTP {status}: {message}")]
pub struct TransportError {
    /// HTTP status code (`0` for network-level failures).
    pub status: u16,
    /// Upstream `status_message` if present, otherwise the reason phrase.
    pub message: String,
    /// Raw response body, if one was received.
    pub body: Option<String>,
}

impl TransportError {
    /// Creates an error for a request that never produced a response.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            status: 0,
            message: message.into(),
            body: None,
        }
    }

    /// Returns `true` when no response was received.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        self.status == 0
    }
}

/// Resource identifier carried by [`TmdbError::NotFound`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    /// Resource kind or endpoint (e.g. `"movie"`, `"trending/all/day"`).
    pub resource: String,
    /// Numeric TMDB id, when the lookup was by id.
    pub id: Option<u64>,
    /// Upstream `status_message`, when the 404 carried one.
    pub message: Option<String>,
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "{} with id {id}", self.resource),
            None => f.write_str(&self.resource),
        }
    }
}

/// Domain error returned by every client, repository and use-case call.
#[derive(Debug, Error)]
pub enum TmdbError {
    /// Missing or invalid configuration. Fatal at startup.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// No response was received from TMDB.
    #[error("network error: {0}")]
    Network(String),

    /// HTTP 401.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// HTTP 404.
    #[error("{0} not found")]
    NotFound(ResourceRef),

    /// HTTP 429. Never retried.
    #[error("rate limit exceeded: {0}")]
    RateLimit(String),

    /// HTTP 5xx or any other unexpected non-2xx status.
    #[error("TMDB API error (HTTP {status}): {message}")]
    Upstream {
        /// HTTP status code.
        status: u16,
        /// Upstream message, or the reason phrase.
        message: String,
    },

    /// Malformed input, including unknown media-type tags in results.
    #[error("validation error: {message}")]
    Validation {
        /// Human-readable description.
        message: String,
        /// Offending field, if known.
        field: Option<String>,
    },

    /// A 2xx body that does not match the expected schema.
    #[error("failed to decode {context}")]
    Decode {
        /// Endpoint that produced the body.
        context: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl TmdbError {
    /// Creates a validation error for `field`.
    #[must_use]
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(String::from(field)),
        }
    }

    /// HTTP status associated with this error kind, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication(_) => Some(401),
            Self::NotFound(_) => Some(404),
            Self::RateLimit(_) => Some(429),
            Self::Upstream { status, .. } => Some(*status),
            Self::Network(_) => Some(0),
            Self::Configuration(_) | Self::Validation { .. } | Self::Decode { .. } => None,
        }
    }

    /// Re-labels a `NotFound` error with a resource kind and id.
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn for_resource(self, resource: &str, id: u64) -> Self {
        match self {
            Self::NotFound(found) => Self::NotFound(ResourceRef {
                resource: String::from(resource),
                id: Some(id),
                message: found.message,
            }),
            other => other,
        }
    }

    /// Maps a transport failure on `endpoint` to its domain error kind.
    #[must_use]
    pub fn from_transport(err: TransportError, endpoint: &str) -> Self {
        match err.status {
            0 => Self::Network(err.message),
            401 => Self::Authentication(err.message),
            404 => Self::NotFound(ResourceRef {
                resource: String::from(endpoint),
                id: None,
                message: Some(err.message).filter(|m| !m.is_empty()),
            }),
            429 => Self::RateLimit(err.message),
            status => Self::Upstream {
                status,
                message: err.message,
            },
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TmdbError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn map(err: TransportError) -> TmdbError {
        TmdbError::from_transport(err, "movie/999999999")
    }

    fn transport(status: u16, message: &str) -> TransportError {
        TransportError {
            status,
            message: String::from(message),
            body: None,
        }
    }

    #[test]
    fn test_status_mapping() {
        // Arrange & Act & Assert
        assert!(matches!(
            map(transport(0, "connection refused")),
            TmdbError::Network(_)
        ));
        assert!(matches!(
            map(transport(401, "Invalid API key")),
            TmdbError::Authentication(_)
        ));
        assert!(matches!(
            map(transport(404, "missing")),
            TmdbError::NotFound(_)
        ));
        assert!(matches!(
            map(transport(429, "slow down")),
            TmdbError::RateLimit(_)
        ));
        assert!(matches!(
            map(transport(503, "unavailable")),
            TmdbError::Upstream { status: 503, .. }
        ));
        assert!(matches!(
            map(transport(418, "teapot")),
            TmdbError::Upstream { status: 418, .. }
        ));
    }

    #[test]
    fn test_upstream_message_preserved() {
        // Arrange
        let err = map(transport(401, "Invalid API key: You must be granted a valid key."));

        // Act
        let text = err.to_string();

        // Assert
        assert!(text.contains("Invalid API key"));
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_not_found_names_endpoint() {
        // Arrange & Act
        let err = map(transport(404, "The resource you requested could not be found."));

        // Assert
        assert_eq!(err.to_string(), "movie/999999999 not found");
    }

    #[test]
    fn test_for_resource_relabels_not_found() {
        // Arrange
        let err = map(transport(404, "The resource you requested could not be found."));

        // Act
        let err = err.for_resource("movie", 999_999_999);

        // Assert
        assert_eq!(err.to_string(), "movie with id 999999999 not found");
    }

    #[test]
    fn test_not_found_keeps_upstream_message() {
        // Arrange
        let err = map(transport(404, "The resource you requested could not be found."));

        // Act
        let err = err.for_resource("person", 7);

        // Assert
        match err {
            TmdbError::NotFound(found) => {
                assert_eq!(found.id, Some(7));
                assert_eq!(
                    found.message.as_deref(),
                    Some("The resource you requested could not be found.")
                );
            }
            other => unreachable!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_not_found_without_message() {
        // Arrange & Act
        let err = map(transport(404, ""));

        // Assert
        assert!(matches!(err, TmdbError::NotFound(ref found) if found.message.is_none()));
    }

    #[test]
    fn test_for_resource_keeps_other_kinds() {
        // Arrange
        let err = map(transport(429, "slow down"));

        // Act
        let err = err.for_resource("movie", 1);

        // Assert
        assert!(matches!(err, TmdbError::RateLimit(_)));
    }

    #[test]
    fn test_transport_network_constructor() {
        // Arrange & Act
        let err = TransportError::network("timed out");

        // Assert
        assert!(err.is_network());
        assert_eq!(err.to_string(), "HTTP 0: timed out");
    }
}
