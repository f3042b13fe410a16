//! Error types for the LinkedIn OAuth2 adapter.

use thiserror::Error;

/// Result type alias for adapter operations.
pub type Result<T> = std::result::Result<T, OAuthError>;

/// Failure modes of the adapter.
///
/// Missing fields in provider responses are never reported here: they
/// degrade to empty defaults instead. Only calls that could not produce a
/// usable response body end up as an `OAuthError`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OAuthError {
    // ═══════════════════════════════════════════════════════════
    // Transport Errors
    // ═══════════════════════════════════════════════════════════

    /// The HTTP request could not be completed.
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The provider answered with a non-success status.
    #[error("Provider returned status {status}: {body}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Response body as returned by the provider
        body: String,
    },

    /// The response body was not the expected JSON document.
    #[error("Response parsing failed: {0}")]
    ResponseParseFailed(String),

    // ═══════════════════════════════════════════════════════════
    // Local Errors
    // ═══════════════════════════════════════════════════════════

    /// A request body could not be encoded.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A required configuration value is missing.
    #[error("Missing configuration: {0}")]
    MissingConfig(String),
}

impl OAuthError {
    /// Returns `true` if the error came from talking to the provider.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linkedin_auth::OAuthError;
    /// assert!(OAuthError::RequestFailed("timeout".into()).is_transport_error());
    /// assert!(!OAuthError::MissingConfig("LINKEDIN_CLIENT_ID".into()).is_transport_error());
    /// ```
    #[must_use]
    pub const fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Self::RequestFailed(_) | Self::HttpStatus { .. } | Self::ResponseParseFailed(_)
        )
    }

    /// Returns `true` if the provider rejected the credentials or token.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linkedin_auth::OAuthError;
    /// let err = OAuthError::HttpStatus { status: 401, body: String::new() };
    /// assert!(err.is_unauthorized());
    /// ```
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::HttpStatus { status: 401, .. })
    }
}

impl From<serde_json::Error> for OAuthError {
    fn from(err: serde_json::Error) -> Self {
        Self::ResponseParseFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_classification() {
        assert!(OAuthError::RequestFailed("dns".to_string()).is_transport_error());
        assert!(
            OAuthError::HttpStatus {
                status: 500,
                body: "oops".to_string()
            }
            .is_transport_error()
        );
        assert!(OAuthError::ResponseParseFailed("eof".to_string()).is_transport_error());
        assert!(!OAuthError::InvalidRequest("bad".to_string()).is_transport_error());
    }

    #[test]
    fn test_unauthorized_only_for_401() {
        let forbidden = OAuthError::HttpStatus {
            status: 403,
            body: String::new(),
        };
        assert!(!forbidden.is_unauthorized());
    }

    #[test]
    fn test_json_error_maps_to_parse_failure() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert!(matches!(
            OAuthError::from(err),
            OAuthError::ResponseParseFailed(_)
        ));
    }
}
