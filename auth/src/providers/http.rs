//! HTTP transport trait and its `reqwest` implementation.

use crate::error::{OAuthError, Result};
use reqwest::Client;
use std::fmt;
use std::future::Future;

/// HTTP method used by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
}

impl HttpMethod {
    /// Get the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Request method.
    pub method: HttpMethod,

    /// Absolute URL, including any query string.
    pub url: String,

    /// Header name/value pairs, in order.
    pub headers: Vec<(String, String)>,

    /// Request body, if any.
    pub body: Option<String>,
}

impl HttpRequest {
    /// Create a `GET` request.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Create a `POST` request with a body.
    #[must_use]
    pub fn post(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            headers: Vec::new(),
            body: Some(body.into()),
        }
    }

    /// Append a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Look up the first header with the given name (case-insensitive).
    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// HTTP request capability used by the adapter.
///
/// This trait abstracts over the transport so the adapter never owns TLS,
/// pooling, timeouts or retries.
///
/// # Implementation Notes
///
/// - Resolve to the response body text on a success status
/// - Map non-success statuses to `OAuthError::HttpStatus`
/// - Map connection failures to `OAuthError::RequestFailed`
pub trait HttpTransport: Send + Sync {
    /// Send a request and return the response body.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The request cannot be sent
    /// - The provider answers with a non-success status
    /// - The body cannot be read
    fn request(&self, request: HttpRequest) -> impl Future<Output = Result<String>> + Send;
}

/// `reqwest`-backed transport.
///
/// Timeouts, proxies and TLS settings come from the wrapped [`Client`].
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with a default client.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Create a transport around a preconfigured client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    async fn request(&self, request: HttpRequest) -> Result<String> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| OAuthError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| OAuthError::RequestFailed(e.to_string()))?;

        if !status.is_success() {
            tracing::error!(
                "LinkedIn {} {} failed with status {}: {}",
                request.method,
                request.url,
                status,
                body
            );
            return Err(OAuthError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builders() {
        let request = HttpRequest::post("https://example.com/token", "a=b")
            .header("Content-Type", "application/x-www-form-urlencoded");

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.body.as_deref(), Some("a=b"));
        assert_eq!(
            request.header_value("content-type"),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(request.header_value("Authorization"), None);
    }

    #[test]
    fn test_get_has_no_body() {
        let request = HttpRequest::get("https://example.com/me");

        assert_eq!(request.method.as_str(), "GET");
        assert!(request.body.is_none());
        assert!(request.headers.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_request_failure() {
        let transport = ReqwestTransport::new();

        let result = transport
            .request(HttpRequest::get("http://127.0.0.1:1/unreachable"))
            .await;

        assert!(matches!(result, Err(OAuthError::RequestFailed(_))));
    }
}
