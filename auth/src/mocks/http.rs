//! Mock HTTP transport for testing.

use crate::error::{OAuthError, Result};
use crate::providers::http::{HttpRequest, HttpTransport};
use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex};

/// Scripted HTTP transport.
///
/// Replies with queued responses in order and records every request it
/// receives. Clones share the same script and log, so a test can keep one
/// handle while the provider owns another.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<VecDeque<Result<String>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
    /// Create a transport with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response body.
    pub fn respond_with(&self, body: impl Into<String>) {
        self.push(Ok(body.into()));
    }

    /// Queue a failure.
    pub fn fail_with(&self, error: OAuthError) {
        self.push(Err(error));
    }

    /// Requests received so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    /// Number of requests received so far.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|requests| requests.len()).unwrap_or_default()
    }

    fn push(&self, response: Result<String>) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push_back(response);
        }
    }
}

impl HttpTransport for MockTransport {
    fn request(&self, request: HttpRequest) -> impl Future<Output = Result<String>> + Send {
        let responses = Arc::clone(&self.responses);
        let requests = Arc::clone(&self.requests);

        async move {
            let url = request.url.clone();

            requests
                .lock()
                .map_err(|_| OAuthError::RequestFailed("mock request log poisoned".to_string()))?
                .push(request);

            responses
                .lock()
                .map_err(|_| OAuthError::RequestFailed("mock script poisoned".to_string()))?
                .pop_front()
                .unwrap_or_else(|| {
                    Err(OAuthError::RequestFailed(format!(
                        "no scripted response for {url}"
                    )))
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replies_in_order_and_records() {
        let http = MockTransport::new();
        http.respond_with("one");
        http.fail_with(OAuthError::HttpStatus {
            status: 503,
            body: String::new(),
        });

        let first = tokio_test::block_on(http.request(HttpRequest::get("https://a.test/1")));
        let second = tokio_test::block_on(http.request(HttpRequest::post("https://a.test/2", "x=y")));

        assert_eq!(first, Ok("one".to_string()));
        assert!(matches!(second, Err(OAuthError::HttpStatus { status: 503, .. })));
        assert_eq!(http.request_count(), 2);
        assert_eq!(http.requests()[1].body.as_deref(), Some("x=y"));
    }

    #[test]
    fn test_exhausted_script_fails() {
        let http = MockTransport::new();

        let result = tokio_test::block_on(http.request(HttpRequest::get("https://a.test/me")));

        assert_eq!(
            result,
            Err(OAuthError::RequestFailed(
                "no scripted response for https://a.test/me".to_string()
            ))
        );
    }

    #[test]
    fn test_clones_share_state() {
        let http = MockTransport::new();
        let handle = http.clone();
        handle.respond_with("shared");

        let body = tokio_test::block_on(http.request(HttpRequest::get("https://a.test")));

        assert_eq!(body, Ok("shared".to_string()));
        assert_eq!(handle.request_count(), 1);
    }
}
