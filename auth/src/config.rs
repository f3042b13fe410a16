//! Adapter configuration.
//!
//! Credentials and endpoints are provided by the application, never
//! hardcoded beyond the LinkedIn production defaults.

use crate::error::{OAuthError, Result};
use serde_json::Value;

/// Environment variable holding the client identifier.
pub const ENV_CLIENT_ID: &str = "LINKEDIN_CLIENT_ID";

/// Environment variable holding the client secret.
pub const ENV_CLIENT_SECRET: &str = "LINKEDIN_CLIENT_SECRET";

/// Environment variable holding the redirect callback URI.
pub const ENV_REDIRECT_URI: &str = "LINKEDIN_REDIRECT_URI";

/// Scope granting read access to the lite profile.
pub const SCOPE_LITE_PROFILE: &str = "r_liteprofile";

/// Scope granting read access to the primary email address.
pub const SCOPE_EMAIL_ADDRESS: &str = "r_emailaddress";

const WWW_BASE: &str = "https://www.linkedin.com";
const API_BASE: &str = "https://api.linkedin.com";

/// LinkedIn endpoint URLs.
///
/// Defaults to the production hosts. Tests point these at a local server
/// with [`Endpoints::with_base_urls`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Browser-facing authorization endpoint.
    pub authorization_url: String,

    /// Token endpoint used for both code exchange and refresh.
    pub token_url: String,

    /// Lite profile endpoint (`/v2/me`).
    pub profile_url: String,

    /// Primary email endpoint, including its fixed projection query.
    pub email_url: String,
}

impl Endpoints {
    /// Build endpoints rooted at the given hosts.
    ///
    /// `www_base` serves the OAuth pages, `api_base` serves the REST API.
    /// Trailing slashes are ignored.
    #[must_use]
    pub fn with_base_urls(www_base: &str, api_base: &str) -> Self {
        let www = www_base.trim_end_matches('/');
        let api = api_base.trim_end_matches('/');

        Self {
            authorization_url: format!("{www}/oauth/v2/authorization"),
            token_url: format!("{www}/oauth/v2/accessToken"),
            profile_url: format!("{api}/v2/me"),
            email_url: format!(
                "{api}/v2/emailAddress?q=members&projection=(elements*(handle~))"
            ),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::with_base_urls(WWW_BASE, API_BASE)
    }
}

/// LinkedIn application credentials and request options.
///
/// Immutable once handed to a [`LinkedInProvider`](crate::LinkedInProvider).
#[derive(Debug, Clone, PartialEq)]
pub struct LinkedInConfig {
    /// OAuth 2.0 client ID from the LinkedIn developer portal.
    pub client_id: String,

    /// OAuth 2.0 client secret (keep confidential).
    pub client_secret: String,

    /// Redirect callback URI registered for the application.
    pub redirect_uri: String,

    /// Scopes to request, in order.
    ///
    /// Default: `r_liteprofile r_emailaddress`
    pub scopes: Vec<String>,

    /// Opaque value echoed back through the `state` parameter.
    ///
    /// Serialized as JSON text. Default: `{}`
    pub state: Value,

    /// Endpoint URLs.
    pub endpoints: Endpoints,
}

impl LinkedInConfig {
    /// Create a new configuration with the default scopes.
    #[must_use]
    pub fn new(client_id: String, client_secret: String, redirect_uri: String) -> Self {
        Self {
            client_id,
            client_secret,
            redirect_uri,
            scopes: vec![
                SCOPE_LITE_PROFILE.to_string(),
                SCOPE_EMAIL_ADDRESS.to_string(),
            ],
            state: Value::Object(serde_json::Map::new()),
            endpoints: Endpoints::default(),
        }
    }

    /// Create a configuration from `LINKEDIN_CLIENT_ID`,
    /// `LINKEDIN_CLIENT_SECRET` and `LINKEDIN_REDIRECT_URI`.
    ///
    /// # Errors
    ///
    /// Returns `OAuthError::MissingConfig` naming the first variable that is
    /// unset or not valid unicode.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(
            env_var(ENV_CLIENT_ID)?,
            env_var(ENV_CLIENT_SECRET)?,
            env_var(ENV_REDIRECT_URI)?,
        ))
    }

    /// Set custom scopes.
    #[must_use]
    pub fn with_scopes(mut self, scopes: Vec<String>) -> Self {
        self.scopes = scopes;
        self
    }

    /// Set the opaque state value.
    #[must_use]
    pub fn with_state(mut self, state: Value) -> Self {
        self.state = state;
        self
    }

    /// Override endpoint URLs.
    #[must_use]
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }
}

fn env_var(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| OAuthError::MissingConfig(name.to_string()))
}
