//! LinkedIn OAuth 2.0 provider implementation.

use crate::config::LinkedInConfig;
use crate::error::{OAuthError, Result};
use crate::profile::{self, UserProfile};
use crate::providers::http::{HttpRequest, HttpTransport, ReqwestTransport};
use crate::tokens::TokenSet;
use serde_json::Value;

/// Stable provider identifier.
pub const PROVIDER_NAME: &str = "linkedin";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// LinkedIn OAuth 2.0 provider.
///
/// Drives the authorization code grant against LinkedIn and reads the
/// member's lite profile and primary email.
///
/// One instance serves one login flow for one member. Token and profile
/// responses are cached for the instance's lifetime; use
/// [`forget_tokens`](Self::forget_tokens) and
/// [`forget_profile`](Self::forget_profile) to force a refetch.
///
/// # Example
///
/// ```no_run
/// use linkedin_auth::{LinkedInConfig, LinkedInProvider};
///
/// # async fn run() -> linkedin_auth::Result<()> {
/// let mut linkedin = LinkedInProvider::with_reqwest(LinkedInConfig::from_env()?);
///
/// // Redirect the browser here, then exchange the returned code.
/// let url = linkedin.build_authorization_url()?;
/// # let code = "code";
/// let tokens = linkedin.exchange_code(code).await?;
/// let email = linkedin.user_email(&tokens.access_token).await?;
/// # let _ = (url, email);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct LinkedInProvider<H> {
    /// Credentials and endpoints.
    config: LinkedInConfig,

    /// Transport used for every provider call.
    http: H,

    /// Result of the last token exchange or refresh.
    tokens: Option<TokenSet>,

    /// Profile fetched for this flow.
    profile: Option<CachedProfile>,
}

#[derive(Clone, Debug)]
struct CachedProfile {
    /// Access token the profile was fetched with.
    access_token: String,
    profile: UserProfile,
}

impl LinkedInProvider<ReqwestTransport> {
    /// Create a provider backed by a default `reqwest` client.
    #[must_use]
    pub fn with_reqwest(config: LinkedInConfig) -> Self {
        Self::new(config, ReqwestTransport::new())
    }
}

impl<H: HttpTransport> LinkedInProvider<H> {
    /// Create a new LinkedIn provider.
    ///
    /// # Arguments
    ///
    /// * `config` - Application credentials and endpoints
    /// * `http` - Transport used for token and API calls
    #[must_use]
    pub const fn new(config: LinkedInConfig, http: H) -> Self {
        Self {
            config,
            http,
            tokens: None,
            profile: None,
        }
    }

    /// Provider identifier (`"linkedin"`).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &LinkedInConfig {
        &self.config
    }

    /// Scopes requested during authorization.
    #[must_use]
    pub fn scopes(&self) -> &[String] {
        &self.config.scopes
    }

    /// LinkedIn never reports whether the member's email is verified.
    #[must_use]
    pub const fn is_email_verified(&self) -> bool {
        false
    }

    /// Build the URL to redirect the member to.
    ///
    /// Carries `response_type`, `client_id`, `redirect_uri`, `scope`
    /// (space-joined) and `state` (JSON text of the configured state).
    ///
    /// # Errors
    ///
    /// Returns `OAuthError::InvalidRequest` if the query cannot be encoded.
    pub fn build_authorization_url(&self) -> Result<String> {
        let scope = self.config.scopes.join(" ");
        let state = self.config.state.to_string();
        let params = [
            ("response_type", "code"),
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("scope", scope.as_str()),
            ("state", state.as_str()),
        ];

        let query = serde_urlencoded::to_string(params)
            .map_err(|e| OAuthError::InvalidRequest(format!("Failed to build URL: {e}")))?;

        Ok(format!("{}?{query}", self.config.endpoints.authorization_url))
    }

    /// Exchange an authorization code for tokens.
    ///
    /// Only the first successful call reaches LinkedIn. Later calls return
    /// the cached tokens without looking at `code`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Network request fails
    /// - LinkedIn rejects the code
    /// - Response is not a JSON object
    pub async fn exchange_code(&mut self, code: &str) -> Result<TokenSet> {
        if let Some(tokens) = &self.tokens {
            tracing::debug!("Reusing cached LinkedIn tokens");
            return Ok(tokens.clone());
        }

        let tokens = self
            .request_tokens(&[("grant_type", "authorization_code"), ("code", code)])
            .await?;

        self.tokens = Some(tokens.clone());
        Ok(tokens)
    }

    /// Obtain new tokens with a refresh token.
    ///
    /// Always calls LinkedIn and replaces the cached tokens. When the
    /// response carries no refresh token, `refresh_token` is kept.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Network request fails
    /// - Refresh token is rejected
    /// - Response is not a JSON object
    pub async fn refresh_tokens(&mut self, refresh_token: &str) -> Result<TokenSet> {
        let mut tokens = self
            .request_tokens(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
            ])
            .await?;

        if !tokens.has_refresh_token() {
            tokens.refresh_token = Some(refresh_token.to_string());
        }

        self.tokens = Some(tokens.clone());
        Ok(tokens)
    }

    /// Access token from the (cached) code exchange, or an empty string.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails.
    pub async fn access_token(&mut self, code: &str) -> Result<String> {
        Ok(self.exchange_code(code).await?.access_token)
    }

    /// Refresh token from the (cached) code exchange, or an empty string.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails.
    pub async fn refresh_token(&mut self, code: &str) -> Result<String> {
        Ok(self
            .exchange_code(code)
            .await?
            .refresh_token
            .unwrap_or_default())
    }

    /// Access token lifetime in seconds from the (cached) code exchange,
    /// or `0`.
    ///
    /// # Errors
    ///
    /// Returns error if the exchange fails.
    pub async fn access_token_expiry(&mut self, code: &str) -> Result<i64> {
        Ok(self.exchange_code(code).await?.expires_in.unwrap_or_default())
    }

    /// Member identifier, or an empty string.
    ///
    /// # Errors
    ///
    /// Returns error if the profile cannot be fetched.
    pub async fn user_id(&mut self, access_token: &str) -> Result<String> {
        Ok(self.profile(access_token).await?.id())
    }

    /// Member display name (`"First Last"`), or an empty string.
    ///
    /// # Errors
    ///
    /// Returns error if the profile cannot be fetched.
    pub async fn user_name(&mut self, access_token: &str) -> Result<String> {
        Ok(self.profile(access_token).await?.display_name())
    }

    /// Primary email address, or an empty string.
    ///
    /// Not cached: every call queries LinkedIn.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Network request fails
    /// - Token is rejected
    /// - Response is not JSON
    pub async fn user_email(&self, access_token: &str) -> Result<String> {
        tracing::debug!("Fetching LinkedIn primary email");

        let body = self
            .http
            .request(
                HttpRequest::get(&self.config.endpoints.email_url)
                    .header("Authorization", bearer(access_token)),
            )
            .await?;

        let response: Value = serde_json::from_str(&body)?;
        Ok(profile::primary_email(&response))
    }

    /// Tokens from the last exchange or refresh, if any.
    #[must_use]
    pub const fn cached_tokens(&self) -> Option<&TokenSet> {
        self.tokens.as_ref()
    }

    /// Profile fetched for this flow, if any.
    #[must_use]
    pub fn cached_profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref().map(|cached| &cached.profile)
    }

    /// Drop cached tokens so the next exchange calls LinkedIn again.
    pub fn forget_tokens(&mut self) {
        self.tokens = None;
    }

    /// Drop the cached profile so the next lookup calls LinkedIn again.
    pub fn forget_profile(&mut self) {
        self.profile = None;
    }

    /// Fetch the profile once per instance.
    ///
    /// The cache is not keyed by token: a different `access_token` still
    /// gets the cached profile, with a warning.
    async fn profile(&mut self, access_token: &str) -> Result<&UserProfile> {
        let cached = match self.profile.take() {
            Some(cached) => {
                if cached.access_token == access_token {
                    tracing::debug!("Reusing cached LinkedIn profile");
                } else {
                    tracing::warn!(
                        "Serving cached LinkedIn profile fetched with a different access token"
                    );
                }
                cached
            }
            None => CachedProfile {
                profile: self.fetch_profile(access_token).await?,
                access_token: access_token.to_string(),
            },
        };

        Ok(&self.profile.insert(cached).profile)
    }

    async fn fetch_profile(&self, access_token: &str) -> Result<UserProfile> {
        tracing::debug!("Fetching LinkedIn profile");

        let body = self
            .http
            .request(
                HttpRequest::get(&self.config.endpoints.profile_url)
                    .header("Authorization", bearer(access_token)),
            )
            .await?;

        Ok(UserProfile::new(serde_json::from_str(&body)?))
    }

    /// POST a grant to the token endpoint.
    ///
    /// `grant` supplies `grant_type` and its credential; the client
    /// credentials and redirect URI are appended.
    async fn request_tokens(&self, grant: &[(&str, &str)]) -> Result<TokenSet> {
        let mut params = grant.to_vec();
        params.extend([
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
        ]);

        let body = serde_urlencoded::to_string(&params)
            .map_err(|e| OAuthError::InvalidRequest(format!("Failed to encode form: {e}")))?;

        tracing::debug!(
            grant_type = grant.first().map_or("", |(_, value)| *value),
            "Requesting LinkedIn tokens"
        );

        let response = self
            .http
            .request(
                HttpRequest::post(&self.config.endpoints.token_url, body)
                    .header("Content-Type", FORM_CONTENT_TYPE),
            )
            .await?;

        TokenSet::from_json(&response)
    }
}

/// `Authorization` header value for a bearer token.
fn bearer(access_token: &str) -> String {
    format!("Bearer {}", urlencoding::encode(access_token))
}
