//! # LinkedIn OAuth2 Adapter
//!
//! An authorization code grant adapter for LinkedIn: builds the
//! authorization redirect, exchanges and refreshes tokens, and reads the
//! member's identifier, display name and primary email.
//!
//! ## Example
//!
//! ```no_run
//! use linkedin_auth::{LinkedInConfig, LinkedInProvider};
//! use serde_json::json;
//!
//! # async fn run(code: &str) -> linkedin_auth::Result<()> {
//! let config = LinkedInConfig::from_env()?.with_state(json!({"success": "/home"}));
//! let mut linkedin = LinkedInProvider::with_reqwest(config);
//!
//! // 1. Redirect the browser
//! let url = linkedin.build_authorization_url()?;
//!
//! // 2. Handle the callback
//! let tokens = linkedin.exchange_code(code).await?;
//!
//! // 3. Identify the member
//! let id = linkedin.user_id(&tokens.access_token).await?;
//! let name = linkedin.user_name(&tokens.access_token).await?;
//! let email = linkedin.user_email(&tokens.access_token).await?;
//! # let _ = (url, id, name, email);
//! # Ok(())
//! # }
//! ```
//!
//! ## Caching
//!
//! A provider instance serves one flow. The first token exchange and the
//! first profile lookup are cached until `forget_tokens` / `forget_profile`
//! is called. Email lookups and refreshes always reach LinkedIn.

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]

// Public modules
pub mod config;
pub mod error;
pub mod profile;
pub mod providers;
pub mod tokens;

#[cfg(any(test, feature = "test-utils"))]
pub mod mocks;

// Re-export main types for convenience
pub use config::{Endpoints, LinkedInConfig};
pub use error::{OAuthError, Result};
pub use profile::UserProfile;
pub use providers::{HttpRequest, HttpTransport, LinkedInProvider, ReqwestTransport};
pub use tokens::TokenSet;
