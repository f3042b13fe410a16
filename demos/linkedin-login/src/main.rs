//! LinkedIn Login Demo
//!
//! Walks through the authorization code grant against LinkedIn.
//!
//! ## Usage
//!
//! Set your application credentials:
//! ```bash
//! export LINKEDIN_CLIENT_ID="your-client-id"
//! export LINKEDIN_CLIENT_SECRET="your-client-secret"
//! export LINKEDIN_REDIRECT_URI="http://localhost:3000/auth/linkedin/callback"
//! ```
//!
//! Print the authorization URL:
//! ```bash
//! cargo run -p linkedin-login
//! ```
//!
//! Open it, approve, then pass the `code` from the callback:
//! ```bash
//! cargo run -p linkedin-login -- <code>
//! ```

use linkedin_auth::{LinkedInConfig, LinkedInProvider};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = LinkedInConfig::from_env()?.with_state(json!({"demo": "linkedin-login"}));
    let mut linkedin = LinkedInProvider::with_reqwest(config);

    let Some(code) = std::env::args().nth(1) else {
        println!("=== LinkedIn Login ===");
        println!("Open this URL and approve access:\n");
        println!("{}\n", linkedin.build_authorization_url()?);
        println!("Then rerun with the `code` query parameter from the callback.");
        return Ok(());
    };

    let tokens = linkedin.exchange_code(&code).await?;
    tracing::info!(
        expires_at = ?tokens.expires_at(),
        has_refresh_token = tokens.has_refresh_token(),
        "Exchanged authorization code"
    );

    let id = linkedin.user_id(&tokens.access_token).await?;
    let name = linkedin.user_name(&tokens.access_token).await?;
    let email = linkedin.user_email(&tokens.access_token).await?;

    println!("Provider:       {}", linkedin.name());
    println!("Member ID:      {id}");
    println!("Name:           {name}");
    println!("Email:          {email}");
    println!("Email verified: {}", linkedin.is_email_verified());

    Ok(())
}
