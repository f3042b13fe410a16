//! OAuth provider adapters and their collaborators.
//!
//! The adapter never talks to the network directly. Every call goes through
//! an [`HttpTransport`], which lets tests script LinkedIn's answers and lets
//! applications bring their own client.

pub mod http;
pub mod linkedin;

// Re-export provider types
pub use http::{HttpMethod, HttpRequest, HttpTransport, ReqwestTransport};
pub use linkedin::{LinkedInProvider, PROVIDER_NAME};
