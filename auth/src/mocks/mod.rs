//! Mock implementations for testing.
//!
//! In-memory stand-ins for the adapter's collaborators, for use in unit
//! and integration tests.

pub mod http;

pub use http::MockTransport;
