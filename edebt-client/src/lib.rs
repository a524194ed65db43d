//! Typed HTTP client for the receivables API
//!
//! Thin wrapper over the server's controller endpoints. Every response
//! travels in the shared [`ApiEnvelope`] and is unwrapped into either a
//! payload or a typed error.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::ApiEnvelope;
pub use shared::models::{LoginRequest, LoginResponse};
