//! Shared types for the receivables workspace
//!
//! Domain logic and wire types used across the API client and the
//! office app: error types, the response envelope, order pricing,
//! debt classification, and the price finalization state machine.

pub mod debt;
pub mod error;
pub mod finalization;
pub mod models;
pub mod pricing;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Error re-exports (for convenient access)
pub use error::{AppError, AppResult, ErrorCode};

// Envelope re-exports (every endpoint speaks this shape)
pub use response::{ApiEnvelope, API_STATUS_SUCCESS};
