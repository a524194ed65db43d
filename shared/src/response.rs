//! API response envelope
//!
//! Every server response carries the same wrapper:
//! ```json
//! {
//!     "status": 0,
//!     "message": "OK",
//!     "object": { ... }
//! }
//! ```
//! `status == 0` means success; anything else is a server-side failure and
//! `message` carries the reason. The payload, when present, lives in
//! `object`.

use crate::error::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};

/// Status value the server uses for success
pub const API_STATUS_SUCCESS: i32 = 0;

/// Unified API response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Server status (0 = success, non-zero = failure)
    pub status: i32,
    /// Human-readable message, usually present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Response payload (present on success for data-bearing endpoints)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Create a successful envelope carrying a payload
    pub fn ok(object: T) -> Self {
        Self {
            status: API_STATUS_SUCCESS,
            message: None,
            object: Some(object),
        }
    }

    /// Create a failure envelope with a status and message
    pub fn failure(status: i32, message: impl Into<String>) -> Self {
        Self {
            status,
            message: Some(message.into()),
            object: None,
        }
    }

    /// Whether the server reported success
    #[inline]
    pub fn is_success(&self) -> bool {
        self.status == API_STATUS_SUCCESS
    }

    /// Unwrap the envelope into its payload
    ///
    /// A non-zero status becomes an [`AppError`] carrying the server message
    /// and the raw status as a detail. A success envelope with no payload is
    /// an error for data-bearing endpoints; use [`Self::into_ack`] for
    /// endpoints that return nothing.
    pub fn into_result(self) -> Result<T, AppError> {
        if !self.is_success() {
            let message = self
                .message
                .unwrap_or_else(|| ErrorCode::Unknown.message().to_string());
            return Err(
                AppError::with_message(ErrorCode::InvalidRequest, message)
                    .with_detail("status", self.status),
            );
        }
        self.object.ok_or_else(|| {
            AppError::internal("server reported success but sent no payload")
        })
    }

    /// Unwrap an envelope whose payload is irrelevant (insert/update acks)
    pub fn into_ack(self) -> Result<(), AppError> {
        if !self.is_success() {
            let message = self
                .message
                .unwrap_or_else(|| ErrorCode::Unknown.message().to_string());
            return Err(
                AppError::with_message(ErrorCode::InvalidRequest, message)
                    .with_detail("status", self.status),
            );
        }
        Ok(())
    }
}
