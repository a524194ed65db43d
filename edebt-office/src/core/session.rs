//! Persisted login session
//!
//! The office keeps exactly one active session in a JSON file: written
//! after a successful login, restored at startup, removed on logout or
//! expiry. The access token's `exp` claim, when present, schedules local
//! expiry so a stale file is not offered to the server.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use shared::models::LoginResponse;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Page slugs the office knows how to open
pub const KNOWN_PAGES: &[&str] = &[
    "debt",
    "customer-new",
    "sale-new",
    "dashboard",
    "debt-dashboard",
];

/// One persisted login session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub access_token: String,
    pub refresh_token: String,
    /// Page slugs this account may open, in server order
    pub pages: Vec<String>,
    /// Unix seconds of the login
    pub logged_in_at: i64,
    /// Unix seconds the access token expires at, when the token carries one
    pub expires_at: Option<i64>,
}

impl StoredSession {
    /// Build a session from a fresh login response
    pub fn from_login(login: LoginResponse) -> Self {
        let expires_at = parse_jwt_exp(&login.access_token);
        Self {
            access_token: login.access_token,
            refresh_token: login.refresh_token,
            pages: login.pages,
            logged_in_at: Utc::now().timestamp(),
            expires_at,
        }
    }

    /// Whether this account may open a page
    pub fn is_page_permitted(&self, page: &str) -> bool {
        self.pages.iter().any(|p| p == page)
    }

    /// Resolve a requested page to one the account may open
    ///
    /// A non-permitted request falls back to the account's first page;
    /// `None` when the account has no pages at all.
    pub fn resolve_page<'a>(&'a self, requested: &'a str) -> Option<&'a str> {
        if self.is_page_permitted(requested) {
            Some(requested)
        } else {
            self.pages.first().map(String::as_str)
        }
    }

    /// Whether the session is past its expiry instant
    pub fn is_expired(&self, now: i64) -> bool {
        match self.expires_at {
            Some(expires_at) => now > expires_at,
            None => false,
        }
    }
}

/// Extract the `exp` claim from a JWT without verifying the signature
///
/// The token is only inspected to schedule local expiry; verification
/// stays the server's job. Anything that does not look like a JWT with
/// a numeric `exp` yields `None`.
pub fn parse_jwt_exp(token: &str) -> Option<i64> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    let payload_bytes = URL_SAFE_NO_PAD.decode(parts[1]).ok()?;
    let payload: serde_json::Value = serde_json::from_slice(&payload_bytes).ok()?;
    payload.get("exp")?.as_i64()
}

/// File-backed store for the active session
pub struct SessionStore {
    file_path: PathBuf,
}

impl SessionStore {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Persist the session (called after login)
    pub fn save(&self, session: &StoredSession) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(session)?;
        fs::write(&self.file_path, content)?;
        tracing::debug!("Session saved to {}", self.file_path.display());
        Ok(())
    }

    /// Restore the persisted session, if a live one exists
    ///
    /// A missing or unreadable file yields `None`; an expired file is
    /// removed on the spot.
    pub fn load(&self) -> Result<Option<StoredSession>, SessionStoreError> {
        if !self.file_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.file_path)?;
        let session: StoredSession = match serde_json::from_str(&content) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("Stored session is unreadable, ignoring it: {}", e);
                return Ok(None);
            }
        };

        if session.is_expired(Utc::now().timestamp()) {
            let _ = fs::remove_file(&self.file_path);
            tracing::info!("Stored session expired, cleared");
            return Ok(None);
        }

        tracing::info!("Restored persisted session");
        Ok(Some(session))
    }

    /// Remove the persisted session (logout)
    pub fn clear(&self) -> Result<(), SessionStoreError> {
        if self.file_path.exists() {
            fs::remove_file(&self.file_path)?;
            tracing::debug!("Session cleared");
        }
        Ok(())
    }
}
