//! Authentication Models

use serde::{Deserialize, Serialize};

/// Login payload for `POST /api/Authenticate/Login`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub is_remember_password: bool,
}

/// Tokens and page grants returned on login
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Page slugs this account may open
    #[serde(default)]
    pub pages: Vec<String>,
}
