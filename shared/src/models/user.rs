//! User Model

use serde::{Deserialize, Serialize};

/// Back-office account, also the sales person assigned to customers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "userID")]
    pub user_id: i64,
    pub email: String,
    pub full_name: String,
}
