//! Payment Models

use serde::{Deserialize, Serialize};

/// One collected payment in an order's history
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaidEntry {
    /// ISO instant of the collection day
    pub date: String,
    pub amount: f64,
}

/// Insert payload for `POST /api/Payment/InsertPayment`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCreate {
    #[serde(rename = "orderID")]
    pub order_id: i64,
    pub amount: f64,
    /// Collection date ("ngày thu"). The server's field is literally
    /// named `autumnDay`; the spelling must be reproduced verbatim.
    pub autumn_day: String,
}
