//! Customer Model

use serde::{Deserialize, Serialize};

/// Customer row from `GET /api/Customer/GetAllCustomers`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "customerID")]
    pub customer_id: i64,
    pub customer_name: String,
    /// Assigned sales person (user reference)
    #[serde(rename = "saleID")]
    pub sale_id: i64,
    /// Sales person display name, denormalized into the row
    pub full_name: String,
    pub address: Option<String>,
    pub tax_code: Option<String>,
}

/// Create payload for `POST /api/Customer/InsertCustomer`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreate {
    #[serde(rename = "saleID")]
    pub sale_id: i64,
    pub customer_name: String,
    pub tax_code: String,
    pub address: String,
    /// Always 0 on creation
    pub is_delete: i32,
}
