//! Contract Models

use crate::models::{Order, OrderItemCreate};
use serde::{Deserialize, Serialize};

/// Product segment filter used by the debt listing tabs
///
/// Travels as an integer: 0 = all, 1 = metals, 2 = wood-plastic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(into = "i32", from = "i32")]
pub enum ContractStatusFilter {
    #[default]
    All,
    Metals,
    WoodPlastic,
}

impl ContractStatusFilter {
    /// Tab caption as shown in the listing
    pub const fn label(&self) -> &'static str {
        match self {
            ContractStatusFilter::All => "Tất cả",
            ContractStatusFilter::Metals => "Kim loại",
            ContractStatusFilter::WoodPlastic => "Nhựa gỗ",
        }
    }
}

impl From<ContractStatusFilter> for i32 {
    fn from(filter: ContractStatusFilter) -> Self {
        match filter {
            ContractStatusFilter::All => 0,
            ContractStatusFilter::Metals => 1,
            ContractStatusFilter::WoodPlastic => 2,
        }
    }
}

impl From<i32> for ContractStatusFilter {
    fn from(value: i32) -> Self {
        match value {
            1 => ContractStatusFilter::Metals,
            2 => ContractStatusFilter::WoodPlastic,
            _ => ContractStatusFilter::All,
        }
    }
}

/// Create payload for `POST /api/Contract/CreateContractWithOrder`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractCreate {
    pub contract_number: String,
    /// Lowercase-d spelling here, unlike `customerID` in the customer list
    pub customer_id: i64,
    pub sales_id: i64,
    /// Product segment, 1 or 2
    pub contract_status: i32,
    pub is_delete: i32,
    pub order_items: Vec<OrderItemCreate>,
}

/// Aggregated receivables for one customer, one row of the debt listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDebt {
    pub id: i64,
    pub contract_id: i64,
    /// Customer display name
    pub name: String,
    pub sales_person: String,
    pub support_person: String,
    pub total_debt: f64,
    pub order_count: i64,
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// Query string for `GET /api/Contract/GetCustomerDebts`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtQuery {
    pub search: String,
    pub status_contract: ContractStatusFilter,
    pub page_size: i64,
    pub current_page: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<String>,
    /// Debt status code (`DebtStatus::query_code`); absent means all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

impl Default for DebtQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            status_contract: ContractStatusFilter::All,
            page_size: 100,
            current_page: 1,
            from_date: None,
            to_date: None,
            status: None,
        }
    }
}

/// Paged listing wrapper the server wraps debt rows in
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtPage {
    #[serde(default)]
    pub list_data: Vec<CustomerDebt>,
}
