//! Order Models

use crate::debt::DebtStatus;
use crate::finalization::PriceFinalizationStatus;
use crate::models::PaidEntry;
use crate::pricing::{Currency, VatCode};
use serde::{Deserialize, Serialize};

/// Order row inside a customer debt listing
///
/// `status` is computed server-side and is canonical; the client only
/// refreshes the overdue day count for display. The outstanding amount
/// is resolved from `finalAmount` / `tempAmount` / `remaining` in that
/// order of preference (see `debt::outstanding_amount`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub order_number: String,
    pub product_name: String,
    /// ISO instant of the sale day
    pub sale_date: String,
    pub total_amount: f64,
    /// Total collected so far
    pub paid: f64,
    #[serde(default)]
    pub paid_history: Vec<PaidEntry>,
    /// Server-computed balance, the fallback when no price override applies
    pub remaining: f64,
    /// Payment term in days from the sale date
    pub payment_term: i64,
    pub due_date: String,
    pub status: DebtStatus,
    /// Server-computed day count, refreshed client-side while displayed
    pub overdue_day: Option<i64>,
    pub quantity: f64,
    pub unit_price: f64,
    pub currency: Currency,
    pub deposit: Option<f64>,
    pub price_finalization_date: Option<String>,
    pub price_finalization_status: Option<PriceFinalizationStatus>,
    pub vat: Option<VatCode>,
    /// Unit price fixed at finalization
    pub final_price: Option<f64>,
    /// Receivable recomputed from a provisional price
    pub temp_amount: Option<f64>,
    /// Receivable recomputed from the finalized price
    pub final_amount: Option<f64>,
}

/// One order line inside `POST /api/Contract/CreateContractWithOrder`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemCreate {
    /// Present when appending to an existing contract
    #[serde(rename = "contractID", skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<i64>,
    pub product_name: String,
    pub order_number: String,
    /// Midnight-UTC instant, `YYYY-MM-DDT00:00:00.000Z`
    pub sales_date: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_finalization_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_finalization_status: Option<PriceFinalizationStatus>,
    /// Derived total from the amount calculator
    pub amount_receivable: f64,
    pub due_date: String,
    /// Deposit collected at sale time
    pub amount_collected: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat: Option<VatCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Lifecycle field, always 0 on creation
    pub status: i32,
    pub is_delete: i32,
}

/// Payload for `POST /api/Order/ChooseFinalPrice`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizePriceRequest {
    #[serde(rename = "orderID")]
    pub order_id: i64,
    /// Midnight-UTC instant of the day the price was fixed
    pub price_finalization_date: String,
    pub final_price: f64,
}
