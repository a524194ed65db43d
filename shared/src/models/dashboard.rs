//! Dashboard Models

use crate::debt::DebtStatus;
use serde::{Deserialize, Serialize};

/// Remaining debt aggregated per month
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtByMonth {
    /// `YYYY-MM`
    pub month_key: String,
    pub remaining_amount: f64,
    /// Month-over-month delta, percent
    pub mo_m_percent: Option<f64>,
}

/// One overdue aging bucket in one month
///
/// Bucket labels: `1-7`, `8-15`, `16-30`, `31-60`, `61-90`, `>90`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverdueAgingEntry {
    pub month_key: String,
    pub bucket: String,
    pub amount: f64,
}

/// Share of the outstanding total held by one customer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtShare {
    #[serde(rename = "customerID")]
    pub customer_id: i64,
    pub customer_name: String,
    pub percent: f64,
}

/// Share of orders per debt status
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtStatusShare {
    pub status: DebtStatus,
    pub percent: f64,
}

/// Top-customer entry for one month
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCustomerEntry {
    pub month_key: String,
    pub customer_name: String,
    pub amount: f64,
}

/// Headline numbers for the current month
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardKpi {
    pub total_debt_this_month: f64,
    /// Collected / receivable ratio, percent
    pub collected_rate_this_month: f64,
    pub coming_due_amount: f64,
    pub coming_due_count: i64,
    pub overdue_amount: f64,
    pub overdue_count: i64,
}

/// Full payload of `GET /api/Dashboard/dashboard`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    #[serde(default)]
    pub debt_by_month: Vec<DebtByMonth>,
    #[serde(default)]
    pub overdue_aging_by_month: Vec<OverdueAgingEntry>,
    #[serde(default)]
    pub debt_share_by_customer: Vec<DebtShare>,
    #[serde(default)]
    pub debt_status_summary: Vec<DebtStatusShare>,
    #[serde(default)]
    pub top5_customers_by_month: Vec<TopCustomerEntry>,
    pub kpi: DashboardKpi,
}

/// Query string for the dashboard endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    /// `YYYY-MM`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_month: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_decodes_from_wire_json() {
        let json = serde_json::json!({
            "debtByMonth": [
                {"monthKey": "2024-01", "remainingAmount": 1_200_000_000.0, "moMPercent": null},
                {"monthKey": "2024-02", "remainingAmount": 900_000_000.0, "moMPercent": -25.0}
            ],
            "overdueAgingByMonth": [
                {"monthKey": "2024-02", "bucket": "1-7", "amount": 50_000_000.0},
                {"monthKey": "2024-02", "bucket": ">90", "amount": 10_000_000.0}
            ],
            "debtShareByCustomer": [
                {"customerID": 7, "customerName": "Hòa Phát", "percent": 41.5}
            ],
            "debtStatusSummary": [
                {"status": "overdue", "percent": 18.0}
            ],
            "top5CustomersByMonth": [
                {"monthKey": "2024-02", "customerName": "Hòa Phát", "amount": 373_500_000.0}
            ],
            "kpi": {
                "totalDebtThisMonth": 900_000_000.0,
                "collectedRateThisMonth": 62.5,
                "comingDueAmount": 120_000_000.0,
                "comingDueCount": 4,
                "overdueAmount": 162_000_000.0,
                "overdueCount": 9
            }
        });

        let data: DashboardData = serde_json::from_value(json).unwrap();
        assert_eq!(data.debt_by_month.len(), 2);
        assert_eq!(data.debt_by_month[1].mo_m_percent, Some(-25.0));
        assert_eq!(data.overdue_aging_by_month[1].bucket, ">90");
        assert_eq!(data.debt_share_by_customer[0].customer_id, 7);
        assert_eq!(data.debt_status_summary[0].status, DebtStatus::Overdue);
        assert_eq!(data.kpi.overdue_count, 9);
    }

    #[test]
    fn test_dashboard_query_omits_absent_fields() {
        let query = DashboardQuery {
            from_month: Some("2024-01".to_string()),
            ..DashboardQuery::default()
        };

        let json = serde_json::to_value(&query).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(json["fromMonth"], "2024-01");
        assert!(!object.contains_key("customerId"));
        assert!(!object.contains_key("toMonth"));
    }
}
