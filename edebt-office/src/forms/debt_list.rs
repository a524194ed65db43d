//! Debt listing view state
//!
//! The server returns one page of customers with their orders; the
//! keyword box and the status tabs then filter client-side so typing
//! does not round-trip. Orders inside each row are ordered most urgent
//! first.

use shared::debt::DebtStatus;
use shared::models::{CustomerDebt, DebtQuery, Order};

/// Client-side view over one fetched page of debt rows
#[derive(Debug, Clone, Default)]
pub struct DebtList {
    rows: Vec<CustomerDebt>,
    /// Matched case-insensitively against customer, sales person and
    /// product names
    pub keyword: String,
    /// Active status tab; `None` shows everything
    pub status_tab: Option<DebtStatus>,
}

impl DebtList {
    /// Take ownership of fetched rows, sorting each row's orders by urgency
    pub fn new(mut rows: Vec<CustomerDebt>) -> Self {
        for row in &mut rows {
            row.orders.sort_by_key(|order| order.status.sort_rank());
        }
        Self {
            rows,
            keyword: String::new(),
            status_tab: None,
        }
    }

    pub fn rows(&self) -> &[CustomerDebt] {
        &self.rows
    }

    /// Rows passing the keyword and status filters
    pub fn visible(&self) -> Vec<&CustomerDebt> {
        let keyword = self.keyword.trim().to_lowercase();
        self.rows
            .iter()
            .filter(|row| self.matches_keyword(row, &keyword) && self.matches_status(row))
            .collect()
    }

    /// Orders of one row that the active tab shows
    pub fn visible_orders<'a>(&self, row: &'a CustomerDebt) -> Vec<&'a Order> {
        row.orders
            .iter()
            .filter(|order| {
                self.status_tab
                    .map_or(true, |status| order.status == status)
            })
            .collect()
    }

    /// Server query matching the current view, for refetching
    pub fn to_query(&self, page_size: i64, current_page: i64) -> DebtQuery {
        DebtQuery {
            search: self.keyword.trim().to_string(),
            status: self.status_tab.map(|status| i32::from(status.query_code())),
            page_size,
            current_page,
            ..DebtQuery::default()
        }
    }

    fn matches_keyword(&self, row: &CustomerDebt, keyword: &str) -> bool {
        if keyword.is_empty() {
            return true;
        }
        row.name.to_lowercase().contains(keyword)
            || row.sales_person.to_lowercase().contains(keyword)
            || row
                .orders
                .iter()
                .any(|order| order.product_name.to_lowercase().contains(keyword))
    }

    fn matches_status(&self, row: &CustomerDebt) -> bool {
        match self.status_tab {
            None => true,
            Some(status) => row.orders.iter().any(|order| order.status == status),
        }
    }
}
