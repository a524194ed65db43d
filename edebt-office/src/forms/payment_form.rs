//! Payment-collection form
//!
//! The update dialog on a listing row: edit the payment term (the due
//! date follows) and record one or more collections against the order's
//! outstanding balance.

use crate::forms::{FieldErrors, join_errors};
use crate::utils::time;
use edebt_client::{ClientResult, HttpClient};
use shared::debt;
use shared::models::{Order, PaymentCreate};
use shared::pricing::validate_payment_amount;
use shared::{AppError, ErrorCode};

/// One collection being entered
#[derive(Debug, Clone, Default)]
pub struct PaymentDraft {
    pub amount: Option<f64>,
    /// Collection date, `YYYY-MM-DD`
    pub date: String,
}

/// The update dialog for one order row
#[derive(Debug, Clone)]
pub struct PaymentForm {
    order: Order,
    /// Payment term in days; editing it moves the due date
    pub payment_term: i64,
    /// Derived due date, `YYYY-MM-DD`
    pub due_date: String,
    pub new_payments: Vec<PaymentDraft>,
}

impl PaymentForm {
    /// Open the dialog for one order
    pub fn for_order(order: Order) -> Self {
        let payment_term = order.payment_term;
        let due_date = debt::parse_wire_date(&order.due_date)
            .map(time::format_date)
            .unwrap_or_default();
        Self {
            order,
            payment_term,
            due_date,
            new_payments: Vec::new(),
        }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    /// Edit the payment term; the due date follows as sale date + term
    ///
    /// An unparseable sale date leaves the due date untouched.
    pub fn set_payment_term(&mut self, days: i64) {
        self.payment_term = days;
        if let Some(sale) = debt::parse_wire_date(&self.order.sale_date)
            && let Some(due) = time::add_days(sale, days)
        {
            self.due_date = time::format_date(due);
        }
    }

    /// Amount still owed on this order
    pub fn outstanding(&self) -> f64 {
        debt::outstanding_amount(&self.order)
    }

    /// Append a blank collection row
    pub fn add_row(&mut self) {
        self.new_payments.push(PaymentDraft::default());
    }

    /// Drop a collection row; out-of-range indexes are ignored
    pub fn remove_row(&mut self, index: usize) {
        if index < self.new_payments.len() {
            self.new_payments.remove(index);
        }
    }

    /// Collect every error across the collection rows
    ///
    /// Row-level checks first; the sum-against-outstanding check only
    /// runs once every row is individually sound.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = Vec::new();
        let mut amounts = Vec::with_capacity(self.new_payments.len());

        for (index, row) in self.new_payments.iter().enumerate() {
            if row.date.trim().is_empty() {
                errors.push(
                    AppError::new(ErrorCode::CollectionDateMissing)
                        .on_field("autumnDay")
                        .with_detail("row", index as i64),
                );
            } else if let Err(e) = time::parse_date(&row.date) {
                errors.push(e.on_field("autumnDay").with_detail("row", index as i64));
            }

            match row.amount {
                Some(amount) => {
                    if let Err(e) = validate_payment_amount(amount) {
                        errors.push(e.with_detail("row", index as i64));
                    } else {
                        amounts.push(amount);
                    }
                }
                None => errors.push(
                    AppError::new(ErrorCode::PaymentAmountInvalid)
                        .on_field("amount")
                        .with_detail("row", index as i64),
                ),
            }
        }

        if errors.is_empty()
            && let Err(e) = debt::validate_new_payments(&amounts, self.outstanding())
        {
            errors.push(e);
        }

        errors
    }

    /// Wire payloads, one per collection row
    pub fn payloads(&self) -> Result<Vec<PaymentCreate>, FieldErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        let mut payments = Vec::with_capacity(self.new_payments.len());
        for row in &self.new_payments {
            let date = time::parse_date(&row.date).map_err(|e| vec![e])?;
            payments.push(PaymentCreate {
                order_id: self.order.id,
                amount: row.amount.unwrap_or(0.0),
                autumn_day: time::to_wire_instant(date),
            });
        }
        Ok(payments)
    }

    /// Insert the collections one at a time, in row order
    ///
    /// Returns how many rows the server accepted before any failure.
    pub async fn submit(&self, client: &HttpClient) -> ClientResult<usize> {
        let payments = self.payloads().map_err(join_errors)?;

        let mut inserted = 0;
        for payment in &payments {
            client.insert_payment(payment).await?;
            inserted += 1;
        }
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::debt::DebtStatus;
    use shared::finalization::PriceFinalizationStatus;
    use shared::models::PaidEntry;
    use shared::pricing::{Currency, VatCode};

    fn sample_order() -> Order {
        Order {
            id: 9,
            order_number: "DH-0009".to_string(),
            product_name: "Thép cuộn cán nóng".to_string(),
            sale_date: "2024-01-10T00:00:00.000Z".to_string(),
            total_amount: 150_000_000.0,
            paid: 50_000_000.0,
            paid_history: vec![PaidEntry {
                date: "2024-01-20T00:00:00.000Z".to_string(),
                amount: 50_000_000.0,
            }],
            remaining: 100_000_000.0,
            payment_term: 30,
            due_date: "2024-02-09T00:00:00.000Z".to_string(),
            status: DebtStatus::Overdue,
            overdue_day: Some(3),
            quantity: 100.0,
            unit_price: 1_500_000.0,
            currency: Currency::Vnd,
            deposit: None,
            price_finalization_date: None,
            price_finalization_status: Some(PriceFinalizationStatus::Open),
            vat: Some(VatCode::Zero),
            final_price: None,
            temp_amount: None,
            final_amount: None,
        }
    }

    #[test]
    fn test_opens_with_order_term_and_due_date() {
        let form = PaymentForm::for_order(sample_order());
        assert_eq!(form.payment_term, 30);
        assert_eq!(form.due_date, "2024-02-09");
        assert_eq!(form.outstanding(), 100_000_000.0);
    }

    #[test]
    fn test_term_edit_moves_due_date() {
        let mut form = PaymentForm::for_order(sample_order());
        form.set_payment_term(45);
        assert_eq!(form.due_date, "2024-02-24");
    }

    #[test]
    fn test_term_edit_skips_malformed_sale_date() {
        let mut order = sample_order();
        order.sale_date = "soon".to_string();
        let mut form = PaymentForm::for_order(order);

        form.set_payment_term(45);
        assert_eq!(form.payment_term, 45);
        assert_eq!(form.due_date, "2024-02-09");
    }

    #[test]
    fn test_rows_need_date_and_amount() {
        let mut form = PaymentForm::for_order(sample_order());
        form.add_row();

        let errors = form.validate();
        let codes: Vec<_> = errors.iter().map(|e| e.code).collect();
        assert!(codes.contains(&ErrorCode::CollectionDateMissing));
        assert!(codes.contains(&ErrorCode::PaymentAmountInvalid));
    }

    #[test]
    fn test_sum_capped_by_outstanding() {
        let mut form = PaymentForm::for_order(sample_order());
        form.new_payments = vec![
            PaymentDraft {
                amount: Some(60_000_000.0),
                date: "2024-02-10".to_string(),
            },
            PaymentDraft {
                amount: Some(50_000_000.0),
                date: "2024-02-11".to_string(),
            },
        ];

        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::PaymentExceedsOutstanding);
    }

    #[test]
    fn test_exact_outstanding_is_accepted() {
        let mut form = PaymentForm::for_order(sample_order());
        form.new_payments = vec![PaymentDraft {
            amount: Some(100_000_000.0),
            date: "2024-02-10".to_string(),
        }];
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_payloads() {
        let mut form = PaymentForm::for_order(sample_order());
        form.new_payments = vec![
            PaymentDraft {
                amount: Some(30_000_000.0),
                date: "2024-02-10".to_string(),
            },
            PaymentDraft {
                amount: Some(20_000_000.0),
                date: "2024-02-15".to_string(),
            },
        ];

        let payments = form.payloads().unwrap();
        assert_eq!(payments.len(), 2);
        assert_eq!(payments[0].order_id, 9);
        assert_eq!(payments[0].amount, 30_000_000.0);
        assert_eq!(payments[0].autumn_day, "2024-02-10T00:00:00.000Z");
        assert_eq!(payments[1].autumn_day, "2024-02-15T00:00:00.000Z");
    }

    #[test]
    fn test_add_and_remove_rows() {
        let mut form = PaymentForm::for_order(sample_order());
        form.add_row();
        form.add_row();
        assert_eq!(form.new_payments.len(), 2);

        form.remove_row(0);
        assert_eq!(form.new_payments.len(), 1);

        form.remove_row(5);
        assert_eq!(form.new_payments.len(), 1);
    }
}
