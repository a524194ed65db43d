//! Price finalization dialog
//!
//! Metal prices float until the two sides fix them; this drives the
//! close / reopen toggle on a listing row and posts the chosen final
//! price once closed.

use crate::forms::join_errors;
use crate::utils::time;
use chrono::NaiveDate;
use edebt_client::{ClientResult, HttpClient};
use shared::debt;
use shared::finalization::PriceFinalization;
use shared::models::{FinalizePriceRequest, Order};
use shared::pricing::validate_final_price;
use shared::{AppError, AppResult, ErrorCode};

/// The finalize-price dialog for one order row
#[derive(Debug, Clone)]
pub struct FinalizeForm {
    pub order_id: i64,
    pub state: PriceFinalization,
    /// Defaults to the order's current price until the user overrides it
    pub final_price: f64,
}

impl FinalizeForm {
    /// Open the dialog for one order
    pub fn for_order(order: &Order) -> Self {
        let status = order.price_finalization_status.unwrap_or_default();
        let date = order
            .price_finalization_date
            .as_deref()
            .and_then(debt::parse_wire_date);
        Self {
            order_id: order.id,
            state: PriceFinalization::from_wire(status, date),
            final_price: order.final_price.unwrap_or(order.unit_price),
        }
    }

    /// Fix the price as of `today`
    pub fn close_today(&mut self, today: NaiveDate) -> AppResult<()> {
        self.state.close(today)
    }

    /// Reopen a closed price
    pub fn reopen(&mut self) -> AppResult<()> {
        self.state.reopen()
    }

    /// First error preventing submission, if any
    pub fn validate(&self) -> AppResult<()> {
        validate_final_price(self.final_price)?;
        if !self.state.is_closed() {
            return Err(AppError::new(ErrorCode::NotFinalized));
        }
        if self.state.date.is_none() {
            return Err(
                AppError::new(ErrorCode::FinalizationDateMissing)
                    .on_field("priceFinalizationDate"),
            );
        }
        Ok(())
    }

    /// Wire payload for the finalize endpoint
    pub fn payload(&self) -> AppResult<FinalizePriceRequest> {
        self.validate()?;
        let Some(date) = self.state.date else {
            return Err(AppError::new(ErrorCode::FinalizationDateMissing));
        };

        Ok(FinalizePriceRequest {
            order_id: self.order_id,
            price_finalization_date: time::to_wire_instant(date),
            final_price: self.final_price,
        })
    }

    /// Validate and post the final price
    pub async fn submit(&self, client: &HttpClient) -> ClientResult<()> {
        let payload = self
            .payload()
            .map_err(|e| join_errors(vec![e]))?;
        client.choose_final_price(&payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::debt::DebtStatus;
    use shared::finalization::PriceFinalizationStatus;
    use shared::pricing::{Currency, VatCode};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn open_order() -> Order {
        Order {
            id: 21,
            order_number: "DH-0021".to_string(),
            product_name: "Thép tấm SS400".to_string(),
            sale_date: "2024-01-10T00:00:00.000Z".to_string(),
            total_amount: 80_000_000.0,
            paid: 0.0,
            paid_history: Vec::new(),
            remaining: 80_000_000.0,
            payment_term: 30,
            due_date: "2024-02-09T00:00:00.000Z".to_string(),
            status: DebtStatus::NotDueYet,
            overdue_day: None,
            quantity: 40.0,
            unit_price: 2_000_000.0,
            currency: Currency::Vnd,
            deposit: None,
            price_finalization_date: None,
            price_finalization_status: Some(PriceFinalizationStatus::Open),
            vat: Some(VatCode::Ten),
            final_price: None,
            temp_amount: None,
            final_amount: None,
        }
    }

    #[test]
    fn test_defaults_to_unit_price() {
        let form = FinalizeForm::for_order(&open_order());
        assert_eq!(form.final_price, 2_000_000.0);
        assert!(!form.state.is_closed());
    }

    #[test]
    fn test_existing_final_price_wins() {
        let mut order = open_order();
        order.final_price = Some(2_150_000.0);
        let form = FinalizeForm::for_order(&order);
        assert_eq!(form.final_price, 2_150_000.0);
    }

    #[test]
    fn test_open_price_cannot_submit() {
        let form = FinalizeForm::for_order(&open_order());
        let err = form.payload().unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFinalized);
    }

    #[test]
    fn test_close_then_payload() {
        let mut form = FinalizeForm::for_order(&open_order());
        form.final_price = 2_100_000.0;
        form.close_today(d(2024, 2, 1)).unwrap();

        let payload = form.payload().unwrap();
        assert_eq!(payload.order_id, 21);
        assert_eq!(payload.price_finalization_date, "2024-02-01T00:00:00.000Z");
        assert_eq!(payload.final_price, 2_100_000.0);
    }

    #[test]
    fn test_double_close_is_rejected() {
        let mut form = FinalizeForm::for_order(&open_order());
        form.close_today(d(2024, 2, 1)).unwrap();
        let err = form.close_today(d(2024, 2, 2)).unwrap_err();
        assert_eq!(err.code, ErrorCode::AlreadyFinalized);
    }

    #[test]
    fn test_reopen_round_trip() {
        let mut form = FinalizeForm::for_order(&open_order());
        assert_eq!(form.reopen().unwrap_err().code, ErrorCode::NotFinalized);

        form.close_today(d(2024, 2, 1)).unwrap();
        form.reopen().unwrap();
        assert!(!form.state.is_closed());
    }

    #[test]
    fn test_final_price_must_be_positive() {
        let mut form = FinalizeForm::for_order(&open_order());
        form.close_today(d(2024, 2, 1)).unwrap();
        form.final_price = 0.0;

        let err = form.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::FinalPriceNotPositive);
    }

    #[test]
    fn test_closed_wire_state_is_restored() {
        let mut order = open_order();
        order.price_finalization_status = Some(PriceFinalizationStatus::Closed);
        order.price_finalization_date = Some("2024-01-20T00:00:00.000Z".to_string());
        order.final_price = Some(2_050_000.0);

        let form = FinalizeForm::for_order(&order);
        assert!(form.state.is_closed());
        assert_eq!(form.state.date, Some(d(2024, 1, 20)));
        assert!(form.payload().is_ok());
    }
}
