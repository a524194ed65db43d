//! Price finalization state
//!
//! Each order carries a two-state flag `priceFinalizationStatus`. Closing it
//! stamps the finalization date and freezes that field; reopening clears the
//! date. There are no intermediate states and no timeout semantics.

use crate::error::{AppError, AppResult, ErrorCode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Wire value of the finalization flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PriceFinalizationStatus {
    #[default]
    Open,
    Closed,
}

impl PriceFinalizationStatus {
    #[inline]
    pub fn is_closed(&self) -> bool {
        matches!(self, PriceFinalizationStatus::Closed)
    }
}

/// Finalization state of one order: the flag plus its date
///
/// The transitions are the only way the pair changes together, so the
/// invariant "closed implies a stamped date" holds everywhere downstream.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceFinalization {
    pub status: PriceFinalizationStatus,
    pub date: Option<NaiveDate>,
}

impl PriceFinalization {
    /// Rebuild the state from wire fields
    pub fn from_wire(status: PriceFinalizationStatus, date: Option<NaiveDate>) -> Self {
        Self { status, date }
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.status.is_closed()
    }

    /// Transition `open → closed`: stamps `today` and freezes the date
    pub fn close(&mut self, today: NaiveDate) -> AppResult<()> {
        if self.is_closed() {
            return Err(AppError::new(ErrorCode::AlreadyFinalized));
        }
        self.status = PriceFinalizationStatus::Closed;
        self.date = Some(today);
        Ok(())
    }

    /// Transition `closed → open`: clears the date
    pub fn reopen(&mut self) -> AppResult<()> {
        if !self.is_closed() {
            return Err(AppError::new(ErrorCode::NotFinalized));
        }
        self.status = PriceFinalizationStatus::Open;
        self.date = None;
        Ok(())
    }

    /// Edit the tentative date; rejected while closed (the field is frozen)
    pub fn set_date(&mut self, date: NaiveDate) -> AppResult<()> {
        if self.is_closed() {
            return Err(AppError::with_message(
                ErrorCode::AlreadyFinalized,
                "finalization date is frozen while closed",
            ));
        }
        self.date = Some(date);
        Ok(())
    }

    /// While open, a finalization date is mandatory before the order saves
    pub fn validate_for_save(&self) -> AppResult<()> {
        if !self.is_closed() && self.date.is_none() {
            return Err(
                AppError::new(ErrorCode::FinalizationDateMissing).on_field("priceFinalizationDate")
            );
        }
        Ok(())
    }
}
