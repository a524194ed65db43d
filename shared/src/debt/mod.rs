//! Debt status classification and payment ledger arithmetic
//!
//! The server's `status` field is canonical for fetched orders; the
//! classifier here exists for form-side previews and for recomputing the
//! overdue day count at display time. Day counts are whole calendar days
//! against midnight-normalized dates, never negative.

use crate::error::{AppError, AppResult, ErrorCode};
use crate::finalization::PriceFinalizationStatus;
use crate::models::{Order, PaidEntry};
use crate::pricing::{MONEY_TOLERANCE, to_decimal, to_f64, validate_payment_amount};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Days ahead of the due date that count as "coming due"
pub const COMING_DUE_WINDOW_DAYS: i64 = 7;

/// Debt status of one order
///
/// Travels as a kebab-case string in payload bodies and as a numeric code
/// in the status query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DebtStatus {
    /// Due date more than 7 days out
    NotDueYet,
    /// Due date within the next 7 days
    ComingDue,
    /// Due today
    Due,
    /// Past the due date
    Overdue,
    /// Fully collected
    Paid,
}

impl DebtStatus {
    /// Numeric code used by the status query parameter (0/absent means all)
    pub const fn query_code(&self) -> u8 {
        match self {
            DebtStatus::ComingDue => 1,
            DebtStatus::Due => 2,
            DebtStatus::Overdue => 3,
            DebtStatus::Paid => 4,
            DebtStatus::NotDueYet => 5,
        }
    }

    /// Reverse of [`Self::query_code`]; `None` for 0 or unknown codes
    pub fn from_query_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(DebtStatus::ComingDue),
            2 => Some(DebtStatus::Due),
            3 => Some(DebtStatus::Overdue),
            4 => Some(DebtStatus::Paid),
            5 => Some(DebtStatus::NotDueYet),
            _ => None,
        }
    }

    /// Display ordering: most urgent first
    pub const fn sort_rank(&self) -> u8 {
        match self {
            DebtStatus::Overdue => 0,
            DebtStatus::Due => 1,
            DebtStatus::ComingDue => 2,
            DebtStatus::NotDueYet => 3,
            DebtStatus::Paid => 4,
        }
    }

    /// Vietnamese display label
    pub const fn label(&self) -> &'static str {
        match self {
            DebtStatus::NotDueYet => "Chưa đến hạn",
            DebtStatus::ComingDue => "Sắp đến hạn",
            DebtStatus::Due => "Đến hạn",
            DebtStatus::Overdue => "Quá hạn",
            DebtStatus::Paid => "Đã thanh toán",
        }
    }
}

/// Parse a wire date tolerantly
///
/// Accepts both bare `YYYY-MM-DD` and full ISO instants by reading the date
/// prefix. Malformed input yields `None`; day-count display paths skip
/// silently rather than fail.
pub fn parse_wire_date(value: &str) -> Option<NaiveDate> {
    let prefix = value.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

/// Classify one order line by its due date
///
/// `fully_paid` wins over every date rule. Otherwise the whole-day distance
/// `d = due_date - today` decides: `d > 7` not due yet, `0 < d <= 7` coming
/// due, `d == 0` due, `d < 0` overdue.
pub fn classify(due_date: NaiveDate, today: NaiveDate, fully_paid: bool) -> DebtStatus {
    if fully_paid {
        return DebtStatus::Paid;
    }

    let days = (due_date - today).num_days();
    if days > COMING_DUE_WINDOW_DAYS {
        DebtStatus::NotDueYet
    } else if days > 0 {
        DebtStatus::ComingDue
    } else if days == 0 {
        DebtStatus::Due
    } else {
        DebtStatus::Overdue
    }
}

/// Whole days past the due date, never negative
pub fn overdue_day_count(due_date: NaiveDate, today: NaiveDate) -> i64 {
    (today - due_date).num_days().max(0)
}

/// Classify and count overdue days in one pass
pub fn classify_with_overdue(
    due_date: NaiveDate,
    today: NaiveDate,
    fully_paid: bool,
) -> (DebtStatus, i64) {
    let status = classify(due_date, today, fully_paid);
    let overdue = match status {
        DebtStatus::Overdue => overdue_day_count(due_date, today),
        _ => 0,
    };
    (status, overdue)
}

/// Overdue day count for live display of a listing row
///
/// The server-sent `status` stays canonical; only the day count is
/// refreshed so an open listing does not keep showing yesterday's
/// number. An unparseable due date falls back to the server-sent count.
pub fn display_overdue_days(order: &Order, today: NaiveDate) -> i64 {
    if order.status != DebtStatus::Overdue {
        return 0;
    }
    match parse_wire_date(&order.due_date) {
        Some(due) => overdue_day_count(due, today),
        None => order.overdue_day.unwrap_or(0),
    }
}

/// Sum collected payments with precise arithmetic
pub fn sum_payments(history: &[PaidEntry]) -> Decimal {
    history.iter().map(|p| to_decimal(p.amount)).sum()
}

/// Outstanding amount of one order
///
/// A finalized order with a `finalAmount` owes `finalAmount − Σ(paid)`;
/// otherwise a present `tempAmount` owes `tempAmount − Σ(paid)`; otherwise
/// the server-sent `remaining` stands as-is.
pub fn outstanding_amount(order: &Order) -> f64 {
    let finalized = matches!(
        order.price_finalization_status,
        Some(PriceFinalizationStatus::Closed)
    );

    let basis = match (finalized, order.final_amount, order.temp_amount) {
        (true, Some(final_amount), _) => final_amount,
        (_, _, Some(temp_amount)) => temp_amount,
        _ => return order.remaining,
    };

    to_f64(to_decimal(basis) - sum_payments(&order.paid_history))
}

/// Validate a batch of new payment amounts against the outstanding amount
///
/// Each amount must be a valid payment on its own, and their sum must not
/// exceed `outstanding` (within the monetary tolerance).
pub fn validate_new_payments(amounts: &[f64], outstanding: f64) -> AppResult<()> {
    let mut total = Decimal::ZERO;
    for amount in amounts {
        validate_payment_amount(*amount)?;
        total += to_decimal(*amount);
    }

    if total > to_decimal(outstanding) + MONEY_TOLERANCE {
        return Err(AppError::new(ErrorCode::PaymentExceedsOutstanding)
            .with_detail("outstanding", outstanding)
            .with_detail("requested", to_f64(total)));
    }
    Ok(())
}
