//! Order amount calculation using rust_decimal for precision
//!
//! This module provides precise decimal arithmetic for receivable amounts.
//! All calculations are done using `Decimal` internally, then converted to
//! `f64` for the wire. The single total-amount rule lives here; every form
//! recomputes through it instead of carrying its own copy.

use crate::error::{AppError, AppResult, ErrorCode};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum allowed monetary value (10^12, VND amounts run large)
const MAX_MONEY: f64 = 1_000_000_000_000.0;
/// Maximum allowed quantity per order line
const MAX_QUANTITY: f64 = 1_000_000.0;

/// VAT bracket as it travels on the wire (numeric code)
///
/// The code-to-rate mapping is fixed by the server:
/// 1 → 0%, 2 → 5%, 3 → 8%, 4 → 10%, 5 → KCT (exempt).
/// KCT ("không chịu thuế") multiplies like the 0% bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum VatCode {
    /// 0% bracket
    Zero = 1,
    /// 5% bracket
    Five = 2,
    /// 8% bracket
    Eight = 3,
    /// 10% bracket
    Ten = 4,
    /// KCT, not subject to VAT
    Exempt = 5,
}

impl VatCode {
    /// Get the numeric wire code
    #[inline]
    pub const fn code(&self) -> u8 {
        *self as u8
    }

    /// Multiplier applied to quantity × unit price
    pub const fn multiplier(&self) -> Decimal {
        match self {
            VatCode::Zero => Decimal::from_parts(100, 0, 0, false, 2),
            VatCode::Five => Decimal::from_parts(105, 0, 0, false, 2),
            VatCode::Eight => Decimal::from_parts(108, 0, 0, false, 2),
            VatCode::Ten => Decimal::from_parts(110, 0, 0, false, 2),
            VatCode::Exempt => Decimal::from_parts(100, 0, 0, false, 2),
        }
    }

    /// Display label for the bracket
    pub const fn label(&self) -> &'static str {
        match self {
            VatCode::Zero => "0%",
            VatCode::Five => "5%",
            VatCode::Eight => "8%",
            VatCode::Ten => "10%",
            VatCode::Exempt => "KCT",
        }
    }
}

impl From<VatCode> for u8 {
    #[inline]
    fn from(code: VatCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u8 to VatCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidVatCode(pub u8);

impl fmt::Display for InvalidVatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid VAT code: {}", self.0)
    }
}

impl std::error::Error for InvalidVatCode {}

impl TryFrom<u8> for VatCode {
    type Error = InvalidVatCode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(VatCode::Zero),
            2 => Ok(VatCode::Five),
            3 => Ok(VatCode::Eight),
            4 => Ok(VatCode::Ten),
            5 => Ok(VatCode::Exempt),
            _ => Err(InvalidVatCode(value)),
        }
    }
}

/// Order currency as it travels on the wire
///
/// 0 means USD; any other value is VND (canonically 1). The fallback is
/// deliberate, the server has shipped 1 and null-ish values for VND.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(into = "i32", from = "i32")]
pub enum Currency {
    Usd,
    #[default]
    Vnd,
}

impl Currency {
    /// Currency symbol for display
    pub const fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Vnd => "₫",
        }
    }
}

impl From<i32> for Currency {
    #[inline]
    fn from(value: i32) -> Self {
        if value == 0 { Currency::Usd } else { Currency::Vnd }
    }
}

impl From<Currency> for i32 {
    #[inline]
    fn from(currency: Currency) -> Self {
        match currency {
            Currency::Usd => 0,
            Currency::Vnd => 1,
        }
    }
}

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field_name: &str) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::with_message(
            ErrorCode::PriceInvalid,
            format!("{} must be a finite number, got {}", field_name, value),
        )
        .with_detail("field", field_name));
    }
    Ok(())
}

/// Convert f64 to Decimal for calculation
///
/// Input values should be pre-validated via `require_finite()` at the
/// boundary. If NaN/Infinity somehow reaches here, logs an error and returns
/// ZERO to avoid silent data corruption in receivable calculations.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for the wire, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        // SAFETY: Decimal rounded to 2dp with inputs bounded by MAX_MONEY and
        // MAX_QUANTITY at the boundary is always within f64 representable range
        .expect("Decimal rounded to 2dp is always representable as f64")
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: f64, b: f64) -> bool {
    let diff = (to_decimal(a) - to_decimal(b)).abs();
    diff < MONEY_TOLERANCE
}

/// Calculate the receivable total for one order line
///
/// Formula: max(0, quantity × unit_price × vat_multiplier − deposit)
///
/// The result is rounded to 2 decimal places and never negative; a deposit
/// larger than the taxed amount clamps the total to zero.
pub fn calculate_total_amount(
    quantity: f64,
    unit_price: f64,
    vat: VatCode,
    deposit: Option<f64>,
) -> Decimal {
    let gross = to_decimal(quantity) * to_decimal(unit_price) * vat.multiplier();
    let deposit = deposit.map(to_decimal).unwrap_or(Decimal::ZERO);

    (gross - deposit)
        .max(Decimal::ZERO)
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

// ==================== Field validators ====================

/// Validate an order line quantity
pub fn validate_quantity(quantity: f64) -> AppResult<()> {
    require_finite(quantity, "quantity")?;
    if quantity <= 0.0 {
        return Err(AppError::new(ErrorCode::QuantityNotPositive).on_field("quantity"));
    }
    if quantity > MAX_QUANTITY {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!(
                "quantity exceeds maximum allowed ({}), got {}",
                MAX_QUANTITY, quantity
            ),
        )
        .on_field("quantity"));
    }
    Ok(())
}

/// Validate a unit price
pub fn validate_unit_price(unit_price: f64) -> AppResult<()> {
    require_finite(unit_price, "unitPrice")?;
    if unit_price <= 0.0 {
        return Err(AppError::new(ErrorCode::UnitPriceNotPositive).on_field("unitPrice"));
    }
    if unit_price > MAX_MONEY {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!(
                "unitPrice exceeds maximum allowed ({}), got {}",
                MAX_MONEY, unit_price
            ),
        )
        .on_field("unitPrice"));
    }
    Ok(())
}

/// Validate an optional deposit
pub fn validate_deposit(deposit: Option<f64>) -> AppResult<()> {
    if let Some(d) = deposit {
        require_finite(d, "deposit")?;
        if d < 0.0 {
            return Err(AppError::with_message(
                ErrorCode::ValueOutOfRange,
                format!("deposit must be non-negative, got {}", d),
            )
            .on_field("deposit"));
        }
        if d > MAX_MONEY {
            return Err(AppError::with_message(
                ErrorCode::ValueOutOfRange,
                format!("deposit exceeds maximum allowed ({}), got {}", MAX_MONEY, d),
            )
            .on_field("deposit"));
        }
    }
    Ok(())
}

/// Validate a finalized unit price
pub fn validate_final_price(final_price: f64) -> AppResult<()> {
    require_finite(final_price, "finalPrice")?;
    if final_price <= 0.0 {
        return Err(AppError::new(ErrorCode::FinalPriceNotPositive).on_field("finalPrice"));
    }
    if final_price > MAX_MONEY {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!(
                "finalPrice exceeds maximum allowed ({}), got {}",
                MAX_MONEY, final_price
            ),
        )
        .on_field("finalPrice"));
    }
    Ok(())
}

/// Validate a collected payment amount
pub fn validate_payment_amount(amount: f64) -> AppResult<()> {
    require_finite(amount, "amount")?;
    if amount <= 0.0 {
        return Err(AppError::new(ErrorCode::PaymentAmountInvalid).on_field("amount"));
    }
    if amount > MAX_MONEY {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!(
                "payment amount exceeds maximum allowed ({}), got {}",
                MAX_MONEY, amount
            ),
        )
        .on_field("amount"));
    }
    Ok(())
}

/// Pricing inputs of one order line
///
/// `total` is deliberately not a field: it is derived, never stored, so a
/// stale copy cannot disagree with the inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrderPricing {
    pub quantity: f64,
    pub unit_price: f64,
    pub deposit: Option<f64>,
    pub vat: Option<VatCode>,
}

impl OrderPricing {
    /// Recompute the displayed total
    ///
    /// Returns `None` while the inputs cannot produce a total: no VAT
    /// bracket selected yet, or a quantity/unit price that is missing,
    /// non-finite or not positive. The total stays deferred and
    /// submission is blocked by [`Self::validate`].
    pub fn recompute(&self) -> Option<f64> {
        let vat = self.vat?;
        if !self.quantity.is_finite() || self.quantity <= 0.0 {
            return None;
        }
        if !self.unit_price.is_finite() || self.unit_price <= 0.0 {
            return None;
        }
        Some(to_f64(calculate_total_amount(
            self.quantity,
            self.unit_price,
            vat,
            self.deposit,
        )))
    }

    /// Validate for submission and return the receivable total
    pub fn validate(&self) -> AppResult<Decimal> {
        validate_quantity(self.quantity)?;
        validate_unit_price(self.unit_price)?;
        validate_deposit(self.deposit)?;

        let Some(vat) = self.vat else {
            return Err(AppError::new(ErrorCode::VatNotSelected).on_field("vat"));
        };

        let total = calculate_total_amount(self.quantity, self.unit_price, vat, self.deposit);
        if total <= Decimal::ZERO {
            return Err(AppError::new(ErrorCode::TotalAmountNotPositive).on_field("totalAmount"));
        }
        Ok(total)
    }
}
