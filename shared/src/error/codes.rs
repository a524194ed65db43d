//! Unified error codes for the E-DEBT workspace
//!
//! This module defines all error codes used across the client SDK and the
//! back-office application. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication and session errors
//! - 2xxx: Customer errors
//! - 3xxx: Contract and order errors
//! - 4xxx: Payment errors
//! - 5xxx: Pricing and finalization errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth / Session ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Session has expired
    SessionExpired = 1005,
    /// Page is not in the session's permitted list
    PageNotPermitted = 1006,

    // ==================== 2xxx: Customer ====================
    /// Customer not found
    CustomerNotFound = 2001,
    /// Customer name already exists
    CustomerNameExists = 2002,
    /// Sales person not found
    SalesPersonNotFound = 2003,

    // ==================== 3xxx: Contract / Order ====================
    /// Contract not found
    ContractNotFound = 3001,
    /// Contract number exceeds the length limit
    ContractNumberTooLong = 3002,
    /// Order not found
    OrderNotFound = 3003,
    /// Product name exceeds the length limit
    ProductNameTooLong = 3004,
    /// Quantity must be greater than zero
    QuantityNotPositive = 3005,
    /// Unit price must be greater than zero
    UnitPriceNotPositive = 3006,
    /// VAT bracket has not been selected
    VatNotSelected = 3007,
    /// Due date must fall strictly after the sale date
    DueDateNotAfterSaleDate = 3008,
    /// Derived total amount must be greater than zero
    TotalAmountNotPositive = 3009,
    /// Sale date is missing
    SaleDateMissing = 3010,

    // ==================== 4xxx: Payment ====================
    /// Payment processing failed
    PaymentFailed = 4001,
    /// New payments exceed the outstanding amount
    PaymentExceedsOutstanding = 4002,
    /// Collection date is missing
    CollectionDateMissing = 4003,
    /// Payment amount is invalid
    PaymentAmountInvalid = 4004,

    // ==================== 5xxx: Pricing / Finalization ====================
    /// Price value is invalid (non-finite or out of bounds)
    PriceInvalid = 5001,
    /// Price has already been finalized
    AlreadyFinalized = 5002,
    /// Price has not been finalized yet
    NotFinalized = 5003,
    /// Finalization date is missing
    FinalizationDateMissing = 5004,
    /// Final price must be greater than zero
    FinalPriceNotPositive = 5005,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Network error
    NetworkError = 9002,
    /// Operation timeout
    TimeoutError = 9003,
    /// Configuration error
    ConfigError = 9004,
    /// Session store error (read/write of the session file)
    SessionStoreError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth / Session
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid username or password",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",
            ErrorCode::SessionExpired => "Session has expired",
            ErrorCode::PageNotPermitted => "Page is not permitted for this session",

            // Customer
            ErrorCode::CustomerNotFound => "Customer not found",
            ErrorCode::CustomerNameExists => "Customer name already exists",
            ErrorCode::SalesPersonNotFound => "Sales person not found",

            // Contract / Order
            ErrorCode::ContractNotFound => "Contract not found",
            ErrorCode::ContractNumberTooLong => "Contract number exceeds the length limit",
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::ProductNameTooLong => "Product name exceeds the length limit",
            ErrorCode::QuantityNotPositive => "Quantity must be greater than zero",
            ErrorCode::UnitPriceNotPositive => "Unit price must be greater than zero",
            ErrorCode::VatNotSelected => "VAT bracket has not been selected",
            ErrorCode::DueDateNotAfterSaleDate => "Due date must fall after the sale date",
            ErrorCode::TotalAmountNotPositive => "Total amount must be greater than zero",
            ErrorCode::SaleDateMissing => "Sale date is missing",

            // Payment
            ErrorCode::PaymentFailed => "Payment processing failed",
            ErrorCode::PaymentExceedsOutstanding => {
                "New payments exceed the outstanding amount"
            }
            ErrorCode::CollectionDateMissing => "Collection date is missing",
            ErrorCode::PaymentAmountInvalid => "Payment amount is invalid",

            // Pricing / Finalization
            ErrorCode::PriceInvalid => "Price value is invalid",
            ErrorCode::AlreadyFinalized => "Price has already been finalized",
            ErrorCode::NotFinalized => "Price has not been finalized yet",
            ErrorCode::FinalizationDateMissing => "Finalization date is missing",
            ErrorCode::FinalPriceNotPositive => "Final price must be greater than zero",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::SessionStoreError => "Session store error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth / Session
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1005 => Ok(ErrorCode::SessionExpired),
            1006 => Ok(ErrorCode::PageNotPermitted),

            // Customer
            2001 => Ok(ErrorCode::CustomerNotFound),
            2002 => Ok(ErrorCode::CustomerNameExists),
            2003 => Ok(ErrorCode::SalesPersonNotFound),

            // Contract / Order
            3001 => Ok(ErrorCode::ContractNotFound),
            3002 => Ok(ErrorCode::ContractNumberTooLong),
            3003 => Ok(ErrorCode::OrderNotFound),
            3004 => Ok(ErrorCode::ProductNameTooLong),
            3005 => Ok(ErrorCode::QuantityNotPositive),
            3006 => Ok(ErrorCode::UnitPriceNotPositive),
            3007 => Ok(ErrorCode::VatNotSelected),
            3008 => Ok(ErrorCode::DueDateNotAfterSaleDate),
            3009 => Ok(ErrorCode::TotalAmountNotPositive),
            3010 => Ok(ErrorCode::SaleDateMissing),

            // Payment
            4001 => Ok(ErrorCode::PaymentFailed),
            4002 => Ok(ErrorCode::PaymentExceedsOutstanding),
            4003 => Ok(ErrorCode::CollectionDateMissing),
            4004 => Ok(ErrorCode::PaymentAmountInvalid),

            // Pricing / Finalization
            5001 => Ok(ErrorCode::PriceInvalid),
            5002 => Ok(ErrorCode::AlreadyFinalized),
            5003 => Ok(ErrorCode::NotFinalized),
            5004 => Ok(ErrorCode::FinalizationDateMissing),
            5005 => Ok(ErrorCode::FinalPriceNotPositive),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::NetworkError),
            9003 => Ok(ErrorCode::TimeoutError),
            9004 => Ok(ErrorCode::ConfigError),
            9005 => Ok(ErrorCode::SessionStoreError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        // General
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::Unknown.code(), 1);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::AlreadyExists.code(), 4);
        assert_eq!(ErrorCode::InvalidRequest.code(), 5);
        assert_eq!(ErrorCode::InvalidFormat.code(), 6);
        assert_eq!(ErrorCode::RequiredField.code(), 7);
        assert_eq!(ErrorCode::ValueOutOfRange.code(), 8);

        // Auth / Session
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::InvalidCredentials.code(), 1002);
        assert_eq!(ErrorCode::TokenExpired.code(), 1003);
        assert_eq!(ErrorCode::TokenInvalid.code(), 1004);
        assert_eq!(ErrorCode::SessionExpired.code(), 1005);
        assert_eq!(ErrorCode::PageNotPermitted.code(), 1006);

        // Customer
        assert_eq!(ErrorCode::CustomerNotFound.code(), 2001);
        assert_eq!(ErrorCode::CustomerNameExists.code(), 2002);
        assert_eq!(ErrorCode::SalesPersonNotFound.code(), 2003);

        // Contract / Order
        assert_eq!(ErrorCode::ContractNotFound.code(), 3001);
        assert_eq!(ErrorCode::ContractNumberTooLong.code(), 3002);
        assert_eq!(ErrorCode::OrderNotFound.code(), 3003);
        assert_eq!(ErrorCode::ProductNameTooLong.code(), 3004);
        assert_eq!(ErrorCode::QuantityNotPositive.code(), 3005);
        assert_eq!(ErrorCode::UnitPriceNotPositive.code(), 3006);
        assert_eq!(ErrorCode::VatNotSelected.code(), 3007);
        assert_eq!(ErrorCode::DueDateNotAfterSaleDate.code(), 3008);
        assert_eq!(ErrorCode::TotalAmountNotPositive.code(), 3009);
        assert_eq!(ErrorCode::SaleDateMissing.code(), 3010);

        // Payment
        assert_eq!(ErrorCode::PaymentFailed.code(), 4001);
        assert_eq!(ErrorCode::PaymentExceedsOutstanding.code(), 4002);
        assert_eq!(ErrorCode::CollectionDateMissing.code(), 4003);
        assert_eq!(ErrorCode::PaymentAmountInvalid.code(), 4004);

        // Pricing / Finalization
        assert_eq!(ErrorCode::PriceInvalid.code(), 5001);
        assert_eq!(ErrorCode::AlreadyFinalized.code(), 5002);
        assert_eq!(ErrorCode::NotFinalized.code(), 5003);
        assert_eq!(ErrorCode::FinalizationDateMissing.code(), 5004);
        assert_eq!(ErrorCode::FinalPriceNotPositive.code(), 5005);

        // System
        assert_eq!(ErrorCode::InternalError.code(), 9001);
        assert_eq!(ErrorCode::NetworkError.code(), 9002);
        assert_eq!(ErrorCode::TimeoutError.code(), 9003);
        assert_eq!(ErrorCode::ConfigError.code(), 9004);
        assert_eq!(ErrorCode::SessionStoreError.code(), 9005);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::Unknown.is_success());
        assert!(!ErrorCode::NotFound.is_success());
        assert!(!ErrorCode::InternalError.is_success());
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(1001), Ok(ErrorCode::NotAuthenticated));
        assert_eq!(ErrorCode::try_from(3003), Ok(ErrorCode::OrderNotFound));
        assert_eq!(
            ErrorCode::try_from(4002),
            Ok(ErrorCode::PaymentExceedsOutstanding)
        );
        assert_eq!(ErrorCode::try_from(5002), Ok(ErrorCode::AlreadyFinalized));
        assert_eq!(ErrorCode::try_from(9001), Ok(ErrorCode::InternalError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
        assert_eq!(ErrorCode::try_from(6001), Err(InvalidErrorCode(6001)));
    }

    #[test]
    fn test_from_error_code_to_u16() {
        let code: u16 = ErrorCode::Success.into();
        assert_eq!(code, 0);

        let code: u16 = ErrorCode::NotAuthenticated.into();
        assert_eq!(code, 1001);

        let code: u16 = ErrorCode::InternalError.into();
        assert_eq!(code, 9001);
    }

    #[test]
    fn test_serialize() {
        let code = ErrorCode::NotFound;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "3");

        let code = ErrorCode::OrderNotFound;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "3003");

        let code = ErrorCode::Success;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "0");
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("0").unwrap();
        assert_eq!(code, ErrorCode::Success);

        let code: ErrorCode = serde_json::from_str("3").unwrap();
        assert_eq!(code, ErrorCode::NotFound);

        let code: ErrorCode = serde_json::from_str("3003").unwrap();
        assert_eq!(code, ErrorCode::OrderNotFound);

        let code: ErrorCode = serde_json::from_str("9001").unwrap();
        assert_eq!(code, ErrorCode::InternalError);
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<ErrorCode, _> = serde_json::from_str("999");
        assert!(result.is_err());

        let result: Result<ErrorCode, _> = serde_json::from_str("10000");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::Success), "0");
        assert_eq!(format!("{}", ErrorCode::NotFound), "3");
        assert_eq!(format!("{}", ErrorCode::OrderNotFound), "3003");
        assert_eq!(format!("{}", ErrorCode::InternalError), "9001");
    }

    #[test]
    fn test_message() {
        assert_eq!(
            ErrorCode::Success.message(),
            "Operation completed successfully"
        );
        assert_eq!(ErrorCode::NotFound.message(), "Resource not found");
        assert_eq!(ErrorCode::OrderNotFound.message(), "Order not found");
        assert_eq!(
            ErrorCode::VatNotSelected.message(),
            "VAT bracket has not been selected"
        );
        assert_eq!(ErrorCode::InternalError.message(), "Internal error");
    }

    #[test]
    fn test_invalid_error_code_display() {
        let err = InvalidErrorCode(999);
        assert_eq!(format!("{}", err), "invalid error code: 999");
    }

    #[test]
    fn test_roundtrip() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::NotAuthenticated,
            ErrorCode::CustomerNotFound,
            ErrorCode::VatNotSelected,
            ErrorCode::PaymentExceedsOutstanding,
            ErrorCode::AlreadyFinalized,
            ErrorCode::InternalError,
        ];

        for code in codes {
            let json = serde_json::to_string(&code).unwrap();
            let parsed: ErrorCode = serde_json::from_str(&json).unwrap();
            assert_eq!(code, parsed);
        }
    }

    #[test]
    fn test_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(ErrorCode::Success);
        set.insert(ErrorCode::NotFound);
        set.insert(ErrorCode::Success); // Duplicate

        assert_eq!(set.len(), 2);
        assert!(set.contains(&ErrorCode::Success));
        assert!(set.contains(&ErrorCode::NotFound));
    }
}
