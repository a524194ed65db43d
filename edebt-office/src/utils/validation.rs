//! Input validation helpers
//!
//! Centralized text length constants and validation functions for the
//! office forms. Limits mirror what the server-side schema accepts;
//! lengths count characters, not bytes, since most input is Vietnamese.

use shared::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Contract numbers as printed on the paper contract
pub const MAX_CONTRACT_NUMBER_LEN: usize = 20;

/// Product names on order lines
pub const MAX_PRODUCT_NAME_LEN: usize = 50;

/// Order numbers (internal DH-xxxx references)
pub const MAX_ORDER_NUMBER_LEN: usize = 50;

/// Customer and person names
pub const MAX_NAME_LEN: usize = 200;

/// Vietnamese tax codes (10 or 13 digits plus separators)
pub const MAX_TAX_CODE_LEN: usize = 20;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Notes on order lines
pub const MAX_NOTE_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    if value.chars().count() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.chars().count()
        ))
        .on_field(field));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.chars().count() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.chars().count()
        ))
        .on_field(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Thép cuộn", "productName", 50).is_ok());

        let err = validate_required_text("  ", "productName", 50).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);

        let err = validate_required_text(&"x".repeat(51), "productName", 50).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(
            err.details.unwrap().get("field").unwrap(),
            &serde_json::json!("productName")
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 20 Vietnamese characters, far more than 20 bytes
        let name = "ă".repeat(20);
        assert!(validate_required_text(&name, "contractNumber", 20).is_ok());
        assert!(validate_required_text(&format!("{name}x"), "contractNumber", 20).is_err());
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(&None, "note", 10).is_ok());
        assert!(validate_optional_text(&Some("ok".to_string()), "note", 10).is_ok());
        assert!(validate_optional_text(&Some("x".repeat(11)), "note", 10).is_err());
    }
}
