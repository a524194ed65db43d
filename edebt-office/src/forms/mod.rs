//! Form controllers behind the office pages
//!
//! Each controller owns its draft state, recomputes derived fields on
//! edit and validates everything before a payload is assembled. Errors
//! carry the wire field name in their details so callers can surface
//! them next to the right input.

pub mod contract_form;
pub mod customer_form;
pub mod debt_list;
pub mod finalize_form;
pub mod order_form;
pub mod payment_form;

pub use contract_form::ContractForm;
pub use customer_form::CustomerForm;
pub use debt_list::DebtList;
pub use finalize_form::FinalizeForm;
pub use order_form::{OrderForm, OrderItemDraft};
pub use payment_form::{PaymentDraft, PaymentForm};

/// Validation outcome of a whole form: every failing field at once
pub type FieldErrors = Vec<shared::AppError>;

/// Collapse field errors into one client-side validation error
pub(crate) fn join_errors(errors: FieldErrors) -> edebt_client::ClientError {
    let joined = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    edebt_client::ClientError::Validation(joined)
}

/// Contract header checks shared by the order and contract forms
pub(crate) fn validate_contract_header(
    contract_number: &str,
    customer_id: Option<i64>,
    sales_id: Option<i64>,
) -> FieldErrors {
    use crate::utils::validation::MAX_CONTRACT_NUMBER_LEN;
    use shared::{AppError, ErrorCode};

    let mut errors = Vec::new();

    if contract_number.trim().is_empty() {
        errors.push(AppError::required("contractNumber"));
    } else if contract_number.chars().count() > MAX_CONTRACT_NUMBER_LEN {
        errors.push(AppError::new(ErrorCode::ContractNumberTooLong).on_field("contractNumber"));
    }

    if customer_id.is_none() {
        errors.push(AppError::required("customerId"));
    }
    if sales_id.is_none() {
        errors.push(AppError::required("salesId"));
    }

    errors
}
