//! New-customer form

use crate::forms::{FieldErrors, join_errors};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_TAX_CODE_LEN, validate_optional_text,
    validate_required_text,
};
use edebt_client::{ClientResult, HttpClient};
use shared::AppError;
use shared::models::{CustomerCreate, User};

/// The customer entry page
///
/// Tax code and address are optional; the wire payload sends them as
/// empty strings when blank.
#[derive(Debug, Clone, Default)]
pub struct CustomerForm {
    pub customer_name: String,
    pub tax_code: Option<String>,
    pub address: Option<String>,
    /// Sales person responsible for this customer
    pub sale_id: Option<i64>,
}

impl CustomerForm {
    /// Assign the responsible sales person
    pub fn set_sales_person(&mut self, user: &User) {
        self.sale_id = Some(user.user_id);
    }

    /// Collect every field error on the form
    pub fn validate(&self) -> FieldErrors {
        let mut errors = Vec::new();

        if let Err(e) = validate_required_text(&self.customer_name, "customerName", MAX_NAME_LEN) {
            errors.push(e);
        }
        if let Err(e) = validate_optional_text(&self.tax_code, "taxCode", MAX_TAX_CODE_LEN) {
            errors.push(e);
        }
        if let Err(e) = validate_optional_text(&self.address, "address", MAX_ADDRESS_LEN) {
            errors.push(e);
        }
        if self.sale_id.is_none() {
            errors.push(AppError::required("saleID"));
        }

        errors
    }

    /// Assemble the creation payload
    pub fn payload(&self) -> Result<CustomerCreate, FieldErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        let Some(sale_id) = self.sale_id else {
            return Err(vec![AppError::required("saleID")]);
        };

        Ok(CustomerCreate {
            sale_id,
            customer_name: self.customer_name.trim().to_string(),
            tax_code: self.tax_code.as_deref().unwrap_or("").trim().to_string(),
            address: self.address.as_deref().unwrap_or("").trim().to_string(),
            is_delete: 0,
        })
    }

    /// Validate, assemble and create the customer
    pub async fn submit(&self, client: &HttpClient) -> ClientResult<()> {
        let payload = self.payload().map_err(join_errors)?;
        client.insert_customer(&payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    fn sample_user() -> User {
        User {
            user_id: 3,
            email: "binh.tran@example.vn".to_string(),
            full_name: "Trần Văn Bình".to_string(),
        }
    }

    #[test]
    fn test_payload() {
        let mut form = CustomerForm {
            customer_name: "  Công ty TNHH Phương Nam  ".to_string(),
            tax_code: Some("0312345678".to_string()),
            address: None,
            sale_id: None,
        };
        form.set_sales_person(&sample_user());

        let payload = form.payload().unwrap();
        assert_eq!(payload.customer_name, "Công ty TNHH Phương Nam");
        assert_eq!(payload.tax_code, "0312345678");
        assert_eq!(payload.address, "");
        assert_eq!(payload.sale_id, 3);
        assert_eq!(payload.is_delete, 0);
    }

    #[test]
    fn test_blank_form_reports_name_and_sales_person() {
        let errors = CustomerForm::default().validate();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.code == ErrorCode::RequiredField));
    }

    #[test]
    fn test_tax_code_length_limit() {
        let mut form = CustomerForm {
            customer_name: "Công ty A".to_string(),
            tax_code: Some("9".repeat(21)),
            ..CustomerForm::default()
        };
        form.set_sales_person(&sample_user());

        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::ValidationFailed);
    }
}
