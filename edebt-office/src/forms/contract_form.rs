//! Add-contract form
//!
//! The full contract entry page: one header, any number of order lines.
//! Line errors carry an `item` index detail so the caller can highlight
//! the offending row.

use crate::forms::order_form::OrderItemDraft;
use crate::forms::{FieldErrors, join_errors, validate_contract_header};
use edebt_client::{ClientResult, HttpClient};
use shared::AppError;
use shared::models::{ContractCreate, Customer};

/// The contract entry page: header plus order lines
#[derive(Debug, Clone)]
pub struct ContractForm {
    pub contract_number: String,
    pub customer_id: Option<i64>,
    pub sales_id: Option<i64>,
    /// Display-only name of the sales person, filled from the customer
    pub sales_person: String,
    /// Product segment of the contract (1 = metals, 2 = wood and plastics)
    pub contract_status: i32,
    pub items: Vec<OrderItemDraft>,
}

impl ContractForm {
    /// Fresh form with a single blank line
    pub fn new() -> Self {
        Self {
            contract_number: String::new(),
            customer_id: None,
            sales_id: None,
            sales_person: String::new(),
            contract_status: 1,
            items: vec![OrderItemDraft::default()],
        }
    }

    /// Select a customer; its assigned sales person follows
    pub fn set_customer(&mut self, customer: &Customer) {
        self.customer_id = Some(customer.customer_id);
        self.sales_id = Some(customer.sale_id);
        self.sales_person = customer.full_name.clone();
    }

    /// Append a blank order line
    pub fn add_item(&mut self) {
        self.items.push(OrderItemDraft::default());
    }

    /// Drop an order line; out-of-range indexes are ignored
    pub fn remove_item(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Collect every field error across the header and all lines
    pub fn validate(&self) -> FieldErrors {
        let mut errors =
            validate_contract_header(&self.contract_number, self.customer_id, self.sales_id);

        if self.items.is_empty() {
            errors.push(AppError::required("orderItems"));
        }
        for (index, item) in self.items.iter().enumerate() {
            errors.extend(
                item.validate()
                    .into_iter()
                    .map(|e| e.with_detail("item", index as i64)),
            );
        }

        errors
    }

    /// Assemble the creation payload
    pub fn payload(&self) -> Result<ContractCreate, FieldErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        let (Some(customer_id), Some(sales_id)) = (self.customer_id, self.sales_id) else {
            return Err(vec![AppError::required("customerId")]);
        };

        let mut order_items = Vec::with_capacity(self.items.len());
        for item in &self.items {
            order_items.push(item.to_item(None).map_err(|e| vec![e])?);
        }

        Ok(ContractCreate {
            contract_number: self.contract_number.trim().to_string(),
            customer_id,
            sales_id,
            contract_status: self.contract_status,
            is_delete: 0,
            order_items,
        })
    }

    /// Validate, assemble and create the contract with all its orders
    pub async fn submit(&self, client: &HttpClient) -> ClientResult<()> {
        let payload = self.payload().map_err(join_errors)?;
        client.create_contract_with_order(&payload).await
    }
}

impl Default for ContractForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::ErrorCode;
    use shared::pricing::VatCode;

    fn valid_item(product: &str) -> OrderItemDraft {
        let mut item = OrderItemDraft {
            product_name: product.to_string(),
            order_number: "DH-0042".to_string(),
            sales_date: "2024-01-10".to_string(),
            due_date: "2024-02-09".to_string(),
            quantity: Some(50.0),
            unit_price: Some(2_000_000.0),
            vat: Some(VatCode::Eight),
            ..OrderItemDraft::default()
        };
        item.set_finalization_date(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap())
            .unwrap();
        item.recompute();
        item
    }

    fn sample_customer() -> Customer {
        Customer {
            customer_id: 12,
            customer_name: "Công ty CP Gỗ Việt".to_string(),
            sale_id: 4,
            full_name: "Nguyễn Thị Hoa".to_string(),
            address: Some("KCN Sóng Thần, Bình Dương".to_string()),
            tax_code: Some("0301234567".to_string()),
        }
    }

    fn filled_form() -> ContractForm {
        let mut form = ContractForm::new();
        form.contract_number = "HD-2024-017".to_string();
        form.set_customer(&sample_customer());
        form.items = vec![valid_item("Ván MDF 17mm"), valid_item("Nhựa PVC tấm")];
        form
    }

    #[test]
    fn test_payload_carries_every_line() {
        let payload = filled_form().payload().unwrap();
        assert_eq!(payload.customer_id, 12);
        assert_eq!(payload.sales_id, 4);
        assert_eq!(payload.order_items.len(), 2);
        assert_eq!(payload.order_items[0].product_name, "Ván MDF 17mm");
        assert_eq!(payload.order_items[1].product_name, "Nhựa PVC tấm");
    }

    #[test]
    fn test_line_errors_carry_their_index() {
        let mut form = filled_form();
        form.items[1].product_name = String::new();

        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        let details = errors[0].details.clone().unwrap();
        assert_eq!(details.get("item").unwrap(), &serde_json::json!(1));
    }

    #[test]
    fn test_empty_line_list_is_rejected() {
        let mut form = filled_form();
        form.items.clear();

        let errors = form.validate();
        assert!(errors.iter().any(|e| e.code == ErrorCode::RequiredField));
    }

    #[test]
    fn test_add_and_remove_lines() {
        let mut form = ContractForm::new();
        assert_eq!(form.items.len(), 1);

        form.add_item();
        assert_eq!(form.items.len(), 2);

        form.remove_item(0);
        assert_eq!(form.items.len(), 1);

        // out of range is a no-op
        form.remove_item(9);
        assert_eq!(form.items.len(), 1);
    }
}
