//! Add-order form
//!
//! The quick-add dialog: a contract header plus a single order line. The
//! line total is read-only and recomputed on every pricing edit; nothing
//! reaches the wire until every field validates.

use crate::forms::{FieldErrors, join_errors, validate_contract_header};
use crate::utils::time;
use crate::utils::validation::{
    MAX_NOTE_LEN, MAX_ORDER_NUMBER_LEN, MAX_PRODUCT_NAME_LEN, validate_optional_text,
};
use chrono::NaiveDate;
use edebt_client::{ClientResult, HttpClient};
use shared::finalization::PriceFinalization;
use shared::models::{ContractCreate, Customer, OrderItemCreate};
use shared::pricing::{
    Currency, OrderPricing, VatCode, to_f64, validate_deposit, validate_quantity,
    validate_unit_price,
};
use shared::{AppError, AppResult, ErrorCode};

/// One order line while it is being edited
///
/// Numeric inputs stay `Option` until the user types something; dates are
/// the raw `YYYY-MM-DD` strings from the date inputs.
#[derive(Debug, Clone, Default)]
pub struct OrderItemDraft {
    pub product_name: String,
    pub order_number: String,
    pub sales_date: String,
    /// Must fall strictly after the sales date
    pub due_date: String,
    pub quantity: Option<f64>,
    pub unit_price: Option<f64>,
    /// Deposit collected at sale time, subtracted from the total
    pub deposit: Option<f64>,
    pub vat: Option<VatCode>,
    pub currency: Currency,
    pub note: Option<String>,
    pub finalization: PriceFinalization,
    /// Read-only derived total; `None` while the inputs cannot price
    pub total_amount: Option<f64>,
}

impl OrderItemDraft {
    fn pricing(&self) -> OrderPricing {
        OrderPricing {
            quantity: self.quantity.unwrap_or(0.0),
            unit_price: self.unit_price.unwrap_or(0.0),
            deposit: self.deposit,
            vat: self.vat,
        }
    }

    /// Refresh the read-only total from the current inputs
    pub fn recompute(&mut self) {
        self.total_amount = self.pricing().recompute();
    }

    pub fn set_quantity(&mut self, quantity: Option<f64>) {
        self.quantity = quantity;
        self.recompute();
    }

    pub fn set_unit_price(&mut self, unit_price: Option<f64>) {
        self.unit_price = unit_price;
        self.recompute();
    }

    pub fn set_deposit(&mut self, deposit: Option<f64>) {
        self.deposit = deposit;
        self.recompute();
    }

    pub fn set_vat(&mut self, vat: Option<VatCode>) {
        self.vat = vat;
        self.recompute();
    }

    /// Fix the price as of `today`; the date input freezes afterwards
    pub fn close_price(&mut self, today: NaiveDate) -> AppResult<()> {
        self.finalization.close(today)
    }

    pub fn reopen_price(&mut self) -> AppResult<()> {
        self.finalization.reopen()
    }

    /// Choose the pricing date (rejected while the price is closed)
    pub fn set_finalization_date(&mut self, date: NaiveDate) -> AppResult<()> {
        self.finalization.set_date(date)
    }

    /// Collect every field error on this line
    pub fn validate(&self) -> FieldErrors {
        let mut errors = Vec::new();

        if self.product_name.trim().is_empty() {
            errors.push(AppError::required("productName"));
        } else if self.product_name.chars().count() > MAX_PRODUCT_NAME_LEN {
            errors.push(AppError::new(ErrorCode::ProductNameTooLong).on_field("productName"));
        }

        if self.order_number.chars().count() > MAX_ORDER_NUMBER_LEN {
            errors.push(
                AppError::validation(format!(
                    "orderNumber is too long (max {MAX_ORDER_NUMBER_LEN})"
                ))
                .on_field("orderNumber"),
            );
        }

        if let Err(e) = validate_optional_text(&self.note, "note", MAX_NOTE_LEN) {
            errors.push(e);
        }

        let sales_date = parse_date_field(
            &self.sales_date,
            "salesDate",
            AppError::new(ErrorCode::SaleDateMissing).on_field("salesDate"),
            &mut errors,
        );
        let due_date = parse_date_field(
            &self.due_date,
            "dueDate",
            AppError::required("dueDate"),
            &mut errors,
        );
        if let (Some(sales), Some(due)) = (sales_date, due_date)
            && due <= sales
        {
            errors.push(AppError::new(ErrorCode::DueDateNotAfterSaleDate).on_field("dueDate"));
        }

        let mut pricing_ok = true;
        if let Err(e) = validate_quantity(self.quantity.unwrap_or(0.0)) {
            pricing_ok = false;
            errors.push(e);
        }
        if let Err(e) = validate_unit_price(self.unit_price.unwrap_or(0.0)) {
            pricing_ok = false;
            errors.push(e);
        }
        if let Err(e) = validate_deposit(self.deposit) {
            pricing_ok = false;
            errors.push(e);
        }
        match self.vat {
            None => errors.push(AppError::new(ErrorCode::VatNotSelected).on_field("vat")),
            Some(_) if pricing_ok => {
                // inputs are individually fine; only the derived total can still fail
                if let Err(e) = self.pricing().validate() {
                    errors.push(e);
                }
            }
            Some(_) => {}
        }

        if let Err(e) = self.finalization.validate_for_save() {
            errors.push(e);
        }

        errors
    }

    /// Build the wire item; the first field error aborts
    pub fn to_item(&self, contract_id: Option<i64>) -> AppResult<OrderItemCreate> {
        if let Some(error) = self.validate().into_iter().next() {
            return Err(error);
        }

        let sales_date = time::parse_date(&self.sales_date)?;
        let due_date = time::parse_date(&self.due_date)?;
        let total = self.pricing().validate()?;

        Ok(OrderItemCreate {
            contract_id,
            product_name: self.product_name.trim().to_string(),
            order_number: self.order_number.trim().to_string(),
            sales_date: time::to_wire_instant(sales_date),
            quantity: self.quantity.unwrap_or(0.0),
            unit_price: self.unit_price.unwrap_or(0.0),
            currency: self.currency,
            price_finalization_date: self.finalization.date.map(time::to_wire_instant),
            price_finalization_status: Some(self.finalization.status),
            amount_receivable: to_f64(total),
            due_date: time::to_wire_instant(due_date),
            amount_collected: self.deposit.unwrap_or(0.0),
            vat: self.vat,
            note: self
                .note
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(String::from),
            status: 0,
            is_delete: 0,
        })
    }
}

fn parse_date_field(
    value: &str,
    field: &str,
    missing: AppError,
    errors: &mut Vec<AppError>,
) -> Option<NaiveDate> {
    if value.trim().is_empty() {
        errors.push(missing);
        return None;
    }
    match time::parse_date(value) {
        Ok(date) => Some(date),
        Err(e) => {
            errors.push(e.on_field(field));
            None
        }
    }
}

/// The add-order dialog: contract header plus one order line
#[derive(Debug, Clone, Default)]
pub struct OrderForm {
    pub contract_number: String,
    /// Chosen customer; picking one auto-fills the sales person
    pub customer_id: Option<i64>,
    pub sales_id: Option<i64>,
    /// Display-only name of the sales person, filled from the customer
    pub sales_person: String,
    /// Product segment of the contract (1 = metals, 2 = wood and plastics)
    pub contract_status: i32,
    pub item: OrderItemDraft,
}

impl OrderForm {
    pub fn new() -> Self {
        Self {
            contract_status: 1,
            ..Self::default()
        }
    }

    /// Select a customer; its assigned sales person follows
    pub fn set_customer(&mut self, customer: &Customer) {
        self.customer_id = Some(customer.customer_id);
        self.sales_id = Some(customer.sale_id);
        self.sales_person = customer.full_name.clone();
    }

    /// Collect every field error on the form
    pub fn validate(&self) -> FieldErrors {
        let mut errors =
            validate_contract_header(&self.contract_number, self.customer_id, self.sales_id);
        errors.extend(self.item.validate());
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
        let item = self.item.to_item(None).map_err(|e| vec![e])?;

        Ok(ContractCreate {
            contract_number: self.contract_number.trim().to_string(),
            customer_id,
            sales_id,
            contract_status: self.contract_status,
            is_delete: 0,
            order_items: vec![item],
        })
    }

    /// Validate, assemble and create the contract with its single order
    pub async fn submit(&self, client: &HttpClient) -> ClientResult<()> {
        let payload = self.payload().map_err(join_errors)?;
        client.create_contract_with_order(&payload).await
    }
}
