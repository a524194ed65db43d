//! E-DEBT Office - receivables back office
//!
//! Desktop-side application layer for tracking customer debts ("công
//! nợ"): who owes what, what is coming due, and what has been collected.
//! The heavy lifting (amount calculator, debt classification, price
//! finalization) lives in `shared`; the HTTP surface lives in
//! `edebt-client`; this crate owns everything the operator touches.
//!
//! # Module structure
//!
//! ```text
//! edebt-office/src/
//! ├── core/     # configuration, persisted session
//! ├── forms/    # form controllers behind each page
//! └── utils/    # dates, money display, validation, logging
//! ```

pub mod core;
pub mod forms;
pub mod utils;

// Re-export common types
pub use crate::core::{Config, SessionStore, SessionStoreError, StoredSession};
pub use forms::{
    ContractForm, CustomerForm, DebtList, FieldErrors, FinalizeForm, OrderForm, PaymentForm,
};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Print the startup banner
pub fn print_banner() {
    println!(
        r#"
    ____       __    __
   / __ \___  / /_  / /_
  / / / / _ \/ __ \/ __/
 / /_/ /  __/ /_/ / /_
/_____/\___/_.___/\__/

  e-debt receivables office
    "#
    );
}

/// Prepare the process environment: .env file and logging
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("EDEBT_LOG_LEVEL").ok();
    let log_dir = std::env::var("EDEBT_LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}
