//! Data models
//!
//! Wire DTOs shared between the API client and the office app. Field
//! names mirror the upstream server's JSON exactly (camelCase, with a
//! few legacy `...ID` spellings); dates travel as ISO strings, money as
//! `f64`. All IDs are `i64` and server-assigned.

pub mod auth;
pub mod contract;
pub mod customer;
pub mod dashboard;
pub mod order;
pub mod payment;
pub mod user;

// Re-exports
pub use auth::*;
pub use contract::*;
pub use customer::*;
pub use dashboard::*;
pub use order::*;
pub use payment::*;
pub use user::*;
