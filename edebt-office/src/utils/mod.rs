//! Cross-cutting helpers: dates, money display, input validation, logging

pub mod currency;
pub mod logger;
pub mod time;
pub mod validation;
