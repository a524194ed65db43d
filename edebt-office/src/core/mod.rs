//! Application core: configuration and the persisted session

pub mod config;
pub mod session;

pub use config::Config;
pub use session::{KNOWN_PAGES, SessionStore, SessionStoreError, StoredSession};
