//! Logins Module
//!
//! Stored login credentials: the list view-model that loads and filters
//! them, and registration of new entries.

pub mod list;
pub mod login;
pub mod register;

use thiserror::Error;

use crate::db::DbError;

/// Storage key under which the serialized login list lives
pub const LOGINS_KEY: &str = "savepass:logins";

/// Login errors
#[derive(Debug, Error)]
pub enum LoginError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] DbError),

    #[error("Stored logins are corrupt: {0}")]
    StorageCorruption(String),

    #[error("{0}")]
    Validation(String),
}

pub type LoginResult<T> = Result<T, LoginError>;

// Re-exports
pub use list::LoginListModel;
pub use login::LoginData;
pub use register::{register_login, NewLogin};
