pub mod auth;
pub mod common_service;
pub mod customer;
pub mod employee;
pub mod order;
pub mod vehicle;

use autoshop_core::error::CoreError;

use crate::error::AppError;

/// Turn a foreign key violation raised by a delete into a 409 with `message`;
/// any other error passes through.
pub(crate) fn conflict_if_referenced(err: sqlx::Error, message: &str) -> AppError {
    if autoshop_db::is_foreign_key_violation(&err) {
        AppError::Core(CoreError::Conflict(message.to_string()))
    } else {
        AppError::Database(err)
    }
}
