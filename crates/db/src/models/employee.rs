//! Employee entity model and DTOs.

use autoshop_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full employee row from the `employees` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`EmployeeResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Employee {
    pub id: DbId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub role_id: DbId,
    pub is_active: bool,
    pub password_hash: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe employee representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeResponse {
    pub id: DbId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub role_id: DbId,
    /// Resolved role name.
    pub role: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl EmployeeResponse {
    pub fn new(e: Employee, role: String) -> Self {
        Self {
            id: e.id,
            email: e.email,
            first_name: e.first_name,
            last_name: e.last_name,
            phone: e.phone,
            role_id: e.role_id,
            role,
            is_active: e.is_active,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

/// DTO for inserting an employee. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateEmployee {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    /// Defaults to 1 (employee) if omitted.
    pub role_id: Option<DbId>,
    /// Defaults to `true` if omitted.
    pub is_active: Option<bool>,
    pub password_hash: String,
}

/// DTO for updating an employee.
///
/// Names and phone are always written; the remaining fields only when set.
#[derive(Debug, Clone)]
pub struct UpdateEmployee {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub role_id: Option<DbId>,
    pub is_active: Option<bool>,
    pub password_hash: Option<String>,
}
