//! Vehicle entity model and DTOs.

use autoshop_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A vehicle row from the `vehicles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vehicle {
    pub id: DbId,
    pub customer_id: DbId,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub vehicle_type: Option<String>,
    pub mileage: i64,
    pub tag: Option<String>,
    pub serial: Option<String>,
    pub color: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a vehicle to a customer.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVehicle {
    pub customer_id: DbId,
    #[validate(range(min = 1886, max = 2100))]
    pub year: i32,
    #[validate(length(min = 1, max = 100))]
    pub make: String,
    #[validate(length(min = 1, max = 100))]
    pub model: String,
    pub vehicle_type: Option<String>,
    /// Defaults to 0 if omitted.
    #[validate(range(min = 0))]
    pub mileage: Option<i64>,
    pub tag: Option<String>,
    pub serial: Option<String>,
    pub color: Option<String>,
}

/// DTO for updating a vehicle. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateVehicle {
    #[validate(range(min = 1886, max = 2100))]
    pub year: Option<i32>,
    #[validate(length(min = 1, max = 100))]
    pub make: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,
    pub vehicle_type: Option<String>,
    #[validate(range(min = 0))]
    pub mileage: Option<i64>,
    pub tag: Option<String>,
    pub serial: Option<String>,
    pub color: Option<String>,
}
