//! Repository for the `vehicles` table.

use autoshop_core::types::DbId;
use sqlx::PgPool;

use crate::models::vehicle::{CreateVehicle, UpdateVehicle, Vehicle};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, customer_id, year, make, model, vehicle_type, mileage, tag, serial, \
                        color, created_at, updated_at";

/// Provides CRUD operations for customer vehicles.
pub struct VehicleRepo;

impl VehicleRepo {
    /// Insert a new vehicle, returning the created row.
    ///
    /// Fails with a foreign key violation when the customer does not exist.
    pub async fn create(pool: &PgPool, input: &CreateVehicle) -> Result<Vehicle, sqlx::Error> {
        let query = format!(
            "INSERT INTO vehicles (customer_id, year, make, model, vehicle_type, mileage, tag, serial, color)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0), $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(input.customer_id)
            .bind(input.year)
            .bind(&input.make)
            .bind(&input.model)
            .bind(&input.vehicle_type)
            .bind(input.mileage)
            .bind(&input.tag)
            .bind(&input.serial)
            .bind(&input.color)
            .fetch_one(pool)
            .await
    }

    /// Find a vehicle by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicles WHERE id = $1");
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all vehicles, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicles ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Vehicle>(&query).fetch_all(pool).await
    }

    /// List the vehicles of one customer, newest first.
    pub async fn list_by_customer(
        pool: &PgPool,
        customer_id: DbId,
    ) -> Result<Vec<Vehicle>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM vehicles WHERE customer_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(customer_id)
            .fetch_all(pool)
            .await
    }

    /// Update a vehicle. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVehicle,
    ) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!(
            "UPDATE vehicles SET
                year = COALESCE($2, year),
                make = COALESCE($3, make),
                model = COALESCE($4, model),
                vehicle_type = COALESCE($5, vehicle_type),
                mileage = COALESCE($6, mileage),
                tag = COALESCE($7, tag),
                serial = COALESCE($8, serial),
                color = COALESCE($9, color)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .bind(input.year)
            .bind(&input.make)
            .bind(&input.model)
            .bind(&input.vehicle_type)
            .bind(input.mileage)
            .bind(&input.tag)
            .bind(&input.serial)
            .bind(&input.color)
            .fetch_optional(pool)
            .await
    }
}
