//! Repository for the `customers` table.

use autoshop_core::types::DbId;
use sqlx::PgPool;

use crate::models::customer::{CreateCustomer, Customer, UpdateCustomer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, email, phone_number, first_name, last_name, is_active, created_at, updated_at";

/// Provides CRUD and search operations for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a new customer, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCustomer) -> Result<Customer, sqlx::Error> {
        let query = format!(
            "INSERT INTO customers (email, phone_number, first_name, last_name, is_active)
             VALUES ($1, $2, $3, $4, COALESCE($5, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(&input.email)
            .bind(&input.phone_number)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Whether another customer already uses `email` or `phone_number`.
    ///
    /// `exclude_id` skips the customer being updated.
    pub async fn contact_taken(
        pool: &PgPool,
        email: Option<&str>,
        phone_number: Option<&str>,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                SELECT 1 FROM customers
                WHERE (lower(email) = lower($1) OR phone_number = $2)
                  AND ($3::BIGINT IS NULL OR id <> $3)
             )",
        )
        .bind(email)
        .bind(phone_number)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    /// Find a customer by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE id = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all customers ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Customer>(&query).fetch_all(pool).await
    }

    /// Case-insensitive search over name, email and phone.
    ///
    /// `pattern` is an already-escaped `ILIKE` pattern, see
    /// [`autoshop_core::contact::search_pattern`].
    pub async fn search(pool: &PgPool, pattern: &str) -> Result<Vec<Customer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM customers
             WHERE first_name ILIKE $1
                OR last_name ILIKE $1
                OR (first_name || ' ' || last_name) ILIKE $1
                OR email ILIKE $1
                OR phone_number ILIKE $1
             ORDER BY last_name, first_name, id"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    /// Update a customer. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCustomer,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!(
            "UPDATE customers SET
                email = COALESCE($2, email),
                phone_number = COALESCE($3, phone_number),
                first_name = COALESCE($4, first_name),
                last_name = COALESCE($5, last_name),
                is_active = COALESCE($6, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .bind(&input.email)
            .bind(&input.phone_number)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }
}
