//! Repository for the `common_services` catalog.

use autoshop_core::types::DbId;
use sqlx::PgPool;

use crate::models::common_service::{CommonService, CreateCommonService, UpdateCommonService};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Provides CRUD operations for catalog services.
pub struct CommonServiceRepo;

impl CommonServiceRepo {
    /// Insert a new catalog entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCommonService,
    ) -> Result<CommonService, sqlx::Error> {
        let query = format!(
            "INSERT INTO common_services (name, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CommonService>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a catalog entry by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CommonService>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM common_services WHERE id = $1");
        sqlx::query_as::<_, CommonService>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the whole catalog alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<CommonService>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM common_services ORDER BY name");
        sqlx::query_as::<_, CommonService>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a catalog entry. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCommonService,
    ) -> Result<Option<CommonService>, sqlx::Error> {
        let query = format!(
            "UPDATE common_services SET
                name = COALESCE($2, name),
                description = COALESCE($3, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CommonService>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a catalog entry. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign key violation while line items reference it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM common_services WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
