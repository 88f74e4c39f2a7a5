//! Repository for the `company_roles` lookup table.

use autoshop_core::types::DbId;
use sqlx::PgPool;

use crate::models::role::CompanyRole;

/// Read access to company roles.
pub struct RoleRepo;

impl RoleRepo {
    /// List all roles ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<CompanyRole>, sqlx::Error> {
        sqlx::query_as::<_, CompanyRole>(
            "SELECT id, name, created_at FROM company_roles ORDER BY id",
        )
        .fetch_all(pool)
        .await
    }

    /// Resolve a role id to its name. Fails with `RowNotFound` for unknown ids.
    pub async fn resolve_name(pool: &PgPool, role_id: DbId) -> Result<String, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT name FROM company_roles WHERE id = $1")
            .bind(role_id)
            .fetch_one(pool)
            .await
    }
}
