//! Company role entity model.

use autoshop_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A role row from the `company_roles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CompanyRole {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}
