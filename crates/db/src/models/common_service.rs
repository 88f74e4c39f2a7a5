//! Service catalog entity model and DTOs.

use autoshop_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A catalog row from the `common_services` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommonService {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding a service to the catalog.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommonService {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub description: Option<String>,
}

/// DTO for updating a catalog entry. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCommonService {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub description: Option<String>,
}
