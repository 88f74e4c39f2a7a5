//! Handlers for the `/services` catalog.
//!
//! Reads are open to any employee; writes require [`RequireManager`].

use autoshop_core::contact::{require_non_blank, validate_input};
use autoshop_core::error::CoreError;
use autoshop_core::types::DbId;
use autoshop_db::models::common_service::{CommonService, CreateCommonService, UpdateCommonService};
use autoshop_db::repositories::CommonServiceRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::conflict_if_referenced;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireManager;
use crate::state::AppState;

/// GET /api/v1/services
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<CommonService>>> {
    let services = CommonServiceRepo::list(&state.pool).await?;
    Ok(Json(services))
}

/// GET /api/v1/services/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<CommonService>> {
    let service = CommonServiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        }))?;
    Ok(Json(service))
}

/// POST /api/v1/services
pub async fn create(
    State(state): State<AppState>,
    RequireManager(_manager): RequireManager,
    Json(input): Json<CreateCommonService>,
) -> AppResult<(StatusCode, Json<CommonService>)> {
    validate_input(&input)?;
    require_non_blank("name", &input.name)?;
    let service = CommonServiceRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(service)))
}

/// PUT /api/v1/services/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireManager(_manager): RequireManager,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCommonService>,
) -> AppResult<Json<CommonService>> {
    validate_input(&input)?;
    let service = CommonServiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        }))?;
    Ok(Json(service))
}

/// DELETE /api/v1/services/{id}
///
/// Fails with 409 while order line items reference the service.
pub async fn delete(
    State(state): State<AppState>,
    RequireManager(_manager): RequireManager,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CommonServiceRepo::delete(&state.pool, id)
        .await
        .map_err(|e| conflict_if_referenced(e, "Service is used by existing orders"))?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        }))
    }
}
