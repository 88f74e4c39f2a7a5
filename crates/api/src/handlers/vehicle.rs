//! Handlers for the `/vehicles` resource.

use autoshop_core::contact::validate_input;
use autoshop_core::error::CoreError;
use autoshop_core::types::DbId;
use autoshop_db::models::vehicle::{CreateVehicle, UpdateVehicle, Vehicle};
use autoshop_db::repositories::VehicleRepo;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::VehicleFilter;
use crate::state::AppState;

/// POST /api/v1/vehicles
///
/// An unknown `customer_id` surfaces as a foreign key violation (400).
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateVehicle>,
) -> AppResult<(StatusCode, Json<Vehicle>)> {
    validate_input(&input)?;
    let vehicle = VehicleRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// GET /api/v1/vehicles[?customer_id=]
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(filter): Query<VehicleFilter>,
) -> AppResult<Json<Vec<Vehicle>>> {
    let vehicles = match filter.customer_id {
        Some(customer_id) => VehicleRepo::list_by_customer(&state.pool, customer_id).await?,
        None => VehicleRepo::list(&state.pool).await?,
    };
    Ok(Json(vehicles))
}

/// GET /api/v1/vehicles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vehicle>> {
    let vehicle = VehicleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vehicle",
            id,
        }))?;
    Ok(Json(vehicle))
}

/// PUT /api/v1/vehicles/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVehicle>,
) -> AppResult<Json<Vehicle>> {
    validate_input(&input)?;
    let vehicle = VehicleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vehicle",
            id,
        }))?;
    Ok(Json(vehicle))
}
