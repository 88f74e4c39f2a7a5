//! Handlers for the `/customers` resource.

use autoshop_core::contact::{require_non_blank, search_pattern, validate_input, validate_phone};
use autoshop_core::error::CoreError;
use autoshop_core::types::DbId;
use autoshop_db::models::customer::{CreateCustomer, Customer, UpdateCustomer};
use autoshop_db::repositories::CustomerRepo;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::SearchParams;
use crate::state::AppState;

const CONTACT_TAKEN: &str = "A customer with this email or phone number already exists";

/// POST /api/v1/customers
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateCustomer>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    validate_input(&input)?;
    require_non_blank("first_name", &input.first_name)?;
    require_non_blank("last_name", &input.last_name)?;
    validate_phone(&input.phone_number)?;

    let taken = CustomerRepo::contact_taken(
        &state.pool,
        Some(&input.email),
        Some(&input.phone_number),
        None,
    )
    .await?;
    if taken {
        return Err(AppError::Core(CoreError::Conflict(CONTACT_TAKEN.into())));
    }

    let customer = CustomerRepo::create(&state.pool, &input).await?;
    tracing::info!(customer_id = customer.id, "Customer created");
    Ok((StatusCode::CREATED, Json(customer)))
}

/// GET /api/v1/customers
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<Customer>>> {
    let customers = CustomerRepo::list(&state.pool).await?;
    Ok(Json(customers))
}

/// GET /api/v1/customers/search?query=
///
/// Case-insensitive partial match over names, email and phone.
pub async fn search(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Customer>>> {
    let pattern = search_pattern(&params.query)?;
    let customers = CustomerRepo::search(&state.pool, &pattern).await?;
    Ok(Json(customers))
}

/// GET /api/v1/customers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Customer>> {
    let customer = CustomerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))?;
    Ok(Json(customer))
}

/// PUT /api/v1/customers/{id}
///
/// Partial update; a new email or phone must not belong to another customer.
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCustomer>,
) -> AppResult<Json<Customer>> {
    validate_input(&input)?;
    if let Some(phone) = &input.phone_number {
        validate_phone(phone)?;
    }

    if input.email.is_some() || input.phone_number.is_some() {
        let taken = CustomerRepo::contact_taken(
            &state.pool,
            input.email.as_deref(),
            input.phone_number.as_deref(),
            Some(id),
        )
        .await?;
        if taken {
            return Err(AppError::Core(CoreError::Conflict(CONTACT_TAKEN.into())));
        }
    }

    let customer = CustomerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id,
        }))?;
    Ok(Json(customer))
}
