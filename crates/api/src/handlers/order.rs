//! Handlers for the `/orders` resource.
//!
//! Updates run through [`update_order`] on the state's transactional order
//! store; everything else goes straight to [`OrderRepo`].

use autoshop_core::contact::validate_input;
use autoshop_core::error::CoreError;
use autoshop_core::order::OrderStatus;
use autoshop_core::order_update::{update_order, OrderUpdate};
use autoshop_core::types::DbId;
use autoshop_db::models::order::{CreateOrder, OrderDetail, OrderListItem};
use autoshop_db::repositories::OrderRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Response body for `PUT /orders/{id}`.
#[derive(Debug, Serialize)]
pub struct OrderUpdateResponse {
    pub message: &'static str,
    pub order_status: OrderStatus,
}

/// POST /api/v1/orders
///
/// Create the order, its info row and its line items atomically.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateOrder>,
) -> AppResult<(StatusCode, Json<OrderDetail>)> {
    validate_input(&input)?;
    let order = OrderRepo::create(&state.pool, &input).await?;
    tracing::debug!(order_id = order.order.id, employee_id = auth.employee_id, "Order created via API");
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /api/v1/orders
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<OrderListItem>>> {
    let orders = OrderRepo::list(&state.pool).await?;
    Ok(Json(orders))
}

/// GET /api/v1/orders/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<OrderDetail>> {
    let order = OrderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id,
        }))?;
    Ok(Json(order))
}

/// PUT /api/v1/orders/{id}
///
/// Replace the line items, patch the order info and recompute the status in
/// one transaction.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<OrderUpdate>,
) -> AppResult<Json<OrderUpdateResponse>> {
    let status = update_order(&state.order_store, id, &input).await?;
    tracing::debug!(order_id = id, employee_id = auth.employee_id, "Order update committed");

    Ok(Json(OrderUpdateResponse {
        message: "Order updated successfully",
        order_status: status,
    }))
}

/// DELETE /api/v1/orders/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = OrderRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id,
        }))
    }
}
