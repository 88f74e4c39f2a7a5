//! Handlers for the `/employees` resource.
//!
//! All handlers require the `admin` role via [`RequireAdmin`].

use autoshop_core::contact::{
    require_non_blank, validate_input, validate_password_strength, validate_phone,
};
use autoshop_core::error::CoreError;
use autoshop_core::types::DbId;
use autoshop_db::models::employee::{CreateEmployee, Employee, EmployeeResponse, UpdateEmployee};
use autoshop_db::repositories::{EmployeeRepo, RoleRepo};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use super::conflict_if_referenced;
use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /employees`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 100))]
    pub first_name: String,
    #[validate(length(max = 100))]
    pub last_name: String,
    pub phone: String,
    pub password: String,
    /// Defaults to the `employee` role.
    pub company_role_id: Option<DbId>,
    /// Defaults to `true`.
    pub active_employee: Option<bool>,
}

/// Request body for `PUT /employees/{id}`.
///
/// Names and phone are always required; role and password are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEmployeeRequest {
    #[validate(length(max = 100))]
    pub first_name: String,
    #[validate(length(max = 100))]
    pub last_name: String,
    pub phone: String,
    pub active_employee: Option<bool>,
    pub company_role_id: Option<DbId>,
    pub password: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/employees
///
/// Create an employee. The email must be unused; the password is hashed
/// before storage and never returned.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateEmployeeRequest>,
) -> AppResult<(StatusCode, Json<EmployeeResponse>)> {
    validate_input(&input)?;
    require_non_blank("first_name", &input.first_name)?;
    require_non_blank("last_name", &input.last_name)?;
    validate_phone(&input.phone)?;
    validate_password_strength(&input.password)?;

    if EmployeeRepo::email_exists(&state.pool, &input.email).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "This email address is already associated with another employee".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateEmployee {
        email: input.email.trim().to_string(),
        first_name: input.first_name.trim().to_string(),
        last_name: input.last_name.trim().to_string(),
        phone: input.phone,
        role_id: input.company_role_id,
        is_active: input.active_employee,
        password_hash,
    };

    let employee = EmployeeRepo::create(&state.pool, &create_dto).await?;
    tracing::info!(employee_id = employee.id, created_by = admin.employee_id, "Employee created");

    let response = employee_to_response(&state, employee).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/v1/employees
///
/// List all employees, newest first, with resolved role names.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let employees = EmployeeRepo::list(&state.pool).await?;

    // Pre-fetch roles to avoid N+1 queries.
    let roles = RoleRepo::list(&state.pool).await?;

    let responses = employees
        .into_iter()
        .map(|e| {
            let role = roles
                .iter()
                .find(|r| r.id == e.role_id)
                .map(|r| r.name.clone())
                .unwrap_or_else(|| "unknown".to_string());
            EmployeeResponse::new(e, role)
        })
        .collect();

    Ok(Json(responses))
}

/// GET /api/v1/employees/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = EmployeeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))?;

    let response = employee_to_response(&state, employee).await?;
    Ok(Json(response))
}

/// PUT /api/v1/employees/{id}
///
/// Update profile fields, activation, role and optionally the password.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEmployeeRequest>,
) -> AppResult<Json<EmployeeResponse>> {
    validate_input(&input)?;
    require_non_blank("first_name", &input.first_name)?;
    require_non_blank("last_name", &input.last_name)?;
    validate_phone(&input.phone)?;

    let password_hash = match &input.password {
        Some(password) => {
            validate_password_strength(password)?;
            let hashed = hash_password(password)
                .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
            Some(hashed)
        }
        None => None,
    };

    let update_dto = UpdateEmployee {
        first_name: input.first_name.trim().to_string(),
        last_name: input.last_name.trim().to_string(),
        phone: input.phone,
        role_id: input.company_role_id,
        is_active: input.active_employee,
        password_hash,
    };

    let employee = EmployeeRepo::update(&state.pool, id, &update_dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))?;

    let response = employee_to_response(&state, employee).await?;
    Ok(Json(response))
}

/// DELETE /api/v1/employees/{id}
///
/// Permanently delete an employee. Fails with 409 while orders reference them.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = EmployeeRepo::delete(&state.pool, id)
        .await
        .map_err(|e| conflict_if_referenced(e, "Employee is assigned to existing orders"))?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn employee_to_response(state: &AppState, employee: Employee) -> AppResult<EmployeeResponse> {
    let role = RoleRepo::resolve_name(&state.pool, employee.role_id).await?;
    Ok(EmployeeResponse::new(employee, role))
}
