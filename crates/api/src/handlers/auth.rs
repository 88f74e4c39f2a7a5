//! Handler for `POST /auth/login`.

use autoshop_core::error::CoreError;
use autoshop_core::types::DbId;
use autoshop_db::repositories::{EmployeeRepo, RoleRepo};
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{generate_token, TokenSubject};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Same message for unknown email and wrong password.
const BAD_CREDENTIALS: &str = "Incorrect email or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "employee_email", alias = "email")]
    pub email: String,
    #[serde(rename = "employee_password", alias = "password")]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub employee_token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub employee: EmployeeInfo,
}

/// Public employee info embedded in [`LoginResponse`].
#[derive(Debug, Serialize)]
pub struct EmployeeInfo {
    pub id: DbId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with email + password and return a signed employee token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let employee = EmployeeRepo::find_by_email(&state.pool, input.email.trim())
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(BAD_CREDENTIALS.into())))?;

    let password_valid = verify_password(&input.password, &employee.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(employee_id = employee.id, "Login rejected: wrong password");
        return Err(AppError::Core(CoreError::Unauthorized(
            BAD_CREDENTIALS.into(),
        )));
    }

    if !employee.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Employee account is deactivated".into(),
        )));
    }

    let role = RoleRepo::resolve_name(&state.pool, employee.role_id).await?;

    let token = generate_token(
        TokenSubject {
            employee_id: employee.id,
            email: &employee.email,
            role: &role,
            first_name: &employee.first_name,
        },
        &state.config.jwt,
    )
    .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(employee_id = employee.id, role = %role, "Employee logged in");

    Ok(Json(LoginResponse {
        employee_token: token,
        expires_in: state.config.jwt.expiry_secs(),
        employee: EmployeeInfo {
            id: employee.id,
            email: employee.email,
            first_name: employee.first_name,
            last_name: employee.last_name,
            role,
        },
    }))
}
