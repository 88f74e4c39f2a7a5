#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use autoshop_api::auth::jwt::{generate_token, JwtConfig, TokenSubject};
use autoshop_api::auth::password::hash_password;
use autoshop_api::config::ServerConfig;
use autoshop_api::router::build_app_router;
use autoshop_api::state::AppState;
use autoshop_db::models::employee::{CreateEmployee, Employee};
use autoshop_db::repositories::EmployeeRepo;

/// Role ids as seeded by the migrations.
pub const EMPLOYEE: i64 = 1;
pub const MANAGER: i64 = 2;
pub const ADMIN: i64 = 3;

/// Password given to every seeded employee.
pub const TEST_PASSWORD: &str = "garage-door-42";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            expiry_hours: 24,
        },
    }
}

/// Build the full application router, with production middleware, over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    build_app_router(AppState::new(pool, config.clone()), &config)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert an employee with [`TEST_PASSWORD`] directly in the database.
pub async fn seed_employee(pool: &PgPool, email: &str, role_id: i64) -> Employee {
    let password_hash = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    EmployeeRepo::create(
        pool,
        &CreateEmployee {
            email: email.to_string(),
            first_name: "Test".to_string(),
            last_name: "Employee".to_string(),
            phone: "555-010-0000".to_string(),
            role_id: Some(role_id),
            is_active: None,
            password_hash,
        },
    )
    .await
    .expect("employee creation should succeed")
}

/// Sign a token for `employee` with the given role name.
pub fn token_for(employee: &Employee, role: &str) -> String {
    generate_token(
        TokenSubject {
            employee_id: employee.id,
            email: &employee.email,
            role,
            first_name: &employee.first_name,
        },
        &test_config().jwt,
    )
    .expect("token generation should succeed")
}

/// Seed an employee with `role_id` and return a valid token for them.
pub async fn auth_token(pool: &PgPool, role_id: i64) -> String {
    let role = match role_id {
        ADMIN => "admin",
        MANAGER => "manager",
        _ => "employee",
    };
    let employee = seed_employee(pool, &format!("{role}@shop.test"), role_id).await;
    token_for(&employee, role)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(app: Router, uri: &str, token: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(app: Router, uri: &str, token: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}
