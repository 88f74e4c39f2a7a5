//! HTTP-level tests for admin employee management.

mod common;

use axum::http::StatusCode;
use common::{
    auth_token, body_json, delete_auth, get_auth, post_json, post_json_auth, put_json_auth, ADMIN,
};
use serde_json::json;
use sqlx::PgPool;

fn new_employee_body(email: &str) -> serde_json::Value {
    json!({
        "email": email,
        "first_name": "Kidist",
        "last_name": "Mulugeta",
        "phone": "(555) 010-2030",
        "password": "strong-enough",
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_employee_defaults_and_hides_hash(pool: PgPool) {
    let token = auth_token(&pool, ADMIN).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        "/api/v1/employees",
        &token,
        new_employee_body("kidist@shop.test"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["role_id"], 1);
    assert_eq!(json["role"], "employee");
    assert_eq!(json["is_active"], true);
    assert!(json.get("password_hash").is_none());

    // The new employee can log in with the chosen password.
    let login = json!({ "employee_email": "kidist@shop.test", "employee_password": "strong-enough" });
    let response = post_json(app, "/api/v1/auth/login", login).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_employee_duplicate_email(pool: PgPool) {
    let token = auth_token(&pool, ADMIN).await;
    let app = common::build_test_app(pool);

    let first = post_json_auth(
        app.clone(),
        "/api/v1/employees",
        &token,
        new_employee_body("dup@shop.test"),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json_auth(
        app,
        "/api/v1/employees",
        &token,
        new_employee_body("DUP@shop.test"),
    )
    .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_employee_validation(pool: PgPool) {
    let token = auth_token(&pool, ADMIN).await;
    let app = common::build_test_app(pool);

    let mut short_password = new_employee_body("short@shop.test");
    short_password["password"] = json!("short");
    let response = post_json_auth(app.clone(), "/api/v1/employees", &token, short_password).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut bad_email = new_employee_body("not-an-email");
    bad_email["email"] = json!("not-an-email");
    let response = post_json_auth(app.clone(), "/api/v1/employees", &token, bad_email).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut blank_name = new_employee_body("blank@shop.test");
    blank_name["first_name"] = json!("   ");
    let response = post_json_auth(app, "/api/v1/employees", &token, blank_name).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "first_name is required");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_get_and_delete_employee(pool: PgPool) {
    let token = auth_token(&pool, ADMIN).await;
    let app = common::build_test_app(pool);

    let created = body_json(
        post_json_auth(
            app.clone(),
            "/api/v1/employees",
            &token,
            new_employee_body("cycle@shop.test"),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();
    let uri = format!("/api/v1/employees/{id}");

    let update = json!({
        "first_name": "Kidist",
        "last_name": "Alemayehu",
        "phone": "555-010-9999",
        "active_employee": false,
        "company_role_id": 2,
    });
    let response = put_json_auth(app.clone(), &uri, &token, update).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["last_name"], "Alemayehu");
    assert_eq!(json["role"], "manager");
    assert_eq!(json["is_active"], false);

    let response = get_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = delete_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_employee_requires_names(pool: PgPool) {
    let token = auth_token(&pool, ADMIN).await;
    let app = common::build_test_app(pool);

    let update = json!({ "first_name": "", "last_name": "X", "phone": "555-010-1111" });
    let response = put_json_auth(app, "/api/v1/employees/1", &token, update).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
