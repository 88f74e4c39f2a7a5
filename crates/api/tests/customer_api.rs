//! HTTP-level tests for customers, vehicles and the service catalog.

mod common;

use axum::http::StatusCode;
use common::{
    auth_token, body_json, delete_auth, get_auth, post_json_auth, put_json_auth, EMPLOYEE,
    MANAGER,
};
use serde_json::json;
use sqlx::PgPool;

fn customer_body(email: &str, phone: &str) -> serde_json::Value {
    json!({
        "email": email,
        "phone_number": phone,
        "first_name": "Helen",
        "last_name": "Bekele",
    })
}

// ---------------------------------------------------------------------------
// Customers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_and_get_customer(pool: PgPool) {
    let token = auth_token(&pool, EMPLOYEE).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        "/api/v1/customers",
        &token,
        customer_body("helen@mail.test", "555-123-4567"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["is_active"], true);

    let uri = format!("/api/v1/customers/{}", created["id"]);
    let fetched = body_json(get_auth(app, &uri, &token).await).await;
    assert_eq!(fetched["email"], "helen@mail.test");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_customer_contact_conflicts(pool: PgPool) {
    let token = auth_token(&pool, EMPLOYEE).await;
    let app = common::build_test_app(pool);

    let first = post_json_auth(
        app.clone(),
        "/api/v1/customers",
        &token,
        customer_body("one@mail.test", "555-123-0001"),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let same_phone = post_json_auth(
        app.clone(),
        "/api/v1/customers",
        &token,
        customer_body("two@mail.test", "555-123-0001"),
    )
    .await;
    assert_eq!(same_phone.status(), StatusCode::CONFLICT);

    let same_email = post_json_auth(
        app,
        "/api/v1/customers",
        &token,
        customer_body("ONE@mail.test", "555-123-0002"),
    )
    .await;
    assert_eq!(same_email.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_customer_search(pool: PgPool) {
    let token = auth_token(&pool, EMPLOYEE).await;
    let app = common::build_test_app(pool);

    post_json_auth(
        app.clone(),
        "/api/v1/customers",
        &token,
        customer_body("helen@mail.test", "555-123-4567"),
    )
    .await;

    let hits = body_json(get_auth(app.clone(), "/api/v1/customers/search?query=bek", &token).await).await;
    assert_eq!(hits.as_array().unwrap().len(), 1);

    let misses =
        body_json(get_auth(app.clone(), "/api/v1/customers/search?query=zzz", &token).await).await;
    assert!(misses.as_array().unwrap().is_empty());

    let response = get_auth(app, "/api/v1/customers/search?query=", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_customer(pool: PgPool) {
    let token = auth_token(&pool, EMPLOYEE).await;
    let app = common::build_test_app(pool);

    let a = body_json(
        post_json_auth(
            app.clone(),
            "/api/v1/customers",
            &token,
            customer_body("a@mail.test", "555-200-0001"),
        )
        .await,
    )
    .await;
    post_json_auth(
        app.clone(),
        "/api/v1/customers",
        &token,
        customer_body("b@mail.test", "555-200-0002"),
    )
    .await;
    let uri = format!("/api/v1/customers/{}", a["id"]);

    let response = put_json_auth(app.clone(), &uri, &token, json!({ "first_name": "Liya" })).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["first_name"], "Liya");
    assert_eq!(json["email"], "a@mail.test");

    let response = put_json_auth(app.clone(), &uri, &token, json!({ "email": "b@mail.test" })).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = put_json_auth(
        app,
        "/api/v1/customers/999999",
        &token,
        json!({ "first_name": "Nobody" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Vehicles
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_vehicles_by_customer(pool: PgPool) {
    let token = auth_token(&pool, EMPLOYEE).await;
    let app = common::build_test_app(pool);

    let customer = body_json(
        post_json_auth(
            app.clone(),
            "/api/v1/customers",
            &token,
            customer_body("car@mail.test", "555-300-0001"),
        )
        .await,
    )
    .await;
    let customer_id = customer["id"].as_i64().unwrap();

    let vehicle = json!({
        "customer_id": customer_id,
        "year": 2020,
        "make": "Ford",
        "model": "Ranger",
        "mileage": 15000,
    });
    let response = post_json_auth(app.clone(), "/api/v1/vehicles", &token, vehicle).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let vehicle_id = body_json(response).await["id"].as_i64().unwrap();

    let uri = format!("/api/v1/vehicles?customer_id={customer_id}");
    let listed = body_json(get_auth(app.clone(), &uri, &token).await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/vehicles/{vehicle_id}"),
        &token,
        json!({ "mileage": -1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_json_auth(
        app,
        &format!("/api/v1/vehicles/{vehicle_id}"),
        &token,
        json!({ "mileage": 16000 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["mileage"], 16000);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_vehicle_for_unknown_customer(pool: PgPool) {
    let token = auth_token(&pool, EMPLOYEE).await;
    let app = common::build_test_app(pool);

    let vehicle = json!({ "customer_id": 999999, "year": 2020, "make": "Ford", "model": "Focus" });
    let response = post_json_auth(app, "/api/v1/vehicles", &token, vehicle).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Service catalog
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_service_catalog_lifecycle(pool: PgPool) {
    let token = auth_token(&pool, MANAGER).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        "/api/v1/services",
        &token,
        json!({ "name": "Coolant flush", "description": "Drain and refill" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_i64().unwrap();

    let duplicate = post_json_auth(
        app.clone(),
        "/api/v1/services",
        &token,
        json!({ "name": "Coolant flush" }),
    )
    .await;
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);

    let listed = body_json(get_auth(app.clone(), "/api/v1/services", &token).await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let uri = format!("/api/v1/services/{id}");
    let response = delete_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
