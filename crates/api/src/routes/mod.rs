pub mod auth;
pub mod customer;
pub mod employee;
pub mod health;
pub mod order;
pub mod service;
pub mod vehicle;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/login                    login (public)
///
/// /employees                     list, create (admin only)
/// /employees/{id}                get, update, delete (admin only)
///
/// /customers                     list, create
/// /customers/search              search (?query=)
/// /customers/{id}                get, update
///
/// /vehicles                      list (?customer_id=), create
/// /vehicles/{id}                 get, update
///
/// /services                      list, create (manager)
/// /services/{id}                 get, update (manager), delete (manager)
///
/// /orders                        list, create
/// /orders/{id}                   get, update, delete
/// ```
///
/// Everything except login requires a Bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/employees", employee::router())
        .nest("/customers", customer::router())
        .nest("/vehicles", vehicle::router())
        .nest("/services", service::router())
        .nest("/orders", order::router())
}
