//! Route definitions for the `/services` catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::common_service;
use crate::state::AppState;

/// Routes mounted at `/services`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create (manager)
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update (manager)
/// DELETE /{id}   -> delete (manager)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(common_service::list).post(common_service::create))
        .route(
            "/{id}",
            get(common_service::get_by_id)
                .put(common_service::update)
                .delete(common_service::delete),
        )
}
