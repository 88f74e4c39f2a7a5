use std::sync::Arc;

use autoshop_db::PgOrderStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool and store are reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: autoshop_db::DbPool,
    /// Server configuration (JWT settings are read by the auth extractors).
    pub config: Arc<ServerConfig>,
    /// Transaction source for the order update workflow.
    pub order_store: PgOrderStore,
}

impl AppState {
    pub fn new(pool: autoshop_db::DbPool, config: ServerConfig) -> Self {
        Self {
            order_store: PgOrderStore::new(pool.clone()),
            pool,
            config: Arc::new(config),
        }
    }
}
