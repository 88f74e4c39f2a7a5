use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failure of the order update workflow.
///
/// Every variant is terminal for the call: the transaction has already been
/// rolled back by the time the caller sees it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderUpdateError {
    /// The order being updated does not exist.
    #[error("Order {0} not found")]
    OrderNotFound(DbId),

    /// A line item references a service id missing from the catalog.
    #[error("Service ID {0} does not exist.")]
    UnknownService(DbId),

    /// Any failure reported by the store (query, constraint, connectivity).
    /// The driver's message is passed through verbatim.
    #[error("{0}")]
    Database(String),
}
