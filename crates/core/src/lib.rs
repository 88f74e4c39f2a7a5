//! Domain types and business rules for the auto-shop backend.
//!
//! Nothing in this crate touches the database directly. The order update
//! workflow is generic over [`order_update::OrderStore`] so the same logic
//! runs against PostgreSQL in production and an in-memory store in tests.

pub mod contact;
pub mod error;
pub mod order;
pub mod order_update;
pub mod roles;
pub mod types;
