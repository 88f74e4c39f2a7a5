//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- the employee behind a Bearer token.
//! - [`rbac::RequireAdmin`] -- requires the `admin` role.
//! - [`rbac::RequireManager`] -- requires `manager` or `admin`.

pub mod auth;
pub mod rbac;
