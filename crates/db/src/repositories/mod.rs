//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod common_service_repo;
pub mod customer_repo;
pub mod employee_repo;
pub mod order_repo;
pub mod role_repo;
pub mod vehicle_repo;

pub use common_service_repo::CommonServiceRepo;
pub use customer_repo::CustomerRepo;
pub use employee_repo::EmployeeRepo;
pub use order_repo::{OrderCreateError, OrderRepo};
pub use role_repo::RoleRepo;
pub use vehicle_repo::VehicleRepo;
