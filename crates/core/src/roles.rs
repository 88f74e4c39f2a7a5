//! Well-known company role constants.
//!
//! These must match the seed data in `20260301000001_create_company_roles.sql`.

use crate::types::DbId;

pub const ROLE_EMPLOYEE: &str = "employee";
pub const ROLE_MANAGER: &str = "manager";
pub const ROLE_ADMIN: &str = "admin";

/// Role id assigned to new employees when none is supplied.
pub const DEFAULT_ROLE_ID: DbId = 1;

/// Whether `role` may manage the service catalog.
pub fn can_manage_catalog(role: &str) -> bool {
    role == ROLE_MANAGER || role == ROLE_ADMIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_management_requires_manager_or_admin() {
        assert!(can_manage_catalog(ROLE_ADMIN));
        assert!(can_manage_catalog(ROLE_MANAGER));
        assert!(!can_manage_catalog(ROLE_EMPLOYEE));
        assert!(!can_manage_catalog("ADMIN"));
    }
}
