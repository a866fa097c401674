//! Permission and role use-case business logic.

mod permission_service;
mod role_service;

pub use permission_service::{
    PermissionManager, PermissionUseCases, MSG_NO_PERMISSIONS, MSG_PERMISSION_NOT_FOUND,
};
pub use role_service::{RoleManager, RoleUseCases, MSG_ROLE_NOT_FOUND};

#[cfg(any(test, feature = "test-utils"))]
pub use permission_service::MockPermissionUseCases;
#[cfg(any(test, feature = "test-utils"))]
pub use role_service::MockRoleUseCases;

#[cfg(test)]
mod tests;
