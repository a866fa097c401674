//! Repository ports for permission and role data access.

mod permission_repository;
mod role_repository;

pub use permission_repository::PermissionRepository;
pub use role_repository::RoleRepository;

#[cfg(any(test, feature = "test-utils"))]
pub use permission_repository::MockPermissionRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use role_repository::MockRoleRepository;
