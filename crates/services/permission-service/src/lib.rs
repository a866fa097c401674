//! Permission Service Library
//!
//! Grants, queries and revokes role assignments, one `(user id, role)` pair
//! at a time, and exposes the role reference data.

pub mod repository;
pub mod service;

pub use repository::{PermissionRepository, RoleRepository};
pub use service::{PermissionManager, PermissionUseCases, RoleManager, RoleUseCases};

#[cfg(any(test, feature = "test-utils"))]
pub use repository::{MockPermissionRepository, MockRoleRepository};
#[cfg(any(test, feature = "test-utils"))]
pub use service::{MockPermissionUseCases, MockRoleUseCases};
