//! Domain layer - Core business entities, validators and ports.
//!
//! This crate contains pure domain logic with no persistence or transport
//! dependencies. Services depend on it for entities and on its ports for
//! id generation and password encryption.

pub mod constants;
pub mod credentials;
pub mod error;
pub mod ids;
pub mod pagination;
pub mod password;
pub mod permission;
pub mod ports;
pub mod role;
pub mod user;
pub mod validators;

pub use constants::*;
pub use credentials::{Credentials, TokenPayload};
pub use error::{AdapterError, AdapterResult, ValidationError, ValidationResult};
pub use ids::V4UuidGenerator;
pub use pagination::Pageable;
pub use password::Argon2Encryptor;
pub use permission::{CreatePermission, Permission, PermissionData};
pub use ports::{PasswordEncryptor, UuidGenerator};
pub use role::{Role, RoleData, RoleKind};
pub use user::{CreateUser, User, UserData, UserReadOnly};

#[cfg(any(test, feature = "test-utils"))]
pub use ports::{MockPasswordEncryptor, MockUuidGenerator};
