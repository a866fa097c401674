//! User Service Library
//!
//! User lifecycle use cases: registration, lookup, password and name
//! updates, and credential verification. Persistence is reached through
//! the `UserRepository` port.

pub mod repository;
pub mod service;

pub use repository::UserRepository;
pub use service::{UserManager, UserUseCases};

#[cfg(any(test, feature = "test-utils"))]
pub use repository::MockUserRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use service::MockUserUseCases;
