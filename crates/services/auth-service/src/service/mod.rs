//! Authentication use-case business logic.

mod auth_service;

pub use auth_service::{AuthUseCases, Authenticator, MSG_INVALID_TOKEN};

#[cfg(any(test, feature = "test-utils"))]
pub use auth_service::MockAuthUseCases;
