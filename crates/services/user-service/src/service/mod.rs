//! User use-case business logic.

mod user_service;

pub use user_service::{
    UserManager, UserUseCases, MSG_EMAIL_TAKEN, MSG_INVALID_CREDENTIALS, MSG_INVALID_NAME,
    MSG_NOT_FOUND_BY_EMAIL, MSG_NOT_FOUND_BY_ID, MSG_PASSWORDS_DIFFER,
};

#[cfg(any(test, feature = "test-utils"))]
pub use user_service::MockUserUseCases;
