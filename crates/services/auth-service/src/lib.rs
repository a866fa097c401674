//! Auth Service Library
//!
//! Composes the user and permission use cases into registration with a
//! role set and login with token issuance. Tokens are minted through the
//! `TokenGenerator` port; `JwtTokenGenerator` is the default adapter.

pub mod service;
pub mod token;

pub use service::{AuthUseCases, Authenticator};
pub use token::{Claims, JwtTokenGenerator, TokenGenerator};

#[cfg(any(test, feature = "test-utils"))]
pub use service::MockAuthUseCases;
#[cfg(any(test, feature = "test-utils"))]
pub use token::MockTokenGenerator;
