//! Adapter ports consumed by the use cases.
//!
//! Implementations live next to the port (`ids`, `password`) or in
//! downstream crates; the use cases only ever see the trait objects.

use async_trait::async_trait;

use crate::error::AdapterResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Source of fresh entity ids.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UuidGenerator: Send + Sync {
    /// Produce a new hyphenated uuid string
    async fn generate(&self) -> AdapterResult<String>;
}

/// One-way password encryption.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PasswordEncryptor: Send + Sync {
    /// Encrypt a plaintext password for storage
    async fn encrypt(&self, plaintext: &str) -> AdapterResult<String>;

    /// Check a plaintext password against a stored hash.
    ///
    /// A mismatch is `Ok(false)`; errors are reserved for unusable hashes.
    async fn compare(&self, plaintext: &str, hash: &str) -> AdapterResult<bool>;
}
