//! Argon2 password encryptor.
//!
//! Encapsulates hashing and verification behind the `PasswordEncryptor` port.

use argon2::{
    password_hash::{
        rand_core::OsRng, Error as HashError, PasswordHash, PasswordHasher, PasswordVerifier,
        SaltString,
    },
    Argon2,
};
use async_trait::async_trait;

use crate::error::{AdapterError, AdapterResult};
use crate::ports::PasswordEncryptor;

/// Argon2id with default parameters and a fresh random salt per hash.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Encryptor;

impl Argon2Encryptor {
    pub fn new() -> Self {
        Self
    }

    fn hash(plaintext: &str) -> AdapterResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| AdapterError::hashing(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify(plaintext: &str, hash: &str) -> AdapterResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AdapterError::hashing(format!("Invalid hash format: {}", e)))?;

        match Self::argon2().verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(HashError::Password) => Ok(false),
            Err(e) => Err(AdapterError::hashing(format!("Password verification failed: {}", e))),
        }
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

#[async_trait]
impl PasswordEncryptor for Argon2Encryptor {
    async fn encrypt(&self, plaintext: &str) -> AdapterResult<String> {
        Self::hash(plaintext).map_err(|e| {
            tracing::error!(error = %e, "Failed to encrypt password");
            e
        })
    }

    async fn compare(&self, plaintext: &str, hash: &str) -> AdapterResult<bool> {
        Self::verify(plaintext, hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_encrypt_and_compare() {
        let encryptor = Argon2Encryptor::new();
        let hash = encryptor.encrypt("p@ssw0rd!@#$").await.unwrap();

        assert!(encryptor.compare("p@ssw0rd!@#$", &hash).await.unwrap());
        assert!(!encryptor.compare("wr0ng!@pass", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_same_password_different_salts() {
        let encryptor = Argon2Encryptor::new();
        let first = encryptor.encrypt("p@ssw0rd!@#$").await.unwrap();
        let second = encryptor.encrypt("p@ssw0rd!@#$").await.unwrap();

        // Different salts produce different hashes
        assert_ne!(first, second);
        assert!(encryptor.compare("p@ssw0rd!@#$", &second).await.unwrap());
    }

    #[tokio::test]
    async fn test_hash_does_not_contain_plaintext() {
        let hash = Argon2Encryptor::new().encrypt("p@ssw0rd!@#$").await.unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(!hash.contains("p@ssw0rd"));
    }

    #[tokio::test]
    async fn test_malformed_hash_is_an_error() {
        let err = Argon2Encryptor::new()
            .compare("p@ssw0rd!@#$", "not-a-phc-string")
            .await
            .unwrap_err();
        assert!(matches!(err, AdapterError::Hashing(_)));
    }
}
