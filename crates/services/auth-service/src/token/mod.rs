//! Token generation port and its JWT adapter.

mod jwt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use domain::{AdapterResult, TokenPayload};

pub use jwt::JwtTokenGenerator;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User email
    pub sub: String,
    pub name: String,
    pub roles: Vec<String>,
    pub iss: String,
    pub exp: i64,
    pub iat: i64,
}

/// Mints and reads signed session tokens.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TokenGenerator: Send + Sync {
    async fn generate_token(
        &self,
        name: &str,
        email: &str,
        roles: Vec<String>,
    ) -> AdapterResult<TokenPayload>;

    /// Decode and verify a token minted by `generate_token`
    async fn get_payload(&self, token: &str) -> AdapterResult<Claims>;
}
