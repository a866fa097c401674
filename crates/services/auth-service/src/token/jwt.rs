//! HS256 JWT token generator.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use common::JwtConfig;
use domain::{AdapterError, AdapterResult, TokenPayload};

use super::{Claims, TokenGenerator};

pub struct JwtTokenGenerator {
    config: JwtConfig,
}

impl JwtTokenGenerator {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    fn sign(&self, claims: &Claims) -> AdapterResult<String> {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(self.config.secret_bytes()),
        )
        .map_err(|e| AdapterError::token(format!("Token signing failed: {}", e)))
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);
        validation
    }
}

#[async_trait]
impl TokenGenerator for JwtTokenGenerator {
    async fn generate_token(
        &self,
        name: &str,
        email: &str,
        roles: Vec<String>,
    ) -> AdapterResult<TokenPayload> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.config.expiration_hours);

        let claims = Claims {
            sub: email.to_string(),
            name: name.to_string(),
            roles: roles.clone(),
            iss: self.config.issuer.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = self.sign(&claims)?;

        Ok(TokenPayload {
            user_name: name.to_string(),
            user_email: email.to_string(),
            roles,
            token,
        })
    }

    async fn get_payload(&self, token: &str) -> AdapterResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.secret_bytes()),
            &self.validation(),
        )
        .map_err(|e| AdapterError::token(format!("Token rejected: {}", e)))?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn generator(secret: &str, issuer: &str) -> JwtTokenGenerator {
        JwtTokenGenerator::new(JwtConfig::new(secret, 1, issuer).unwrap())
    }

    #[tokio::test]
    async fn test_generate_then_read_payload() {
        let tokens = generator(SECRET, "access-core");
        let payload = tokens
            .generate_token(
                "John Doe",
                "johndoe@email.com",
                vec!["STANDARD".to_string(), "ADMIN".to_string()],
            )
            .await
            .unwrap();

        assert_eq!(payload.user_name, "John Doe");
        assert_eq!(payload.user_email, "johndoe@email.com");
        assert_eq!(payload.roles, vec!["STANDARD", "ADMIN"]);

        let claims = tokens.get_payload(&payload.token).await.unwrap();
        assert_eq!(claims.sub, "johndoe@email.com");
        assert_eq!(claims.name, "John Doe");
        assert_eq!(claims.roles, payload.roles);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[tokio::test]
    async fn test_token_from_other_secret_rejected() {
        let payload = generator("ffffffffffffffffffffffffffffffff", "access-core")
            .generate_token("John Doe", "johndoe@email.com", vec![])
            .await
            .unwrap();

        let err = generator(SECRET, "access-core")
            .get_payload(&payload.token)
            .await
            .unwrap_err();
        assert!(matches!(err, AdapterError::Token(_)));
    }

    #[tokio::test]
    async fn test_token_from_other_issuer_rejected() {
        let payload = generator(SECRET, "someone-else")
            .generate_token("John Doe", "johndoe@email.com", vec![])
            .await
            .unwrap();

        assert!(generator(SECRET, "access-core")
            .get_payload(&payload.token)
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_expired_token_rejected() {
        let tokens = generator(SECRET, "access-core");
        let now = Utc::now().timestamp();
        let expired = tokens
            .sign(&Claims {
                sub: "johndoe@email.com".to_string(),
                name: "John Doe".to_string(),
                roles: vec!["STANDARD".to_string()],
                iss: "access-core".to_string(),
                exp: now - 7200,
                iat: now - 10800,
            })
            .unwrap();

        assert!(tokens.get_payload(&expired).await.is_err());
    }

    #[tokio::test]
    async fn test_garbage_token_rejected() {
        let err = generator(SECRET, "access-core")
            .get_payload("not.a.token")
            .await
            .unwrap_err();
        assert!(matches!(err, AdapterError::Token(_)));
    }
}
