//! Shared configuration structures.

use std::env;
use std::fmt;
use std::path::PathBuf;

use domain::{DEFAULT_JWT_EXPIRATION_HOURS, DEFAULT_JWT_ISSUER, MIN_JWT_SECRET_LENGTH};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default location of the JSON store snapshot
pub const DEFAULT_STORE_PATH: &str = "access-store.json";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} must be at least {min} characters long")]
    TooShort { name: &'static str, min: usize },

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// JWT configuration for token signing.
#[derive(Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    #[serde(skip_serializing)]
    pub secret: String,
    pub expiration_hours: i64,
    pub issuer: String,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .field("expiration_hours", &self.expiration_hours)
            .field("issuer", &self.issuer)
            .finish()
    }
}

impl JwtConfig {
    /// Build a config, enforcing the minimum secret length.
    pub fn new(
        secret: impl Into<String>,
        expiration_hours: i64,
        issuer: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::TooShort {
                name: "JWT_SECRET",
                min: MIN_JWT_SECRET_LENGTH,
            });
        }
        if expiration_hours <= 0 {
            return Err(ConfigError::Invalid {
                name: "JWT_EXPIRATION_HOURS",
                value: expiration_hours.to_string(),
            });
        }

        Ok(Self {
            secret,
            expiration_hours,
            issuer: issuer.into(),
        })
    }

    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let expiration_hours = match lookup("JWT_EXPIRATION_HOURS") {
            Some(raw) => raw.parse::<i64>().map_err(|_| ConfigError::Invalid {
                name: "JWT_EXPIRATION_HOURS",
                value: raw.clone(),
            })?,
            None => DEFAULT_JWT_EXPIRATION_HOURS,
        };

        let issuer = lookup("JWT_ISSUER").unwrap_or_else(|| DEFAULT_JWT_ISSUER.to_string());

        Self::new(secret, expiration_hours, issuer)
    }

    /// Get JWT secret bytes for token signing/verification.
    pub fn secret_bytes(&self) -> &[u8] {
        self.secret.as_bytes()
    }
}

/// Location of the persisted store snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        env::var("ACCESS_STORE_PATH")
            .map(|path| Self {
                path: PathBuf::from(path),
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config = JwtConfig::from_vars(lookup(&[("JWT_SECRET", SECRET)])).unwrap();

        assert_eq!(config.expiration_hours, DEFAULT_JWT_EXPIRATION_HOURS);
        assert_eq!(config.issuer, DEFAULT_JWT_ISSUER);
        assert_eq!(config.secret_bytes(), SECRET.as_bytes());
    }

    #[test]
    fn test_missing_secret() {
        let err = JwtConfig::from_vars(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("JWT_SECRET"));
    }

    #[test]
    fn test_short_secret_rejected() {
        let err = JwtConfig::from_vars(lookup(&[("JWT_SECRET", "short")])).unwrap_err();
        assert!(matches!(err, ConfigError::TooShort { min: 32, .. }));
    }

    #[test]
    fn test_bad_expiration_rejected() {
        let err = JwtConfig::from_vars(lookup(&[
            ("JWT_SECRET", SECRET),
            ("JWT_EXPIRATION_HOURS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "JWT_EXPIRATION_HOURS", .. }));

        assert!(JwtConfig::new(SECRET, 0, "issuer").is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = JwtConfig::new(SECRET, 1, "issuer").unwrap();
        let output = format!("{:?}", config);

        assert!(!output.contains(SECRET));
        assert!(output.contains("[REDACTED]"));
    }
}
