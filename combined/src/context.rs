//! Service wiring for one command run.
//!
//! Every use case is built over a single `MemoryStore` loaded from the
//! snapshot path. The token signer needs `JWT_SECRET`; registration mints
//! no token, so it runs without one.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use auth_service_lib::{AuthUseCases, Authenticator, Claims, JwtTokenGenerator, TokenGenerator};
use common::JwtConfig;
use domain::{AdapterError, AdapterResult, Argon2Encryptor, TokenPayload, V4UuidGenerator};
use permission_service_lib::{PermissionManager, PermissionUseCases, RoleManager, RoleUseCases};
use store::MemoryStore;
use user_service_lib::{UserManager, UserUseCases};

use crate::error::CommandResult;

const MSG_NO_SIGNER: &str = "no token signer configured";

/// Token port for runs without a signing key.
struct Unsigned;

#[async_trait]
impl TokenGenerator for Unsigned {
    async fn generate_token(
        &self,
        _name: &str,
        _email: &str,
        _roles: Vec<String>,
    ) -> AdapterResult<TokenPayload> {
        Err(AdapterError::token(MSG_NO_SIGNER))
    }

    async fn get_payload(&self, _token: &str) -> AdapterResult<Claims> {
        Err(AdapterError::token(MSG_NO_SIGNER))
    }
}

pub struct Context {
    path: PathBuf,
    store: Arc<MemoryStore>,
    users: Arc<dyn UserUseCases>,
    permissions: Arc<dyn PermissionUseCases>,
    roles: Arc<dyn RoleUseCases>,
}

impl Context {
    /// Load the store at `path` and wire the use cases onto it.
    pub async fn open(path: impl Into<PathBuf>) -> CommandResult<Self> {
        let path = path.into();
        let store = Arc::new(MemoryStore::open(&path).await?);
        let ids = Arc::new(V4UuidGenerator);

        let users = Arc::new(UserManager::new(
            store.clone(),
            ids.clone(),
            Arc::new(Argon2Encryptor::new()),
        ));
        let permissions = Arc::new(PermissionManager::new(store.clone(), ids));
        let roles = Arc::new(RoleManager::new(store.clone()));

        Ok(Self {
            path,
            store,
            users,
            permissions,
            roles,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn users(&self) -> Arc<dyn UserUseCases> {
        self.users.clone()
    }

    pub fn permissions(&self) -> Arc<dyn PermissionUseCases> {
        self.permissions.clone()
    }

    pub fn roles(&self) -> Arc<dyn RoleUseCases> {
        self.roles.clone()
    }

    /// Authentication use cases signing with `config`.
    pub fn auth(&self, config: JwtConfig) -> Arc<dyn AuthUseCases> {
        self.authenticator(Arc::new(JwtTokenGenerator::new(config)))
    }

    /// Authentication use cases for registration only; no signing key needed.
    pub fn registrar(&self) -> Arc<dyn AuthUseCases> {
        self.authenticator(Arc::new(Unsigned))
    }

    fn authenticator(&self, tokens: Arc<dyn TokenGenerator>) -> Arc<dyn AuthUseCases> {
        Arc::new(Authenticator::new(self.users(), self.permissions(), tokens))
    }

    /// Write the store back to its snapshot.
    pub async fn save(&self) -> CommandResult<()> {
        self.store.save(&self.path).await?;
        Ok(())
    }
}
