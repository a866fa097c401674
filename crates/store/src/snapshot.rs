//! JSON snapshot persistence for `MemoryStore`.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use domain::{validators, AdapterError, AdapterResult, Permission, Role, ValidationError};

use crate::memory::{MemoryStore, State};

fn corrupt(path: &Path, e: impl std::fmt::Display) -> AdapterError {
    AdapterError::storage(format!("Corrupt snapshot {}: {}", path.display(), e))
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Reject rows the repositories could never have written.
fn check(state: &State) -> Result<(), ValidationError> {
    let mut emails = HashSet::new();
    for user in &state.users {
        validators::uuid(&user.id)?;
        validators::not_empty(&user.name, "name")?;
        validators::email(&user.email)?;
        validators::not_empty(&user.password, "password")?;
        if !emails.insert(user.email.as_str()) {
            return Err(ValidationError::new(format!(
                "Duplicate email {}",
                user.email
            )));
        }
    }

    let user_ids: HashSet<&str> = state.users.iter().map(|u| u.id.as_str()).collect();
    let mut pairs = HashSet::new();
    for data in &state.permissions {
        let permission = Permission::new(data.id.as_str(), data.user_id.as_str(), data.role.as_str())?;
        if !user_ids.contains(permission.user_id()) {
            return Err(ValidationError::new(format!(
                "Permission {} references unknown user",
                permission.id()
            )));
        }
        if !pairs.insert((data.user_id.as_str(), data.role)) {
            return Err(ValidationError::new(format!(
                "Duplicate permission {} for user {}",
                data.role, data.user_id
            )));
        }
    }

    for data in &state.roles {
        let role = Role::new(data.clone())?;
        validators::role(role.name())?;
    }

    Ok(())
}

impl MemoryStore {
    /// Load a snapshot. A missing file yields an empty store.
    pub async fn open(path: impl AsRef<Path>) -> AdapterResult<Self> {
        let path = path.as_ref();

        let raw = match tokio::fs::read(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No snapshot, starting empty");
                return Ok(Self::new());
            }
            Err(e) => {
                return Err(AdapterError::storage(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let mut state: State = serde_json::from_slice(&raw).map_err(|e| corrupt(path, e))?;
        check(&state).map_err(|e| corrupt(path, e))?;
        state.seed_roles();

        tracing::debug!(
            path = %path.display(),
            users = state.users.len(),
            permissions = state.permissions.len(),
            "Snapshot loaded"
        );
        Ok(Self::from_state(state))
    }

    /// Write the current state, replacing the file in one rename.
    pub async fn save(&self, path: impl AsRef<Path>) -> AdapterResult<()> {
        let path = path.as_ref();

        let json = {
            let state = self.read()?;
            serde_json::to_vec_pretty(&*state)
                .map_err(|e| AdapterError::storage(format!("Failed to encode snapshot: {}", e)))?
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                AdapterError::storage(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let tmp = tmp_path(path);
        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| AdapterError::storage(format!("Failed to write {}: {}", tmp.display(), e)))?;
        tokio::fs::rename(&tmp, path)
            .await
            .map_err(|e| AdapterError::storage(format!("Failed to replace {}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), "Snapshot saved");
        Ok(())
    }
}
