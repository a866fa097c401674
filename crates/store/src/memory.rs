use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain::{AdapterError, AdapterResult, PermissionData, RoleData, RoleKind, UserData};

/// Everything the store holds. Also the on-disk snapshot layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct State {
    pub(crate) users: Vec<UserData>,
    pub(crate) permissions: Vec<PermissionData>,
    #[serde(default)]
    pub(crate) roles: Vec<RoleData>,
}

impl State {
    /// Fresh state holding one role row per `RoleKind`.
    pub(crate) fn seeded() -> Self {
        let mut state = Self::default();
        state.seed_roles();
        state
    }

    pub(crate) fn seed_roles(&mut self) {
        for kind in RoleKind::ALL {
            if !self.roles.iter().any(|role| role.name == kind.as_str()) {
                self.roles.push(RoleData {
                    id: Uuid::new_v4().to_string(),
                    name: kind.to_string(),
                });
            }
        }
    }
}

/// In-memory store implementing the user, permission and role repositories.
///
/// Every operation takes the lock once, so each call (batch inserts
/// included) is atomic with respect to the others.
#[derive(Debug)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Empty store with the role reference rows seeded.
    pub fn new() -> Self {
        Self::from_state(State::seeded())
    }

    pub(crate) fn from_state(state: State) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    pub(crate) fn read(&self) -> AdapterResult<RwLockReadGuard<'_, State>> {
        self.state
            .read()
            .map_err(|_| AdapterError::storage("lock poisoned"))
    }

    pub(crate) fn write(&self) -> AdapterResult<RwLockWriteGuard<'_, State>> {
        self.state
            .write()
            .map_err(|_| AdapterError::storage("lock poisoned"))
    }

    /// Number of stored users
    pub fn user_count(&self) -> AdapterResult<usize> {
        Ok(self.read()?.users.len())
    }

    /// Number of stored permissions
    pub fn permission_count(&self) -> AdapterResult<usize> {
        Ok(self.read()?.permissions.len())
    }
}
