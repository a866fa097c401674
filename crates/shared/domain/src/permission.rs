//! Permission entity: one role granted to one user.

use serde::{Deserialize, Serialize};

use crate::error::ValidationResult;
use crate::role::RoleKind;
use crate::validators;

/// Grant request, as received from a caller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePermission {
    pub user_id: String,
    pub role: String,
}

impl CreatePermission {
    pub fn new(user_id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            role: role.into(),
        }
    }
}

/// Plain projection of a permission, as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionData {
    pub id: String,
    pub user_id: String,
    pub role: RoleKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permission {
    id: String,
    user_id: String,
    role: RoleKind,
}

impl Permission {
    /// Validates in the order id, user id, role.
    pub fn new(id: impl Into<String>, user_id: impl Into<String>, role: &str) -> ValidationResult<Self> {
        let mut permission = Self {
            id: String::new(),
            user_id: String::new(),
            role: RoleKind::Standard,
        };
        permission.set_id(id)?;
        permission.set_user_id(user_id)?;
        permission.set_role(role)?;
        Ok(permission)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn role(&self) -> RoleKind {
        self.role
    }

    pub fn set_id(&mut self, id: impl Into<String>) -> ValidationResult<()> {
        let id = id.into();
        validators::uuid(&id)?;
        self.id = id;
        Ok(())
    }

    pub fn set_user_id(&mut self, user_id: impl Into<String>) -> ValidationResult<()> {
        let user_id = user_id.into();
        validators::uuid(&user_id)?;
        self.user_id = user_id;
        Ok(())
    }

    pub fn set_role(&mut self, role: &str) -> ValidationResult<()> {
        self.role = validators::role(role)?;
        Ok(())
    }

    pub fn permission_data(&self) -> PermissionData {
        PermissionData {
            id: self.id.clone(),
            user_id: self.user_id.clone(),
            role: self.role,
        }
    }
}
