//! Role reference data.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{ROLE_ADMIN, ROLE_STANDARD};
use crate::error::{ValidationError, ValidationResult};
use crate::validators;

/// Closed set of role identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoleKind {
    Standard,
    Admin,
}

impl RoleKind {
    /// Every role, in grant order
    pub const ALL: [RoleKind; 2] = [RoleKind::Standard, RoleKind::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleKind::Standard => ROLE_STANDARD,
            RoleKind::Admin => ROLE_ADMIN,
        }
    }

    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, RoleKind::Admin)
    }
}

impl FromStr for RoleKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_STANDARD => Ok(RoleKind::Standard),
            ROLE_ADMIN => Ok(RoleKind::Admin),
            other => Err(ValidationError::new(format!(
                "The value '{}' is not valid for Role",
                other
            ))),
        }
    }
}

impl From<RoleKind> for String {
    fn from(role: RoleKind) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plain projection of a role row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleData {
    pub id: String,
    pub name: String,
}

/// Role entity. Both fields are re-validated on every assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    id: String,
    name: String,
}

impl Role {
    pub fn new(data: RoleData) -> ValidationResult<Self> {
        let mut role = Self {
            id: String::new(),
            name: String::new(),
        };
        role.set_id(data.id)?;
        role.set_name(data.name)?;
        Ok(role)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_id(&mut self, id: impl Into<String>) -> ValidationResult<()> {
        let id = id.into();
        validators::uuid(&id)?;
        self.id = id;
        Ok(())
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> ValidationResult<()> {
        let name = name.into();
        validators::not_empty(&name, "name")?;
        self.name = name;
        Ok(())
    }

    pub fn role_data(&self) -> RoleData {
        RoleData {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}
