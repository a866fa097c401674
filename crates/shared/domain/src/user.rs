//! User domain entity and related types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationResult;
use crate::validators;

/// Full user record, password included.
///
/// This is what repositories store and what `find_by_email` hands back.
/// Never return it to a client; project it with `UserReadOnly::from`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

// Don't expose password or hash in debug output
impl fmt::Debug for UserData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserData")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Registration input
#[derive(Clone, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl CreateUser {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for CreateUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// User projection without the password (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserReadOnly {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<UserData> for UserReadOnly {
    fn from(user: UserData) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

impl From<&UserData> for UserReadOnly {
    fn from(user: &UserData) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// User entity.
///
/// Every field is validated on construction and on each assignment, in the
/// order id, name, email, password. A failed assignment leaves the previous
/// value in place.
#[derive(Clone)]
pub struct User {
    id: String,
    name: String,
    email: String,
    password: String,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl User {
    /// Build a user from raw fields; `password` must be plaintext here.
    pub fn new(data: UserData) -> ValidationResult<Self> {
        let mut user = Self {
            id: String::new(),
            name: String::new(),
            email: String::new(),
            password: String::new(),
        };
        user.set_id(data.id)?;
        user.set_name(data.name)?;
        user.set_email(data.email)?;
        user.set_password(data.password)?;
        Ok(user)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
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

    pub fn set_email(&mut self, email: impl Into<String>) -> ValidationResult<()> {
        let email = email.into();
        validators::email(&email)?;
        self.email = email;
        Ok(())
    }

    /// Assign a plaintext password (policy checked).
    pub fn set_password(&mut self, password: impl Into<String>) -> ValidationResult<()> {
        let password = password.into();
        validators::password(&password)?;
        self.password = password;
        Ok(())
    }

    /// Replace the plaintext password with its encrypted form.
    ///
    /// Hash formats are owned by the encryptor, so only emptiness is checked.
    pub fn set_password_hash(&mut self, hash: impl Into<String>) -> ValidationResult<()> {
        let hash = hash.into();
        validators::not_empty(&hash, "password")?;
        self.password = hash;
        Ok(())
    }

    pub fn user_data(&self) -> UserData {
        UserData {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    pub fn read_only(&self) -> UserReadOnly {
        UserReadOnly {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}
