//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Roles
// =============================================================================

/// Role granted to every self-registered user
pub const ROLE_STANDARD: &str = "STANDARD";

/// Administrator role with elevated privileges
pub const ROLE_ADMIN: &str = "ADMIN";

// =============================================================================
// Password policy
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum number of ASCII digits in a password
pub const MIN_PASSWORD_DIGITS: usize = 1;

/// Minimum number of characters taken from `PASSWORD_SPECIAL_CHARS`
pub const MIN_PASSWORD_SPECIAL_CHARS: usize = 2;

/// Characters counted as "special" by the password policy
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*()_+{}[]:;<>,.?~\\/-";

// =============================================================================
// Messages
// =============================================================================

pub const MSG_INVALID_UUID: &str = "The id entered does not match the uuid pattern";
pub const MSG_INVALID_EMAIL: &str = "Invalid email";
pub const MSG_PASSWORD_TOO_SHORT: &str = "The password must be at least 8 characters long.";
pub const MSG_PASSWORD_NO_DIGIT: &str = "The password must contain at least 1 digit.";
pub const MSG_PASSWORD_NO_SPECIAL: &str = "The password must contain at least 2 special characters.";

// =============================================================================
// Authentication
// =============================================================================

/// Default JWT token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Default `iss` claim for minted tokens
pub const DEFAULT_JWT_ISSUER: &str = "access-core";
