//! Field validators.
//!
//! Pure checks used by every entity setter. Each one either returns the
//! accepted value or a `ValidationError` carrying the client-facing message.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{
    MIN_PASSWORD_DIGITS, MIN_PASSWORD_LENGTH, MIN_PASSWORD_SPECIAL_CHARS, MSG_INVALID_EMAIL,
    MSG_INVALID_UUID, MSG_PASSWORD_NO_DIGIT, MSG_PASSWORD_NO_SPECIAL, MSG_PASSWORD_TOO_SHORT,
    PASSWORD_SPECIAL_CHARS,
};
use crate::error::{ValidationError, ValidationResult};
use crate::role::RoleKind;

static UUID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("uuid pattern is a valid regex")
});

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Accepts the empty string (id not assigned yet) or a hyphenated uuid.
pub fn uuid(value: &str) -> ValidationResult<&str> {
    if value.is_empty() || UUID_PATTERN.is_match(value) {
        Ok(value)
    } else {
        Err(ValidationError::new(MSG_INVALID_UUID))
    }
}

pub fn email(value: &str) -> ValidationResult<&str> {
    if EMAIL_PATTERN.is_match(value) {
        Ok(value)
    } else {
        Err(ValidationError::new(MSG_INVALID_EMAIL))
    }
}

/// Rejects values that are empty once surrounding whitespace is removed.
pub fn not_empty<'a>(value: &'a str, attribute: &str) -> ValidationResult<&'a str> {
    if value.trim().is_empty() {
        Err(ValidationError::new(format!(
            "The value for '{}' must not be empty.",
            attribute
        )))
    } else {
        Ok(value)
    }
}

/// Password policy. Checks run in a fixed order and the first failure wins:
/// non-empty, length, digit count, special character count.
pub fn password(value: &str) -> ValidationResult<&str> {
    not_empty(value, "password")?;

    if value.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::new(MSG_PASSWORD_TOO_SHORT));
    }

    let digits = value.chars().filter(char::is_ascii_digit).count();
    if digits < MIN_PASSWORD_DIGITS {
        return Err(ValidationError::new(MSG_PASSWORD_NO_DIGIT));
    }

    let specials = value
        .chars()
        .filter(|c| PASSWORD_SPECIAL_CHARS.contains(*c))
        .count();
    if specials < MIN_PASSWORD_SPECIAL_CHARS {
        return Err(ValidationError::new(MSG_PASSWORD_NO_SPECIAL));
    }

    Ok(value)
}

/// Case-sensitive membership in the closed role set.
pub fn role(value: &str) -> ValidationResult<RoleKind> {
    value.parse()
}
