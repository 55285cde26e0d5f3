//! Input validation helpers
//!
//! Centralized text length constants and validation functions. The checkout
//! contract mirrors the storefront validator exactly — the server re-checks
//! everything because client-side validation is advisory only.

use validator::ValidateEmail;

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Customer / guest names
pub const MIN_NAME_LEN: usize = 2;
pub const MAX_NAME_LEN: usize = 100;

/// Email addresses
pub const MAX_EMAIL_LEN: usize = 255;

/// Phone numbers (digits plus separators, format not otherwise constrained)
pub const MIN_PHONE_LEN: usize = 10;
pub const MAX_PHONE_LEN: usize = 20;

/// Special instructions / special requests
pub const MAX_NOTE_LEN: usize = 500;

/// Entity names: menu items, categories, campaign titles
pub const MAX_TITLE_LEN: usize = 200;

/// Descriptions
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// Passwords (before hashing)
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 128;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate a required string: non-empty after trim, length within bounds.
/// Returns the trimmed value.
pub fn validate_text(
    value: &str,
    field: &str,
    min_len: usize,
    max_len: usize,
) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.len() < min_len {
        return Err(AppError::validation(format!(
            "{field} must be at least {min_len} characters"
        )));
    }
    if trimmed.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} must be less than {max_len} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate an optional free-text note: trims, drops empty values, bounds
/// length. Returns the normalized value.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<Option<String>, AppError> {
    let trimmed = value.as_deref().map(str::trim).filter(|s| !s.is_empty());
    if let Some(v) = trimmed
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} must be less than {max_len} characters"
        )));
    }
    Ok(trimmed.map(str::to_string))
}

/// Validate email syntax and length. Returns the trimmed value.
pub fn validate_email(value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.len() > MAX_EMAIL_LEN {
        return Err(AppError::validation(format!(
            "email must be less than {MAX_EMAIL_LEN} characters"
        )));
    }
    if !trimmed.validate_email() {
        return Err(AppError::validation("Invalid email address"));
    }
    Ok(trimmed.to_string())
}

/// Validate phone length. Returns the trimmed value.
pub fn validate_phone(value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.len() < MIN_PHONE_LEN || trimmed.len() > MAX_PHONE_LEN {
        return Err(AppError::validation(format!(
            "phone must be {MIN_PHONE_LEN} to {MAX_PHONE_LEN} characters"
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_bounds() {
        assert!(validate_text("A", "name", MIN_NAME_LEN, MAX_NAME_LEN).is_err());
        assert_eq!(
            validate_text(" Al ", "name", MIN_NAME_LEN, MAX_NAME_LEN).unwrap(),
            "Al"
        );
        assert!(validate_text(&"x".repeat(101), "name", MIN_NAME_LEN, MAX_NAME_LEN).is_err());
    }

    #[test]
    fn email_syntax() {
        assert!(validate_email("not-an-email").is_err());
        assert_eq!(
            validate_email(" guest@example.com ").unwrap(),
            "guest@example.com"
        );
    }

    #[test]
    fn optional_notes_are_trimmed_and_empty_dropped() {
        assert_eq!(
            validate_optional_text(&Some("  no onions  ".into()), "note", MAX_NOTE_LEN).unwrap(),
            Some("no onions".to_string())
        );
        assert_eq!(
            validate_optional_text(&Some("   ".into()), "note", MAX_NOTE_LEN).unwrap(),
            None
        );
        assert_eq!(
            validate_optional_text(&None, "note", MAX_NOTE_LEN).unwrap(),
            None
        );
        assert!(validate_optional_text(&Some("x".repeat(501)), "note", MAX_NOTE_LEN).is_err());
    }

    #[test]
    fn phone_length() {
        assert!(validate_phone("12345").is_err());
        assert_eq!(validate_phone("1234567890").unwrap(), "1234567890");
        assert!(validate_phone(&"1".repeat(21)).is_err());
    }
}
