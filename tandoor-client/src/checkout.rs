//! Checkout field validation
//!
//! Mirrors the server-side contract exactly; passing here does not skip the
//! server's own re-validation. On failure every field maps to its first
//! violation message, so the form can annotate all fields in one pass.

use std::collections::BTreeMap;

use validator::ValidateEmail;

/// Raw form input
#[derive(Debug, Clone, Default)]
pub struct CheckoutInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub special_instructions: Option<String>,
}

/// Normalized (trimmed) checkout details, ready for submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub special_instructions: Option<String>,
}

/// Field name → first violation message
pub type CheckoutErrors = BTreeMap<&'static str, String>;

const MIN_NAME_LEN: usize = 2;
const MAX_NAME_LEN: usize = 100;
const MAX_EMAIL_LEN: usize = 255;
const MIN_PHONE_LEN: usize = 10;
const MAX_PHONE_LEN: usize = 20;
const MAX_NOTE_LEN: usize = 500;

/// Validate and normalize the checkout form
pub fn validate_checkout(input: &CheckoutInput) -> Result<CheckoutDetails, CheckoutErrors> {
    let mut errors = CheckoutErrors::new();

    let name = input.name.trim();
    if name.len() < MIN_NAME_LEN {
        errors.insert("name", format!("Name must be at least {MIN_NAME_LEN} characters"));
    } else if name.len() > MAX_NAME_LEN {
        errors.insert("name", format!("Name must be less than {MAX_NAME_LEN} characters"));
    }

    let email = input.email.trim();
    if email.len() > MAX_EMAIL_LEN {
        errors.insert(
            "email",
            format!("Email must be less than {MAX_EMAIL_LEN} characters"),
        );
    } else if !email.validate_email() {
        errors.insert("email", "Invalid email address".to_string());
    }

    let phone = input.phone.trim();
    if phone.len() < MIN_PHONE_LEN || phone.len() > MAX_PHONE_LEN {
        errors.insert(
            "phone",
            format!("Phone must be {MIN_PHONE_LEN} to {MAX_PHONE_LEN} characters"),
        );
    }

    let special_instructions = input
        .special_instructions
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    if let Some(note) = special_instructions
        && note.len() > MAX_NOTE_LEN
    {
        errors.insert(
            "special_instructions",
            format!("Instructions must be less than {MAX_NOTE_LEN} characters"),
        );
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(CheckoutDetails {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        special_instructions: special_instructions.map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, email: &str, phone: &str) -> CheckoutInput {
        CheckoutInput {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            special_instructions: None,
        }
    }

    #[test]
    fn one_character_name_is_rejected_two_accepted() {
        let err = validate_checkout(&input("A", "guest@example.com", "1234567890")).unwrap_err();
        assert!(err.contains_key("name"));

        let ok = validate_checkout(&input("Al", "guest@example.com", "1234567890")).unwrap();
        assert_eq!(ok.name, "Al");
    }

    #[test]
    fn bad_email_syntax_is_rejected() {
        let err =
            validate_checkout(&input("Fahad", "not-an-email", "1234567890")).unwrap_err();
        assert_eq!(err.get("email").unwrap(), "Invalid email address");
    }

    #[test]
    fn phone_length_bounds() {
        let err = validate_checkout(&input("Fahad", "guest@example.com", "12345")).unwrap_err();
        assert!(err.contains_key("phone"));

        assert!(validate_checkout(&input("Fahad", "guest@example.com", "1234567890")).is_ok());
    }

    #[test]
    fn fields_are_trimmed_and_empty_note_dropped() {
        let details = validate_checkout(&CheckoutInput {
            name: "  Fahad  ".into(),
            email: " fahad@example.com ".into(),
            phone: " 0501234567 ".into(),
            special_instructions: Some("   ".into()),
        })
        .unwrap();

        assert_eq!(details.name, "Fahad");
        assert_eq!(details.email, "fahad@example.com");
        assert_eq!(details.phone, "0501234567");
        assert_eq!(details.special_instructions, None);
    }

    #[test]
    fn all_violations_reported_at_once() {
        let err = validate_checkout(&input("A", "nope", "123")).unwrap_err();
        assert_eq!(err.len(), 3);
    }
}
