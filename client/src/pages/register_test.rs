use super::*;

#[test]
fn validate_registration_accepts_regular_user() {
    assert_eq!(
        validate_registration(" ana ", "secret1", "secret1", false, "ignored"),
        Ok(Registration { username: "ana".to_owned(), password: "secret1".to_owned(), admin_token: None })
    );
}

#[test]
fn validate_registration_rejects_mismatched_passwords_first() {
    assert_eq!(
        validate_registration("ana", "abc", "abd", false, ""),
        Err("Passwords do not match")
    );
}

#[test]
fn validate_registration_enforces_minimum_length() {
    assert_eq!(
        validate_registration("ana", "12345", "12345", false, ""),
        Err("Password must be at least 6 characters")
    );
    assert!(validate_registration("ana", "123456", "123456", false, "").is_ok());
}

#[test]
fn validate_registration_counts_characters_not_bytes() {
    assert_eq!(
        validate_registration("ana", "ñññññ", "ñññññ", false, ""),
        Err("Password must be at least 6 characters")
    );
}

#[test]
fn validate_registration_requires_username() {
    assert_eq!(
        validate_registration("  ", "secret1", "secret1", false, ""),
        Err("Username is required")
    );
}

#[test]
fn validate_registration_admin_requires_token() {
    assert_eq!(
        validate_registration("root", "secret1", "secret1", true, "   "),
        Err("Admin token is required")
    );
}

#[test]
fn validate_registration_admin_keeps_trimmed_token() {
    let request = validate_registration("root", "secret1", "secret1", true, " t0k ").unwrap();
    assert_eq!(request.admin_token.as_deref(), Some("t0k"));
}
