use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  ana  ", "secret"),
        Ok(("ana".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(
        validate_login_input("ana", " pass "),
        Ok(("ana".to_owned(), " pass ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter your username and password."));
    assert_eq!(validate_login_input("ana", ""), Err("Enter your username and password."));
}

#[test]
fn after_login_lands_on_products() {
    assert_eq!(AFTER_LOGIN_PATH, "/products");
}
