use super::*;

#[test]
fn validate_credentials_trims_email() {
    let (email, password) = validate_credentials("  ada@example.edu ", "hunter2").unwrap();
    assert_eq!(email, "ada@example.edu");
    assert_eq!(password, "hunter2");
}

#[test]
fn validate_credentials_keeps_password_whitespace() {
    let (_, password) = validate_credentials("ada@example.edu", " pass ").unwrap();
    assert_eq!(password, " pass ");
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(validate_credentials("", "secret"), Err("Enter both email and password."));
    assert_eq!(validate_credentials("ada@example.edu", ""), Err("Enter both email and password."));
    assert_eq!(validate_credentials("   ", "secret"), Err("Enter both email and password."));
}

#[test]
fn validate_credentials_rejects_malformed_email() {
    assert_eq!(validate_credentials("ada", "secret"), Err("Enter a valid email address."));
    assert_eq!(validate_credentials("@example.edu", "secret"), Err("Enter a valid email address."));
    assert_eq!(validate_credentials("ada@", "secret"), Err("Enter a valid email address."));
}
