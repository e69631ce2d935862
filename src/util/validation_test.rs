use super::*;

// =============================================================
// is_valid_email
// =============================================================

#[test]
fn valid_emails() {
    assert!(is_valid_email("user1@email.com"));
    assert!(is_valid_email("a.b+tag@sub.domain.io"));
}

#[test]
fn invalid_emails() {
    assert!(!is_valid_email("user1"));
    assert!(!is_valid_email("@email.com"));
    assert!(!is_valid_email("user@email"));
    assert!(!is_valid_email("user@@email.com"));
    assert!(!is_valid_email("user@email..com"));
    assert!(!is_valid_email("us er@email.com"));
}

// =============================================================
// sign in / sign up / forgot / reset
// =============================================================

#[test]
fn sign_in_accepts_valid_input() {
    assert_eq!(validate_sign_in("user1@email.com", "123456"), Ok(()));
}

#[test]
fn sign_in_reports_every_failing_field() {
    let errors = validate_sign_in("", "").unwrap_err();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get("email"), Some("E-mail is required"));
    assert_eq!(errors.get("password"), Some("Password is required"));
}

#[test]
fn sign_in_rejects_malformed_email() {
    let errors = validate_sign_in("not-an-email", "123456").unwrap_err();
    assert_eq!(errors.get("email"), Some("Enter a valid e-mail"));
    assert_eq!(errors.get("password"), None);
}

#[test]
fn sign_up_requires_name_and_six_char_password() {
    let errors = validate_sign_up(" ", "user1@email.com", "12345").unwrap_err();
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["name", "password"]);
    assert_eq!(errors.get("password"), Some("At least 6 characters"));
    assert_eq!(validate_sign_up("Calil", "user1@email.com", "123456"), Ok(()));
}

#[test]
fn forgot_password_requires_email() {
    assert!(validate_forgot_password("").is_err());
    assert_eq!(validate_forgot_password("user1@email.com"), Ok(()));
}

#[test]
fn reset_password_requires_matching_confirmation() {
    let errors = validate_reset_password("123456", "654321").unwrap_err();
    assert_eq!(errors.get("password_confirmation"), Some("Passwords do not match"));
    assert_eq!(validate_reset_password("123456", "123456"), Ok(()));
    assert_eq!(validate_reset_password("", "").unwrap_err().get("password"), Some("Password is required"));
}

// =============================================================
// profile
// =============================================================

fn profile() -> ProfileForm {
    ProfileForm { name: "Calil".into(), email: "user1@email.com".into(), ..Default::default() }
}

#[test]
fn profile_without_password_change_is_valid() {
    assert_eq!(validate_profile(&profile()), Ok(()));
}

#[test]
fn profile_password_change_requires_new_password_and_confirmation() {
    let form = ProfileForm { old_password: "old123".into(), ..profile() };
    let errors = validate_profile(&form).unwrap_err();
    assert_eq!(errors.get("password"), Some("Required when changing password"));
    assert_eq!(errors.get("password_confirmation"), Some("Required when changing password"));
}

#[test]
fn profile_password_change_enforces_min_length() {
    let form = ProfileForm {
        old_password: "old123".into(),
        password: "123".into(),
        password_confirmation: "123".into(),
        ..profile()
    };
    assert_eq!(validate_profile(&form).unwrap_err().get("password"), Some("At least 6 characters"));
}

#[test]
fn profile_confirmation_must_match_even_without_old_password() {
    let form = ProfileForm { password: "123456".into(), password_confirmation: "x".into(), ..profile() };
    let errors = validate_profile(&form).unwrap_err();
    assert_eq!(errors.get("password_confirmation"), Some("Passwords do not match"));
}

#[test]
fn profile_complete_password_change_is_valid() {
    let form = ProfileForm {
        old_password: "old123".into(),
        password: "new123".into(),
        password_confirmation: "new123".into(),
        ..profile()
    };
    assert_eq!(validate_profile(&form), Ok(()));
}

#[test]
fn field_errors_keep_first_message() {
    let mut errors = FieldErrors::default();
    errors.add("email", "first");
    errors.add("email", "second");
    assert_eq!(errors.get("email"), Some("first"));
    assert_eq!(errors.to_string(), "1 invalid field(s)");
}
