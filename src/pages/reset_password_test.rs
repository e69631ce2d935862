use super::*;

#[test]
fn builds_request_with_trimmed_token() {
    let request = build_reset_request(Some(" tok-1 ".into()), "123456", "123456").unwrap();
    assert_eq!(
        request,
        ResetPasswordRequest {
            password: "123456".into(),
            password_confirmation: "123456".into(),
            token: "tok-1".into(),
        }
    );
}

#[test]
fn missing_or_blank_token_is_rejected() {
    assert_eq!(build_reset_request(None, "123456", "123456"), Err(ResetInputError::MissingToken));
    assert_eq!(build_reset_request(Some("  ".into()), "123456", "123456"), Err(ResetInputError::MissingToken));
}

#[test]
fn field_errors_take_precedence_over_token() {
    let err = build_reset_request(None, "123456", "nope").unwrap_err();
    match err {
        ResetInputError::Fields(errors) => {
            assert_eq!(errors.get("password_confirmation"), Some("Passwords do not match"));
        }
        ResetInputError::MissingToken => panic!("expected field errors"),
    }
}
