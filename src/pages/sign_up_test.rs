use super::*;
use crate::state::toast::ToastKind;

#[test]
fn success_toast_invites_sign_in() {
    let toast = sign_up_success_toast();
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.title, "Registration complete");
}

#[test]
fn failure_toast_surfaces_backend_message() {
    let err = ApiError::Status { status: 400, message: Some("Email address already used.".into()) };
    let toast = sign_up_failure_toast(&err);
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.description.as_deref(), Some("Email address already used."));
}

#[test]
fn failure_toast_without_message_is_generic() {
    let toast = sign_up_failure_toast(&ApiError::Network("offline".into()));
    assert_eq!(toast.description.as_deref(), Some("Could not create your account, try again."));
}
