use super::*;
use crate::state::storage::StorageError;
use crate::state::toast::ToastKind;

#[test]
fn rejected_credentials_toast_asks_to_check_credentials() {
    let toast = sign_in_failure_toast(&SessionError::Authentication { status: 401, message: None });
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.title, "Authentication error");
    assert_eq!(toast.description.as_deref(), Some("Could not sign in, check your credentials."));
}

#[test]
fn network_failure_toast_mentions_server() {
    let toast = sign_in_failure_toast(&SessionError::Network("offline".into()));
    assert_eq!(toast.description.as_deref(), Some("Could not reach the server, try again."));
}

#[test]
fn storage_failure_uses_generic_description() {
    let toast = sign_in_failure_toast(&SessionError::Storage(StorageError::Unavailable));
    assert_eq!(toast.title, "Authentication error");
}
