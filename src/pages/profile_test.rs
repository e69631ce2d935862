use super::*;
use crate::state::toast::ToastKind;

fn form() -> ProfileForm {
    ProfileForm { name: " Calil ".into(), email: "user1@email.com ".into(), ..Default::default() }
}

#[test]
fn update_without_password_change_sends_only_name_and_email() {
    let body = profile_update_from(&form());
    assert_eq!(
        body,
        ProfileUpdate { name: "Calil".into(), email: "user1@email.com".into(), ..Default::default() }
    );
}

#[test]
fn update_with_old_password_sends_password_fields() {
    let body = profile_update_from(&ProfileForm {
        old_password: "old123".into(),
        password: "new123".into(),
        password_confirmation: "new123".into(),
        ..form()
    });
    assert_eq!(body.old_password.as_deref(), Some("old123"));
    assert_eq!(body.password.as_deref(), Some("new123"));
    assert_eq!(body.password_confirmation.as_deref(), Some("new123"));
}

#[test]
fn new_password_without_old_password_is_not_sent() {
    let body = profile_update_from(&ProfileForm {
        password: "new123".into(),
        password_confirmation: "new123".into(),
        ..form()
    });
    assert_eq!(body.password, None);
}

#[test]
fn profile_toasts() {
    assert_eq!(profile_updated_toast().kind, ToastKind::Success);
    assert_eq!(profile_failed_toast().kind, ToastKind::Error);
    assert_eq!(avatar_updated_toast().title, "Avatar updated");
}

#[test]
fn avatar_toast_reports_success_only_when_session_was_updated() {
    assert_eq!(avatar_result_toast(Ok(Ok(()))), avatar_updated_toast());

    let storage_failed = Err(StorageError::Write { key: "@GoBarber:user".into(), reason: "QuotaExceededError".into() });
    let toast = avatar_result_toast(Ok(storage_failed));
    assert_eq!(toast, profile_failed_toast());
    assert_eq!(toast.kind, ToastKind::Error);

    let upload_failed = avatar_result_toast(Err(ApiError::Network("offline".into())));
    assert_eq!(upload_failed, profile_failed_toast());
}
