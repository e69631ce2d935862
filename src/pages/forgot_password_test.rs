use super::*;
use crate::state::toast::ToastKind;

#[test]
fn recovery_toasts_have_matching_kinds() {
    assert_eq!(recovery_sent_toast().kind, ToastKind::Success);
    assert_eq!(recovery_failed_toast().kind, ToastKind::Error);
}

#[test]
fn recovery_sent_toast_points_to_inbox() {
    assert!(recovery_sent_toast().description.unwrap().contains("inbox"));
}
