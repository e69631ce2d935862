use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_decodes_backend_payload() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "1",
        "name": "Calil",
        "email": "user1@email.com",
        "avatar_url": "https://cdn.example.com/a.png",
    }))
    .unwrap();
    assert_eq!(user.name, "Calil");
    assert_eq!(user.avatar_url, "https://cdn.example.com/a.png");
}

#[test]
fn user_null_avatar_decodes_as_empty() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "1",
        "name": "Calil",
        "email": "user1@email.com",
        "avatar_url": null,
    }))
    .unwrap();
    assert_eq!(user.avatar_url, "");
}

#[test]
fn user_missing_avatar_decodes_as_empty() {
    let user: User =
        serde_json::from_str(r#"{"id":"1","name":"Calil","email":"user1@email.com"}"#).unwrap();
    assert!(user.avatar_url.is_empty());
}

#[test]
fn user_ignores_extra_backend_fields() {
    let user: User = serde_json::from_str(
        r#"{"id":"1","name":"C","email":"c@x.io","avatar_url":"","created_at":"2020-01-01"}"#,
    )
    .unwrap();
    assert_eq!(user.id, "1");
}

// =============================================================
// ProfileUpdate
// =============================================================

#[test]
fn profile_update_omits_absent_password_fields() {
    let body = ProfileUpdate { name: "Calil".into(), email: "c@x.io".into(), ..Default::default() };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "name": "Calil", "email": "c@x.io" })
    );
}

#[test]
fn profile_update_includes_password_fields_when_set() {
    let body = ProfileUpdate {
        name: "Calil".into(),
        email: "c@x.io".into(),
        old_password: Some("old123".into()),
        password: Some("new123".into()),
        password_confirmation: Some("new123".into()),
    };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["old_password"], "old123");
    assert_eq!(value["password_confirmation"], "new123");
}

#[test]
fn session_response_decodes_token_and_user() {
    let resp: SessionResponse = serde_json::from_str(
        r#"{"token":"abc","user":{"id":"1","name":"Calil","email":"user1@email.com","avatar_url":""}}"#,
    )
    .unwrap();
    assert_eq!(resp.token, "abc");
    assert_eq!(resp.user.email, "user1@email.com");
}
