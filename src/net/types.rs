//! Wire DTOs for the GoBarber REST API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON exactly (`avatar_url`,
//! `password_confirmation`) so serde needs no renames.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// The signed-in user as returned by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Public URL of the avatar image. The backend sends `null` for users
    /// without an avatar; that decodes as an empty string.
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub avatar_url: String,
}

/// Body of `POST /sessions`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignInCredentials {
    pub email: String,
    pub password: String,
}

/// Successful `POST /sessions` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: User,
}

/// Body of `POST /users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /password/forgot`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Body of `POST /password/reset`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResetPasswordRequest {
    pub password: String,
    pub password_confirmation: String,
    pub token: String,
}

/// Body of `PUT /profile/update`.
///
/// Password fields are only sent when the user is changing the password.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_confirmation: Option<String>,
}

/// Error body the backend sends alongside non-2xx statuses.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
