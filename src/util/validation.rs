//! Form validation for the auth and profile screens.
//!
//! Every rule of a form runs (no early abort) and each field keeps the
//! message of its first failing rule, so a form can highlight all of its
//! invalid inputs at once.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Field name to error message.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} invalid field(s)", .errors.len())]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    /// Record `message` for `field` unless it already has one.
    pub fn add(&mut self, field: &'static str, message: &str) {
        self.errors.entry(field).or_insert_with(|| message.to_owned());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.keys().copied()
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// Loose shape check: one `@`, non-empty local part, dotted domain.
#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !raw.chars().any(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if email.trim().is_empty() {
        errors.add("email", "E-mail is required");
    } else if !is_valid_email(email.trim()) {
        errors.add("email", "Enter a valid e-mail");
    }
}

fn check_required(errors: &mut FieldErrors, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.add(field, message);
    }
}

fn check_min_len(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if value.chars().count() < MIN_PASSWORD_LEN {
        errors.add(field, "At least 6 characters");
    }
}

/// # Errors
///
/// Returns the failing fields.
pub fn validate_sign_in(email: &str, password: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    check_email(&mut errors, email);
    check_required(&mut errors, "password", password, "Password is required");
    errors.into_result()
}

/// # Errors
///
/// Returns the failing fields.
pub fn validate_sign_up(name: &str, email: &str, password: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    check_required(&mut errors, "name", name, "Name is required");
    check_email(&mut errors, email);
    check_min_len(&mut errors, "password", password);
    errors.into_result()
}

/// # Errors
///
/// Returns the failing fields.
pub fn validate_forgot_password(email: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    check_email(&mut errors, email);
    errors.into_result()
}

/// # Errors
///
/// Returns the failing fields.
pub fn validate_reset_password(password: &str, confirmation: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    check_required(&mut errors, "password", password, "Password is required");
    if confirmation != password {
        errors.add("password_confirmation", "Passwords do not match");
    }
    errors.into_result()
}

/// Raw profile form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub old_password: String,
    pub password: String,
    pub password_confirmation: String,
}

impl ProfileForm {
    #[must_use]
    pub fn is_changing_password(&self) -> bool {
        !self.old_password.is_empty()
    }
}

/// # Errors
///
/// Returns the failing fields.
pub fn validate_profile(form: &ProfileForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    check_required(&mut errors, "name", &form.name, "Name is required");
    check_email(&mut errors, &form.email);
    if form.is_changing_password() {
        check_required(&mut errors, "password", &form.password, "Required when changing password");
        check_min_len(&mut errors, "password", &form.password);
        check_required(
            &mut errors,
            "password_confirmation",
            &form.password_confirmation,
            "Required when changing password",
        );
    }
    if form.password_confirmation != form.password {
        errors.add("password_confirmation", "Passwords do not match");
    }
    errors.into_result()
}
