//! Form validation shared by the login and registration pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs before any request is sent, so the backend only sees trimmed,
//! structurally plausible input. Messages are shown verbatim under the form.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use storefront::Registration;

pub const MISSING_CREDENTIALS: &str = "Enter both email and password.";
pub const INVALID_EMAIL: &str = "Enter a valid email address.";
pub const MISSING_REGISTRATION_FIELDS: &str = "Fill in username, email, password, first and last name.";
pub const INVALID_SCHOOL_ID: &str = "School ID must be a number.";

/// Raw registration form fields as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub school_id: String,
    pub student_id: String,
    pub grade: String,
    pub class_name: String,
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() { None } else { Some(value.to_owned()) }
}

/// Trim and check login input. The password is not trimmed.
///
/// # Errors
///
/// Returns the message to display when either field is blank or the email
/// has no `@`.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    if !looks_like_email(email) {
        return Err(INVALID_EMAIL);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Turn the registration form into a request body.
///
/// Blank optional fields are omitted. A blank school id defaults to `1`.
///
/// # Errors
///
/// Returns the message to display for the first problem found.
pub fn validate_registration(form: &RegistrationForm) -> Result<Registration, &'static str> {
    let username = form.username.trim();
    let email = form.email.trim();
    let first_name = form.first_name.trim();
    let last_name = form.last_name.trim();
    if [username, email, first_name, last_name].iter().any(|v| v.is_empty()) || form.password.is_empty() {
        return Err(MISSING_REGISTRATION_FIELDS);
    }
    if !looks_like_email(email) {
        return Err(INVALID_EMAIL);
    }
    let school_id = match form.school_id.trim() {
        "" => 1,
        raw => raw.parse::<i64>().map_err(|_| INVALID_SCHOOL_ID)?,
    };

    Ok(Registration {
        username: username.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        school_id,
        student_id: optional(&form.student_id),
        grade: optional(&form.grade),
        class_name: optional(&form.class_name),
    })
}
