//! Wire format of the auth backend's HTTP API.
//!
//! Transport-agnostic: the browser adapter (`gloo-net`) and the CLI adapter
//! (`reqwest`) both send these payloads and map statuses through the helpers
//! below, so a 401 means the same thing everywhere.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};

use crate::error::{AuthenticationError, RegistrationError};
use crate::identity::Identity;

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const REGISTER_ENDPOINT: &str = "/api/auth/register";
pub const PROFILE_ENDPOINT: &str = "/api/auth/profile";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of a successful login or registration.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: Identity,
}

/// What a successful registration answered with.
#[derive(Debug)]
pub enum Registered {
    /// The backend signed the new account in.
    SignedIn(AuthResponse),
    /// The backend only confirmed creation (`201 {message}`); the caller
    /// must log in with the submitted credentials.
    Created,
}

#[derive(Deserialize)]
struct RegisterBody {
    access_token: Option<String>,
    user: Option<Identity>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// `Authorization` header value for a stored token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Pull the human-readable text out of an error body (`error` or `message`).
#[must_use]
pub fn error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .error
        .or(parsed.message)
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}

/// Read a 2xx registration body. A blank body counts as `Created`.
///
/// # Errors
///
/// Returns the parse error when the body is not a JSON object.
pub fn parse_registered(body: &str) -> Result<Registered, serde_json::Error> {
    if body.trim().is_empty() {
        return Ok(Registered::Created);
    }
    let parsed: RegisterBody = serde_json::from_str(body)?;
    Ok(match (parsed.access_token, parsed.user) {
        (Some(access_token), Some(user)) => Registered::SignedIn(AuthResponse { access_token, user }),
        _ => Registered::Created,
    })
}

/// Map a non-success login response.
#[must_use]
pub fn login_failure(status: u16, body: &str) -> AuthenticationError {
    match status {
        401 => AuthenticationError::InvalidCredentials,
        _ => AuthenticationError::Service {
            status,
            message: error_message(body).unwrap_or_else(|| "login request failed".to_owned()),
        },
    }
}

/// Map a non-success registration response.
#[must_use]
pub fn registration_failure(status: u16, body: &str) -> RegistrationError {
    let message = error_message(body);
    match status {
        409 => RegistrationError::Conflict(message.unwrap_or_else(|| "email already registered".to_owned())),
        400 | 422 => RegistrationError::Validation(message.unwrap_or_else(|| "missing or invalid fields".to_owned())),
        _ => RegistrationError::Service {
            status,
            message: message.unwrap_or_else(|| "registration request failed".to_owned()),
        },
    }
}

/// Whether a profile status means the stored token is no longer accepted.
#[must_use]
pub fn is_rejected_token(status: u16) -> bool {
    matches!(status, 401 | 403 | 422)
}
