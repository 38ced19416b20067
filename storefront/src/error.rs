//! Error taxonomy for auth-service calls.
//!
//! Login and registration failures reach the page that triggered them and are
//! shown to the user; nothing here is retried. Invalidation failures on logout
//! are logged and dropped by the session store.

/// Failure of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthenticationError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("auth service unreachable: {0}")]
    Transport(String),
    #[error("auth service error ({status}): {message}")]
    Service { status: u16, message: String },
}

/// Failure of an account-creation attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error("account already exists: {0}")]
    Conflict(String),
    #[error("invalid registration: {0}")]
    Validation(String),
    #[error("auth service unreachable: {0}")]
    Transport(String),
    #[error("auth service error ({status}): {message}")]
    Service { status: u16, message: String },
}

/// Remote session invalidation did not complete.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("session invalidation failed: {0}")]
pub struct InvalidationError(pub String);

/// The follow-up login after an account was created without a session.
impl From<AuthenticationError> for RegistrationError {
    fn from(err: AuthenticationError) -> Self {
        match err {
            AuthenticationError::InvalidCredentials => Self::Service {
                status: 401,
                message: "account created but sign-in was refused".to_owned(),
            },
            AuthenticationError::Transport(message) => Self::Transport(message),
            AuthenticationError::Service { status, message } => Self::Service { status, message },
        }
    }
}
