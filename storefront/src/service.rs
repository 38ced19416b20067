//! Contract for the external authentication backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client implements this over `gloo-net`, the CLI over
//! `reqwest`, and tests with in-memory doubles. Futures are not required to be
//! `Send` because the browser runs every call on a single thread.

use async_trait::async_trait;

use crate::error::{AuthenticationError, InvalidationError, RegistrationError};
use crate::identity::{Identity, Registration};

#[async_trait(?Send)]
pub trait AuthService: Send + Sync {
    /// Resolve a previously persisted session. `None` covers both "nothing
    /// persisted" and "persisted token rejected or unreachable".
    async fn restore_session(&self) -> Option<Identity>;

    /// Exchange credentials for an identity, persisting the issued token.
    async fn login(&self, email: &str, password: &str) -> Result<Identity, AuthenticationError>;

    /// Create an account and sign it in.
    async fn register(&self, registration: &Registration) -> Result<Identity, RegistrationError>;

    /// Drop the persisted token and ask the backend to revoke it.
    async fn invalidate_session(&self) -> Result<(), InvalidationError>;
}
