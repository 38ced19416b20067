//! HTTP implementation of the `storefront::AuthService` contract.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each bounded by the
//! configured request timeout, with the access token kept in `localStorage`.
//! Server-side (SSR): restore reports "no session" and the mutating calls
//! fail, since the token only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport problems and timeouts surface as the `Transport` variant of the
//! caller's error type; non-success statuses go through the shared
//! `storefront::api` mapping so the UI shows the backend's own message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use storefront::config::ClientConfig;
use storefront::{AuthService, AuthenticationError, Identity, InvalidationError, Registration, RegistrationError};

#[cfg(feature = "hydrate")]
use storefront::api::{
    AuthResponse, LOGIN_ENDPOINT, LOGOUT_ENDPOINT, LoginRequest, PROFILE_ENDPOINT, REGISTER_ENDPOINT, Registered,
    bearer, is_rejected_token, login_failure, parse_registered, registration_failure,
};

#[cfg(feature = "hydrate")]
use crate::util::token_storage;

#[cfg(any(test, feature = "hydrate"))]
fn timed_out_message(operation: &str, timeout: std::time::Duration) -> String {
    format!("{operation} timed out after {}ms", timeout.as_millis())
}

#[cfg(any(test, feature = "hydrate"))]
fn malformed_body_message(operation: &str, detail: &str) -> String {
    format!("{operation} returned an unreadable body: {detail}")
}

#[cfg(any(test, not(feature = "hydrate")))]
const SERVER_UNAVAILABLE: &str = "not available on server";

/// Auth backend reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpAuthService {
    config: ClientConfig,
}

impl HttpAuthService {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[cfg(feature = "hydrate")]
impl HttpAuthService {
    async fn send(
        &self,
        request: gloo_net::http::Request,
        operation: &str,
    ) -> Result<gloo_net::http::Response, String> {
        let timeout = self.config.request_timeout;
        match with_timeout(timeout, request.send()).await {
            Some(result) => result.map_err(|e| e.to_string()),
            None => Err(timed_out_message(operation, timeout)),
        }
    }

    /// Read a `{access_token, user}` body and persist the token.
    async fn accept_session(&self, resp: gloo_net::http::Response, operation: &str) -> Result<Identity, String> {
        let body: AuthResponse = resp
            .json()
            .await
            .map_err(|e| malformed_body_message(operation, &e.to_string()))?;
        token_storage::save(&self.config.token_key, &body.access_token);
        Ok(body.user)
    }
}

#[cfg(feature = "hydrate")]
async fn with_timeout<F: std::future::Future>(timeout: std::time::Duration, fut: F) -> Option<F::Output> {
    use futures::future::{Either, select};

    let fut = std::pin::pin!(fut);
    let timer = std::pin::pin!(gloo_timers::future::sleep(timeout));
    match select(fut, timer).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(_) => None,
    }
}

#[async_trait(?Send)]
impl AuthService for HttpAuthService {
    /// `GET /api/auth/profile` with the stored bearer token.
    async fn restore_session(&self) -> Option<Identity> {
        #[cfg(feature = "hydrate")]
        {
            let key = &self.config.token_key;
            let token = token_storage::load(key)?;
            let request = gloo_net::http::Request::get(&self.config.endpoint(PROFILE_ENDPOINT))
                .header("Authorization", &bearer(&token))
                .build()
                .ok()?;
            let resp = match self.send(request, "session restore").await {
                Ok(resp) => resp,
                Err(e) => {
                    log::warn!("session restore failed: {e}");
                    return None;
                }
            };
            if is_rejected_token(resp.status()) {
                log::info!("stored token rejected ({}), discarding", resp.status());
                token_storage::clear(key);
                return None;
            }
            if !resp.ok() {
                log::warn!("session restore returned {}", resp.status());
                return None;
            }
            match resp.json::<Identity>().await {
                Ok(identity) => Some(identity),
                Err(e) => {
                    log::warn!("{}", malformed_body_message("session restore", &e.to_string()));
                    None
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    /// `POST /api/auth/login`.
    async fn login(&self, email: &str, password: &str) -> Result<Identity, AuthenticationError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::post(&self.config.endpoint(LOGIN_ENDPOINT))
                .json(&LoginRequest { email, password })
                .map_err(|e| AuthenticationError::Transport(e.to_string()))?;
            let resp = self
                .send(request, "login")
                .await
                .map_err(AuthenticationError::Transport)?;
            if !resp.ok() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                return Err(login_failure(status, &body));
            }
            self.accept_session(resp, "login")
                .await
                .map_err(AuthenticationError::Transport)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(AuthenticationError::Transport(SERVER_UNAVAILABLE.to_owned()))
        }
    }

    /// `POST /api/auth/register`, then a login when the backend only
    /// confirms creation.
    async fn register(&self, registration: &Registration) -> Result<Identity, RegistrationError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::post(&self.config.endpoint(REGISTER_ENDPOINT))
                .json(registration)
                .map_err(|e| RegistrationError::Transport(e.to_string()))?;
            let resp = self
                .send(request, "registration")
                .await
                .map_err(RegistrationError::Transport)?;
            if !resp.ok() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                return Err(registration_failure(status, &body));
            }
            let body = resp.text().await.map_err(|e| RegistrationError::Transport(e.to_string()))?;
            let registered = parse_registered(&body)
                .map_err(|e| RegistrationError::Transport(malformed_body_message("registration", &e.to_string())))?;
            match registered {
                Registered::SignedIn(session) => {
                    token_storage::save(&self.config.token_key, &session.access_token);
                    Ok(session.user)
                }
                Registered::Created => {
                    log::info!("account created, signing in");
                    self.login(&registration.email, &registration.password)
                        .await
                        .map_err(RegistrationError::from)
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = registration;
            Err(RegistrationError::Transport(SERVER_UNAVAILABLE.to_owned()))
        }
    }

    /// Forget the stored token, then `POST /api/auth/logout` with it.
    async fn invalidate_session(&self) -> Result<(), InvalidationError> {
        #[cfg(feature = "hydrate")]
        {
            let key = &self.config.token_key;
            let Some(token) = token_storage::load(key) else {
                return Ok(());
            };
            token_storage::clear(key);

            let request = gloo_net::http::Request::post(&self.config.endpoint(LOGOUT_ENDPOINT))
                .header("Authorization", &bearer(&token))
                .build()
                .map_err(|e| InvalidationError(e.to_string()))?;
            let resp = self.send(request, "logout").await.map_err(InvalidationError)?;
            if resp.ok() {
                Ok(())
            } else {
                Err(InvalidationError(format!("logout returned {}", resp.status())))
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(())
        }
    }
}
