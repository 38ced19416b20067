//! Native `AuthService` over `reqwest`.
//!
//! Same wire contract and status mapping as the browser adapter; the token
//! lives in memory for the life of the process instead of `localStorage`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use storefront::api::{
    AuthResponse, LOGIN_ENDPOINT, LOGOUT_ENDPOINT, LoginRequest, PROFILE_ENDPOINT, REGISTER_ENDPOINT, Registered,
    bearer, is_rejected_token, login_failure, parse_registered, registration_failure,
};
use storefront::config::ClientConfig;
use storefront::{AuthService, AuthenticationError, Identity, InvalidationError, Registration, RegistrationError};

pub struct ReqwestAuthService {
    http: reqwest::Client,
    config: ClientConfig,
    token: Mutex<Option<String>>,
}

impl ReqwestAuthService {
    /// # Errors
    ///
    /// Returns the `reqwest` error if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self { http, config, token: Mutex::new(None) })
    }

    /// Seed the token a restore will present.
    #[must_use]
    pub fn with_token(self, token: Option<String>) -> Self {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = token;
        self
    }

    /// Token currently held, if any.
    pub fn token(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set_token(&self, token: Option<String>) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = token;
    }

    async fn accept_session(&self, resp: reqwest::Response) -> Result<Identity, reqwest::Error> {
        let body: AuthResponse = resp.json().await?;
        self.set_token(Some(body.access_token));
        Ok(body.user)
    }
}

#[async_trait(?Send)]
impl AuthService for ReqwestAuthService {
    async fn restore_session(&self) -> Option<Identity> {
        let token = self.token()?;
        let resp = match self
            .http
            .get(self.config.endpoint(PROFILE_ENDPOINT))
            .header(reqwest::header::AUTHORIZATION, bearer(&token))
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(error = %e, "session restore failed");
                return None;
            }
        };
        let status = resp.status().as_u16();
        if is_rejected_token(status) {
            tracing::info!(status, "token rejected");
            self.set_token(None);
            return None;
        }
        if !resp.status().is_success() {
            tracing::warn!(status, "session restore failed");
            return None;
        }
        match resp.json::<Identity>().await {
            Ok(identity) => Some(identity),
            Err(e) => {
                tracing::warn!(error = %e, "unreadable profile body");
                None
            }
        }
    }

    async fn login(&self, email: &str, password: &str) -> Result<Identity, AuthenticationError> {
        let transport = |e: reqwest::Error| AuthenticationError::Transport(e.to_string());
        let resp = self
            .http
            .post(self.config.endpoint(LOGIN_ENDPOINT))
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(transport)?;
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(login_failure(status, &body));
        }
        self.accept_session(resp).await.map_err(transport)
    }

    async fn register(&self, registration: &Registration) -> Result<Identity, RegistrationError> {
        let transport = |e: reqwest::Error| RegistrationError::Transport(e.to_string());
        let resp = self
            .http
            .post(self.config.endpoint(REGISTER_ENDPOINT))
            .json(registration)
            .send()
            .await
            .map_err(transport)?;
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(registration_failure(status, &body));
        }
        let body = resp.text().await.map_err(transport)?;
        let registered = parse_registered(&body)
            .map_err(|e| RegistrationError::Transport(format!("unreadable registration body: {e}")))?;
        match registered {
            Registered::SignedIn(session) => {
                self.set_token(Some(session.access_token));
                Ok(session.user)
            }
            Registered::Created => {
                tracing::info!("account created, signing in");
                self.login(&registration.email, &registration.password)
                    .await
                    .map_err(RegistrationError::from)
            }
        }
    }

    async fn invalidate_session(&self) -> Result<(), InvalidationError> {
        let Some(token) = self.token() else {
            return Ok(());
        };
        self.set_token(None);
        let resp = self
            .http
            .post(self.config.endpoint(LOGOUT_ENDPOINT))
            .header(reqwest::header::AUTHORIZATION, bearer(&token))
            .send()
            .await
            .map_err(|e| InvalidationError(e.to_string()))?;
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(InvalidationError(format!("logout returned {}", resp.status().as_u16())))
        }
    }
}
