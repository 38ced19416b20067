//! Session store: the single owner of "who is signed in".
//!
//! ARCHITECTURE
//! ============
//! `SessionStore` is an explicitly constructed, cloneable handle. Guards and
//! pages only read it (`state()` or a subscription); the four operations below
//! are the only writers. Every write notifies subscribers with a snapshot, so
//! a logout triggered anywhere re-evaluates every mounted guard.
//!
//! LIFECYCLE
//! =========
//! A fresh store is `loading` with no identity. `initialize` runs the restore
//! once; `teardown` drops all subscribers when the owning app unmounts.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::error::{AuthenticationError, RegistrationError};
use crate::identity::{Identity, Registration};
use crate::service::AuthService;

/// Observable session snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub identity: Option<Identity>,
    pub loading: bool,
}

impl SessionState {
    /// Startup state before the restore has answered.
    #[must_use]
    pub fn resolving() -> Self {
        Self { identity: None, loading: true }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self { identity: None, loading: false }
    }

    #[must_use]
    pub fn signed_in(identity: Identity) -> Self {
        Self { identity: Some(identity), loading: false }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::resolving()
    }
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&SessionState) + Send + Sync>;

struct Inner {
    auth: Arc<dyn AuthService>,
    state: RwLock<SessionState>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_subscription: AtomicU64,
    initialized: AtomicBool,
    /// Bumped by every user-driven identity change (login, register, logout).
    generation: AtomicU64,
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &self.state())
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    #[must_use]
    pub fn new(auth: Arc<dyn AuthService>) -> Self {
        Self {
            inner: Arc::new(Inner {
                auth,
                state: RwLock::new(SessionState::resolving()),
                listeners: Mutex::new(Vec::new()),
                next_subscription: AtomicU64::new(0),
                initialized: AtomicBool::new(false),
                generation: AtomicU64::new(0),
            }),
        }
    }

    // =========================================================================
    // READS
    // =========================================================================

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn identity(&self) -> Option<Identity> {
        self.state().identity
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state().loading
    }

    /// Whether `initialize` has been started on this store.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.inner.initialized.load(Ordering::Acquire)
    }

    // =========================================================================
    // SUBSCRIPTIONS
    // =========================================================================

    /// Register a callback invoked with the new snapshot after every change.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&SessionState) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.inner.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|(existing, _)| *existing != id);
    }

    /// Drop every subscriber. Called when the owning application unmounts.
    pub fn teardown(&self) {
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    // =========================================================================
    // OPERATIONS
    // =========================================================================

    /// Run the one-time restore. Later calls return immediately.
    ///
    /// A restore that finds nothing is not an error: the store settles as
    /// signed out. A restored identity is discarded if a login, registration
    /// or logout happened while the restore was in flight.
    pub async fn initialize(&self) {
        if self.inner.initialized.swap(true, Ordering::AcqRel) {
            return;
        }

        let started = self.inner.generation.load(Ordering::Acquire);
        let restored = self.inner.auth.restore_session().await;
        let superseded = self.inner.generation.load(Ordering::Acquire) != started;
        match &restored {
            Some(_) if superseded => log::info!("session changed during restore, ignoring restored identity"),
            Some(identity) => log::info!("session restored for user {}", identity.id),
            None => log::info!("no session to restore"),
        }

        self.update(|state| {
            if !superseded {
                state.identity = restored;
            }
            state.loading = false;
        });
    }

    /// Sign in with credentials.
    ///
    /// # Errors
    ///
    /// Returns the service's [`AuthenticationError`]; the current identity is
    /// left untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, AuthenticationError> {
        match self.inner.auth.login(email, password).await {
            Ok(identity) => {
                log::info!("login succeeded for user {}", identity.id);
                self.settle(Some(identity.clone()));
                Ok(identity)
            }
            Err(err) => {
                log::warn!("login failed: {err}");
                self.settle(None);
                Err(err)
            }
        }
    }

    /// Create an account and sign it in.
    ///
    /// # Errors
    ///
    /// Returns the service's [`RegistrationError`]; the current identity is
    /// left untouched.
    pub async fn register(&self, registration: &Registration) -> Result<Identity, RegistrationError> {
        match self.inner.auth.register(registration).await {
            Ok(identity) => {
                log::info!("registration succeeded for user {}", identity.id);
                self.settle(Some(identity.clone()));
                Ok(identity)
            }
            Err(err) => {
                log::warn!("registration failed: {err}");
                self.settle(None);
                Err(err)
            }
        }
    }

    /// Clear the identity now and hand back the remote invalidation.
    ///
    /// The local state is signed out before this returns. The returned future
    /// only talks to the backend; callers spawn it or drop it, and its failure
    /// is logged rather than surfaced.
    pub fn logout(&self) -> impl Future<Output = ()> + 'static {
        self.inner.generation.fetch_add(1, Ordering::AcqRel);
        self.update(|state| {
            state.identity = None;
            state.loading = false;
        });
        log::info!("signed out locally");

        let auth = Arc::clone(&self.inner.auth);
        async move {
            if let Err(err) = auth.invalidate_session().await {
                log::warn!("{err}");
            }
        }
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    /// Finish a login/register call: store a new identity if there is one and
    /// clear `loading`. A failed call only touches `loading`.
    fn settle(&self, identity: Option<Identity>) {
        if identity.is_none() && !self.is_loading() {
            return;
        }
        if identity.is_some() {
            self.inner.generation.fetch_add(1, Ordering::AcqRel);
        }
        self.update(|state| {
            if identity.is_some() {
                state.identity = identity;
            }
            state.loading = false;
        });
    }

    fn update(&self, apply: impl FnOnce(&mut SessionState)) {
        let snapshot = {
            let mut state = self
                .inner
                .state
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let before = state.clone();
            apply(&mut *state);
            if *state == before {
                return;
            }
            state.clone()
        };

        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}
