//! Session context: the shared `SessionStore` plus a reactive mirror of it.
//!
//! DESIGN
//! ======
//! Components never poll the store. `provide_session` subscribes once and
//! copies every snapshot into an `RwSignal`, so guards and chrome re-render
//! on login, logout, and when the restore settles.

use std::sync::Arc;

use leptos::prelude::*;
use storefront::{Identity, SessionState, SessionStore};

use crate::net::api::HttpAuthService;
use crate::net::config::client_config;

/// Handle stored in Leptos context.
#[derive(Clone, Debug)]
pub struct Session {
    pub store: SessionStore,
    pub state: RwSignal<SessionState>,
}

impl Session {
    /// Current identity, tracked.
    pub fn identity(&self) -> Option<Identity> {
        self.state.with(|s| s.identity.clone())
    }
}

/// Build the store, mirror it into a signal, start the restore, and
/// provide the result as context.
pub fn provide_session() -> Session {
    let store = SessionStore::new(Arc::new(HttpAuthService::new(client_config())));
    let state = RwSignal::new(store.state());

    let subscription = store.subscribe(move |snapshot| {
        let _ = state.try_set(snapshot.clone());
    });
    let cleanup_store = store.clone();
    on_cleanup(move || {
        cleanup_store.unsubscribe(subscription);
        cleanup_store.teardown();
    });

    #[cfg(feature = "hydrate")]
    {
        let store = store.clone();
        leptos::task::spawn_local(async move {
            store.initialize().await;
        });
    }

    let session = Session { store, state };
    provide_context(session.clone());
    session
}

/// Session handle from context. Panics outside `App`.
pub fn use_session() -> Session {
    expect_context::<Session>()
}
