//! Browser localStorage helpers for the persisted access token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only piece of session state that survives a reload. The
//! HTTP adapter writes it on login/register and removes it on logout or when
//! the backend rejects it; SSR paths no-op.

/// Read the stored token for `key`. Blank values count as absent.
pub fn load(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        if raw.trim().is_empty() { None } else { Some(raw) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Persist `token` under `key`.
pub fn save(key: &str, token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            log::warn!("localStorage unavailable; session will not survive reload");
            return;
        };
        if storage.set_item(key, token).is_err() {
            log::warn!("failed to persist access token");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, token);
    }
}

/// Remove the token stored under `key`.
pub fn clear(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
