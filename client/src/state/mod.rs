//! Client-side state providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store lives in the framework-free `storefront` crate; this
//! module bridges it into a Leptos signal shared through context.

pub mod session;
