//! Session, guard, and route-table core for the textbook storefront.
//!
//! This crate owns everything that decides *whether* a page may be shown:
//! the signed-in identity, the session store that mutates it, the guard
//! policies, and the static route table. It has no UI or HTTP dependency, so
//! `client`, `server`, and `cli` all share one definition of access rules.

pub mod api;
pub mod config;
pub mod error;
pub mod guard;
pub mod identity;
pub mod routes;
pub mod service;
pub mod session;
pub mod shell;

pub use error::{AuthenticationError, InvalidationError, RegistrationError};
pub use guard::{Denial, GuardOutcome, GuardPolicy};
pub use identity::{Identity, Registration, Role};
pub use routes::{Navigation, Page, Route};
pub use service::AuthService;
pub use session::{SessionState, SessionStore, SubscriptionId};
