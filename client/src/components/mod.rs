//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `route_guard` turns a route-table decision into a view and `layout` draws
//! the navigation chrome around every protected page.

pub mod layout;
pub mod route_guard;
