//! Networking modules for the auth backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the `storefront::AuthService` contract over HTTP and
//! `config` resolves where that backend lives.

pub mod api;
pub mod config;
