//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its own form state and talks to the session through
//! context. `render` is the one place that maps a `storefront::Page` to a
//! view, so the router and the layout agree on what each page shows.

pub mod home;
pub mod login;
pub mod placeholder;
pub mod register;

use leptos::prelude::*;
use storefront::Page;

/// Body of `page`, without chrome.
pub fn render(page: Page) -> AnyView {
    match page {
        Page::Login => view! { <login::LoginPage /> }.into_any(),
        Page::Register => view! { <register::RegisterPage /> }.into_any(),
        Page::Home => view! { <home::HomePage /> }.into_any(),
        Page::Textbooks | Page::Cart | Page::Orders | Page::Profile | Page::AdminDashboard => {
            view! { <placeholder::PlaceholderPage page=page /> }.into_any()
        }
    }
}
