//! Landing page for signed-in users.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use storefront::{Identity, Page};

use crate::state::session::use_session;

/// Greeting line under the heading.
pub fn greeting(identity: Option<&Identity>) -> String {
    match identity {
        Some(identity) => format!("Welcome back, {}.", identity.display_name()),
        None => "Welcome.".to_owned(),
    }
}

/// Shortcut cards. Entries are `(page, heading, blurb)`.
const SHORTCUTS: [(Page, &str, &str); 3] = [
    (Page::Textbooks, "Find textbooks", "Search for the books you need and add them to your cart."),
    (Page::Cart, "Review your cart", "Check the books you picked and place your order."),
    (Page::Orders, "Order history", "See what you have ordered before."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    let greeting_session = session.clone();
    let greeting_text = move || greeting(greeting_session.identity().as_ref());
    let is_admin = move || session.identity().is_some_and(|identity| identity.is_admin());

    let shortcuts = SHORTCUTS
        .iter()
        .map(|(page, heading, blurb)| {
            view! {
                <a class="home-card" href=page.path()>
                    <h2>{*heading}</h2>
                    <p>{*blurb}</p>
                </a>
            }
        })
        .collect_view();

    view! {
        <section class="home-page">
            <h1>"Textbook Store"</h1>
            <p class="home-page__greeting">{greeting_text}</p>
            <div class="home-page__cards">{shortcuts}</div>
            <Show when=is_admin>
                <div class="home-admin">
                    <h2>"Administration"</h2>
                    <p>"Manage the store as an administrator."</p>
                    <a class="home-admin__link" href=Page::AdminDashboard.path()>"Open admin dashboard"</a>
                </div>
            </Show>
        </section>
    }
}
