//! Pages whose features are not built yet.

#[cfg(test)]
#[path = "placeholder_test.rs"]
mod placeholder_test;

use leptos::prelude::*;
use storefront::Page;

/// Notice shown in the body of an unfinished page.
pub fn under_development(page: Page) -> &'static str {
    match page {
        Page::Textbooks => "Textbook browsing is under development.",
        Page::Cart => "The cart is under development.",
        Page::Orders => "Order history is under development.",
        Page::Profile => "Profile management is under development.",
        Page::AdminDashboard => "The admin dashboard is under development.",
        Page::Login | Page::Register | Page::Home => "This feature is under development.",
    }
}

#[component]
pub fn PlaceholderPage(page: Page) -> impl IntoView {
    view! {
        <section class="placeholder-page">
            <h1>{page.title()}</h1>
            <div class="placeholder-page__card">
                <p>{under_development(page)}</p>
            </div>
        </section>
    }
}
