//! Navigation chrome wrapped around every protected page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use storefront::Page;
use storefront::routes::HOME_PATH;
use storefront::shell::{LOGOUT_REDIRECT, nav_links, user_label};

use crate::pages;
use crate::state::session::use_session;

/// Top bar, user menu and the page body.
#[component]
pub fn Layout(page: Page) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let links_session = session.clone();
    let links = move || {
        nav_links(links_session.identity().as_ref())
            .into_iter()
            .map(|link| {
                let current = link.page == page;
                view! {
                    <a
                        class="nav-link"
                        class:nav-link--active=current
                        href=link.href()
                    >
                        {link.label}
                    </a>
                }
            })
            .collect_view()
    };

    let label_session = session.clone();
    let label = move || user_label(label_session.identity().as_ref());

    let store = session.store.clone();
    let on_logout = move |_| {
        let invalidate = store.logout();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(invalidate);
        #[cfg(not(feature = "hydrate"))]
        drop(invalidate);
        navigate(LOGOUT_REDIRECT, NavigateOptions::default());
    };

    view! {
        <div class="app-shell">
            <nav class="top-nav">
                <a class="top-nav__brand" href=HOME_PATH>"Textbook Store"</a>
                <div class="top-nav__links">{links}</div>
                <div class="user-menu">
                    <span class="user-menu__name">{label}</span>
                    <a class="user-menu__item" href=Page::Profile.path()>"Profile"</a>
                    <button class="user-menu__item" on:click=on_logout>"Log out"</button>
                </div>
            </nav>
            <main class="app-main">{pages::render(page)}</main>
        </div>
    }
}
