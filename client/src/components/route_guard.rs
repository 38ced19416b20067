//! Route-level access gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted by the router for every row of `storefront::routes::ROUTES`. The
//! decision itself comes from `Route::navigate`; this component only renders
//! it, re-evaluating whenever the session signal changes.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use storefront::{Navigation, Page};

use crate::components::layout::Layout;
use crate::pages;
use crate::state::session::use_session;

#[component]
pub fn RouteView(page: Page) -> impl IntoView {
    let state = use_session().state;
    let navigation = Memo::new(move |_| state.with(|s| page.route().navigate(s)));

    move || match navigation.get() {
        Navigation::Loading(_) => view! { <div class="route-loading">"Loading..."</div> }.into_any(),
        Navigation::Redirect(target) => {
            log::debug!("guard redirected {} to {target}", page.path());
            view! { <Redirect path=target /> }.into_any()
        }
        Navigation::Render(page) if page.route().guard.is_protected() => view! { <Layout page=page /> }.into_any(),
        Navigation::Render(page) => pages::render(page),
    }
}
