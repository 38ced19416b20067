//! Root application component with routing and the session provider.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};
use storefront::Page;
use storefront::routes::HOME_PATH;

use crate::components::route_guard::RouteView;
use crate::state::session::provide_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and mounts one guarded route per row of the
/// route table. Unknown paths land on the home page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_session();

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Textbook Store"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=HOME_PATH/> }>
                <Route path=StaticSegment(Page::Login.segment()) view=|| view! { <RouteView page=Page::Login/> }/>
                <Route path=StaticSegment(Page::Register.segment()) view=|| view! { <RouteView page=Page::Register/> }/>
                <Route path=StaticSegment(Page::Home.segment()) view=|| view! { <RouteView page=Page::Home/> }/>
                <Route path=StaticSegment(Page::Textbooks.segment()) view=|| view! { <RouteView page=Page::Textbooks/> }/>
                <Route path=StaticSegment(Page::Cart.segment()) view=|| view! { <RouteView page=Page::Cart/> }/>
                <Route path=StaticSegment(Page::Orders.segment()) view=|| view! { <RouteView page=Page::Orders/> }/>
                <Route path=StaticSegment(Page::Profile.segment()) view=|| view! { <RouteView page=Page::Profile/> }/>
                <Route
                    path=StaticSegment(Page::AdminDashboard.segment())
                    view=|| view! { <RouteView page=Page::AdminDashboard/> }
                />
            </Routes>
        </Router>
    }
}
