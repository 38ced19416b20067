//! Static route table and the single dispatcher that applies it.
//!
//! DESIGN
//! ======
//! Every URL the storefront answers is one row in [`ROUTES`]: a path, the
//! guard that protects it, and the page it shows. The UI router and the
//! server both read this table, so adding a page means adding a row here and
//! nothing else decides access.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::guard::{GuardOutcome, GuardPolicy};
use crate::session::SessionState;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// Every screen the storefront can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Register,
    Home,
    Textbooks,
    Cart,
    Orders,
    Profile,
    AdminDashboard,
}

impl Page {
    /// Absolute path of the page.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::Register => "/register",
            Self::Home => HOME_PATH,
            Self::Textbooks => "/textbooks",
            Self::Cart => "/cart",
            Self::Orders => "/orders",
            Self::Profile => "/profile",
            Self::AdminDashboard => "/admin",
        }
    }

    /// Path without the leading slash, as the client router segments it.
    #[must_use]
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Register => "Create account",
            Self::Home => "Home",
            Self::Textbooks => "Textbooks",
            Self::Cart => "Cart",
            Self::Orders => "Order history",
            Self::Profile => "Profile",
            Self::AdminDashboard => "Admin dashboard",
        }
    }

    /// Table row for this page.
    #[must_use]
    pub fn route(self) -> &'static Route {
        &ROUTES[self as usize]
    }
}

/// One row of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub guard: GuardPolicy,
    pub page: Page,
}

/// Rows are ordered by `Page` discriminant so [`Page::route`] can index.
pub static ROUTES: [Route; 8] = [
    Route { path: Page::Login.path(), guard: GuardPolicy::Public, page: Page::Login },
    Route { path: Page::Register.path(), guard: GuardPolicy::Public, page: Page::Register },
    Route { path: Page::Home.path(), guard: GuardPolicy::Authenticated, page: Page::Home },
    Route { path: Page::Textbooks.path(), guard: GuardPolicy::Authenticated, page: Page::Textbooks },
    Route { path: Page::Cart.path(), guard: GuardPolicy::Authenticated, page: Page::Cart },
    Route { path: Page::Orders.path(), guard: GuardPolicy::Authenticated, page: Page::Orders },
    Route { path: Page::Profile.path(), guard: GuardPolicy::Authenticated, page: Page::Profile },
    Route { path: Page::AdminDashboard.path(), guard: GuardPolicy::Admin, page: Page::AdminDashboard },
];

/// What the router should do for a path in the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Show the page.
    Render(Page),
    /// Show the loading placeholder in place of the page.
    Loading(Page),
    /// Navigate elsewhere instead.
    Redirect(&'static str),
}

impl Route {
    #[must_use]
    pub fn evaluate(&self, state: &SessionState) -> GuardOutcome {
        self.guard.evaluate(state)
    }

    #[must_use]
    pub fn navigate(&self, state: &SessionState) -> Navigation {
        match self.evaluate(state) {
            GuardOutcome::Pending => Navigation::Loading(self.page),
            GuardOutcome::Denied { redirect, .. } => Navigation::Redirect(redirect),
            GuardOutcome::Granted => Navigation::Render(self.page),
        }
    }
}

/// Strip query, fragment and trailing slashes. An empty path is `/`.
#[must_use]
pub fn normalize_path(raw: &str) -> &str {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let trimmed = raw[..end].trim_end_matches('/');
    if trimmed.is_empty() { HOME_PATH } else { trimmed }
}

/// Look up the row for a URL path.
#[must_use]
pub fn resolve(path: &str) -> Option<&'static Route> {
    let path = normalize_path(path);
    ROUTES.iter().find(|route| route.path == path)
}

/// Route a URL path for the given session. Unknown paths go home.
#[must_use]
pub fn dispatch(path: &str, state: &SessionState) -> Navigation {
    match resolve(path) {
        Some(route) => route.navigate(state),
        None => {
            log::debug!("no route for {path}, redirecting home");
            Navigation::Redirect(HOME_PATH)
        }
    }
}
