//! Navigation model for the chrome that wraps every guarded page.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use crate::identity::Identity;
use crate::routes::{LOGIN_PATH, Page};

/// Where the logout action lands.
pub const LOGOUT_REDIRECT: &str = LOGIN_PATH;

/// Link shown in the top navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub page: Page,
    pub label: &'static str,
}

impl NavLink {
    #[must_use]
    pub fn href(self) -> &'static str {
        self.page.path()
    }
}

const TEXTBOOKS: NavLink = NavLink { page: Page::Textbooks, label: "Textbooks" };
const CART: NavLink = NavLink { page: Page::Cart, label: "Cart" };
const ORDERS: NavLink = NavLink { page: Page::Orders, label: "Orders" };
const ADMIN: NavLink = NavLink { page: Page::AdminDashboard, label: "Admin" };
const PROFILE: NavLink = NavLink { page: Page::Profile, label: "Profile" };

/// Links for the signed-in user. The admin link is only offered to admins.
#[must_use]
pub fn nav_links(identity: Option<&Identity>) -> Vec<NavLink> {
    let mut links = vec![TEXTBOOKS, CART, ORDERS];
    if show_admin_link(identity) {
        links.push(ADMIN);
    }
    links.push(PROFILE);
    links
}

#[must_use]
pub fn show_admin_link(identity: Option<&Identity>) -> bool {
    identity.is_some_and(Identity::is_admin)
}

/// Label for the user menu; empty while nobody is signed in.
#[must_use]
pub fn user_label(identity: Option<&Identity>) -> String {
    identity.map(Identity::display_name).unwrap_or_default()
}
