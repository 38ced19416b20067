use super::*;
use crate::identity::{Identity, Role};

fn signed_in(role: Role) -> SessionState {
    SessionState::signed_in(Identity {
        id: 21,
        username: "ren".to_owned(),
        email: "ren@example.com".to_owned(),
        first_name: "Ren".to_owned(),
        last_name: "Kato".to_owned(),
        role,
        school_id: Some(2),
        student_id: Some("S-21".to_owned()),
        grade: None,
        class_name: None,
    })
}

const AUTHENTICATED_PATHS: [&str; 5] = ["/", "/textbooks", "/cart", "/orders", "/profile"];

// =============================================================
// Table shape
// =============================================================

#[test]
fn table_rows_are_indexed_by_page() {
    for (index, route) in ROUTES.iter().enumerate() {
        assert_eq!(route.page as usize, index, "row {index} out of order");
        assert_eq!(route.path, route.page.path());
        assert_eq!(route.page.route(), route);
    }
}

#[test]
fn table_paths_are_unique() {
    for (i, a) in ROUTES.iter().enumerate() {
        for b in &ROUTES[i + 1..] {
            assert_ne!(a.path, b.path);
        }
    }
}

#[test]
fn table_policies_match_url_surface() {
    assert_eq!(Page::Login.route().guard, GuardPolicy::Public);
    assert_eq!(Page::Register.route().guard, GuardPolicy::Public);
    for path in AUTHENTICATED_PATHS {
        assert_eq!(resolve(path).unwrap().guard, GuardPolicy::Authenticated, "{path}");
    }
    assert_eq!(resolve("/admin").unwrap().guard, GuardPolicy::Admin);
}

#[test]
fn segment_drops_leading_slash() {
    assert_eq!(Page::Home.segment(), "");
    assert_eq!(Page::Cart.segment(), "cart");
    assert_eq!(Page::AdminDashboard.segment(), "admin");
}

// =============================================================
// Path normalization
// =============================================================

#[test]
fn normalize_strips_query_fragment_and_trailing_slash() {
    assert_eq!(normalize_path("/cart/"), "/cart");
    assert_eq!(normalize_path("/orders?page=2"), "/orders");
    assert_eq!(normalize_path("/profile#top"), "/profile");
    assert_eq!(normalize_path(""), "/");
    assert_eq!(normalize_path("/"), "/");
    assert_eq!(normalize_path("/?next=/cart"), "/");
}

#[test]
fn resolve_unknown_path_is_none() {
    assert!(resolve("/checkout").is_none());
    assert!(resolve("/admin/users").is_none());
}

// =============================================================
// Dispatch
// =============================================================

#[test]
fn unknown_path_redirects_home() {
    assert_eq!(dispatch("/nope", &signed_in(Role::Student)), Navigation::Redirect("/"));
    assert_eq!(dispatch("/nope", &SessionState::resolving()), Navigation::Redirect("/"));
}

#[test]
fn signed_out_visitor_is_sent_to_login_from_every_authenticated_route() {
    for path in AUTHENTICATED_PATHS {
        assert_eq!(dispatch(path, &SessionState::signed_out()), Navigation::Redirect("/login"), "{path}");
    }
}

#[test]
fn resolving_session_shows_loading_on_protected_routes() {
    for path in AUTHENTICATED_PATHS.into_iter().chain(["/admin"]) {
        let page = resolve(path).unwrap().page;
        assert_eq!(dispatch(path, &SessionState::resolving()), Navigation::Loading(page));
    }
}

#[test]
fn public_pages_render_while_resolving() {
    assert_eq!(dispatch("/login", &SessionState::resolving()), Navigation::Render(Page::Login));
    assert_eq!(dispatch("/register", &SessionState::signed_out()), Navigation::Render(Page::Register));
}

#[test]
fn restored_student_gets_home_but_not_admin() {
    let state = signed_in(Role::Student);
    assert_eq!(dispatch("/", &state), Navigation::Render(Page::Home));
    assert_eq!(dispatch("/admin", &state), Navigation::Redirect("/"));
}

#[test]
fn signed_out_admin_route_redirects_home() {
    assert_eq!(dispatch("/admin", &SessionState::signed_out()), Navigation::Redirect("/"));
}

#[test]
fn admin_reaches_dashboard() {
    assert_eq!(dispatch("/admin", &signed_in(Role::Admin)), Navigation::Render(Page::AdminDashboard));
}

#[test]
fn student_deep_link_to_cart_renders_cart() {
    assert_eq!(dispatch("/cart", &signed_in(Role::Student)), Navigation::Render(Page::Cart));
}

#[test]
fn logout_while_on_admin_page_redirects_immediately() {
    let route = resolve("/admin").unwrap();
    assert_eq!(route.navigate(&signed_in(Role::Admin)), Navigation::Render(Page::AdminDashboard));
    assert_eq!(route.navigate(&SessionState::signed_out()), Navigation::Redirect("/"));
}
