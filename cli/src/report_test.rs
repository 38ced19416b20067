use storefront::{Identity, Role};

use super::*;

fn identity(role: Role) -> Identity {
    Identity {
        id: 7,
        username: "jdoe".to_owned(),
        first_name: "Jane".to_owned(),
        last_name: "Doe".to_owned(),
        role,
        ..Identity::default()
    }
}

fn line_for<'a>(lines: &'a [String], path: &str) -> &'a str {
    lines
        .iter()
        .find(|line| line.split_whitespace().next() == Some(path))
        .map(String::as_str)
        .unwrap()
}

#[test]
fn route_table_lists_every_route() {
    let lines = route_table();
    assert_eq!(lines.len(), ROUTES.len());
    assert!(line_for(&lines, "/admin").contains("admin"));
    assert!(line_for(&lines, "/login").contains("public"));
}

#[test]
fn signed_out_report_redirects_protected_routes() {
    let lines = access_report(&SessionState::signed_out());
    assert!(line_for(&lines, "/login").ends_with("granted"));
    assert!(line_for(&lines, "/cart").ends_with("redirect /login (signed out)"));
    assert!(line_for(&lines, "/admin").ends_with("redirect / (signed out)"));
}

#[test]
fn student_report_forbids_admin() {
    let lines = access_report(&SessionState::signed_in(identity(Role::Student)));
    assert!(line_for(&lines, "/").ends_with("granted"));
    assert!(line_for(&lines, "/admin").ends_with("redirect / (forbidden)"));
}

#[test]
fn admin_report_grants_everything() {
    let lines = access_report(&SessionState::signed_in(identity(Role::Admin)));
    assert!(lines.iter().all(|line| line.ends_with("granted")));
}

#[test]
fn resolving_report_is_pending_for_protected_routes() {
    let lines = access_report(&SessionState::resolving());
    assert!(line_for(&lines, "/orders").ends_with("pending"));
    assert!(line_for(&lines, "/register").ends_with("granted"));
}

#[test]
fn session_summary_variants() {
    assert_eq!(session_summary(&SessionState::signed_out()), "signed out");
    assert_eq!(session_summary(&SessionState::resolving()), "session unresolved");
    assert_eq!(
        session_summary(&SessionState::signed_in(identity(Role::Admin))),
        "signed in as Jane Doe (Admin)"
    );
}
