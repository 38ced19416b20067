use super::*;
use storefront::Role;

#[test]
fn greeting_uses_display_name() {
    let identity = Identity {
        id: 1,
        username: "jdoe".to_owned(),
        first_name: "Jane".to_owned(),
        last_name: "Doe".to_owned(),
        role: Role::Student,
        ..Identity::default()
    };
    assert_eq!(greeting(Some(&identity)), "Welcome back, Jane Doe.");
}

#[test]
fn greeting_without_identity() {
    assert_eq!(greeting(None), "Welcome.");
}

#[test]
fn shortcuts_point_at_guarded_pages() {
    for (page, _, _) in SHORTCUTS {
        assert!(page.route().guard.is_protected());
    }
}
