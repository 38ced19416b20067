use super::*;

#[test]
fn each_placeholder_has_its_own_notice() {
    let pages = [Page::Textbooks, Page::Cart, Page::Orders, Page::Profile, Page::AdminDashboard];
    for page in pages {
        assert!(under_development(page).ends_with("under development."), "{page:?}");
    }
    assert_ne!(under_development(Page::Cart), under_development(Page::Orders));
}
