use super::*;

#[test]
fn dashboard_link_matches_only_root() {
    assert!(link_is_active("/student", "/student"));
    assert!(link_is_active("/student/", "/student"));
    assert!(!link_is_active("/student/courses", "/student"));
}

#[test]
fn section_link_matches_itself_and_children() {
    assert!(link_is_active("/student/courses", "/student/courses"));
    assert!(link_is_active("/student/courses/cs101", "/student/courses"));
}

#[test]
fn section_link_ignores_shared_prefixes() {
    assert!(!link_is_active("/student/coursework", "/student/courses"));
    assert!(!link_is_active("/student/profile", "/student/courses"));
}

#[test]
fn nav_items_start_with_dashboard() {
    assert_eq!(NAV_ITEMS[0], (HOME_PATH, "Dashboard"));
    assert!(NAV_ITEMS.iter().all(|(href, _)| href.starts_with(HOME_PATH)));
}
