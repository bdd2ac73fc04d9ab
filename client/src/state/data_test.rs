use super::*;

fn course(id: &str, credits: u8, progress: u8) -> Course {
    Course {
        id: id.to_owned(),
        code: format!("C-{id}"),
        title: format!("Course {id}"),
        instructor: "Hopper".to_owned(),
        credits,
        progress,
    }
}

fn overview(courses: Vec<Course>) -> StudentOverview {
    StudentOverview {
        courses,
        announcements: vec![Announcement {
            id: "a1".to_owned(),
            title: "Welcome".to_owned(),
            body: "Term starts Monday.".to_owned(),
            posted_at: "2026-09-01".to_owned(),
        }],
    }
}

// =============================================================
// Load lifecycle
// =============================================================

#[test]
fn default_needs_load_for_any_user() {
    let state = DataState::default();
    assert!(state.needs_load("1"));
    assert!(!state.loading);
    assert!(state.overview.is_none());
}

#[test]
fn begin_load_marks_user_and_loading() {
    let mut state = DataState::default();
    state.begin_load("1");
    assert!(state.loading);
    assert!(!state.needs_load("1"));
    assert!(state.needs_load("2"));
}

#[test]
fn finish_load_success_stores_overview() {
    let mut state = DataState::default();
    state.begin_load("1");
    assert!(state.finish_load("1", Ok(overview(vec![course("a", 3, 50)]))));
    assert!(!state.loading);
    assert_eq!(state.courses().len(), 1);
    assert_eq!(state.announcements().len(), 1);
    assert!(state.error.is_none());
}

#[test]
fn finish_load_error_stores_message() {
    let mut state = DataState::default();
    state.begin_load("1");
    assert!(state.finish_load("1", Err("overview request failed: 500".to_owned())));
    assert!(!state.loading);
    assert!(state.overview.is_none());
    assert_eq!(state.error.as_deref(), Some("overview request failed: 500"));
}

#[test]
fn finish_load_for_previous_user_is_discarded() {
    let mut state = DataState::default();
    state.begin_load("1");
    state.begin_load("2");
    assert!(!state.finish_load("1", Ok(overview(vec![course("a", 3, 50)]))));
    assert!(state.loading);
    assert!(state.overview.is_none());
}

#[test]
fn finish_load_after_clear_is_discarded() {
    let mut state = DataState::default();
    state.begin_load("1");
    state.clear();
    assert!(!state.finish_load("1", Ok(overview(Vec::new()))));
    assert_eq!(state, DataState::default());
}

#[test]
fn begin_load_for_new_user_drops_old_overview() {
    let mut state = DataState::default();
    state.begin_load("1");
    state.finish_load("1", Ok(overview(vec![course("a", 3, 50)])));
    state.begin_load("2");
    assert!(state.courses().is_empty());
}

// =============================================================
// Derived values
// =============================================================

#[test]
fn total_credits_sums_courses() {
    let mut state = DataState::default();
    state.begin_load("1");
    state.finish_load("1", Ok(overview(vec![course("a", 3, 0), course("b", 4, 0)])));
    assert_eq!(state.total_credits(), 7);
}

#[test]
fn average_progress_none_without_courses() {
    let state = DataState::default();
    assert_eq!(state.average_progress(), None);
}

#[test]
fn average_progress_uses_clamped_values() {
    let mut state = DataState::default();
    state.begin_load("1");
    state.finish_load("1", Ok(overview(vec![course("a", 3, 200), course("b", 3, 50)])));
    assert_eq!(state.average_progress(), Some(75));
}
