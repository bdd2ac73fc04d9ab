use super::*;

#[test]
fn first_name_takes_first_word() {
    assert_eq!(first_name("Ada Lovelace"), "Ada");
    assert_eq!(first_name("  Grace   Hopper "), "Grace");
}

#[test]
fn first_name_of_single_or_empty_name() {
    assert_eq!(first_name("Ada"), "Ada");
    assert_eq!(first_name(""), "");
}

#[test]
fn format_progress_renders_percent_or_dash() {
    assert_eq!(format_progress(Some(75)), "75%");
    assert_eq!(format_progress(Some(0)), "0%");
    assert_eq!(format_progress(None), "—");
}
