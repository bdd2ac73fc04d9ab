use leptos_router::components::Router;
use leptos_router::location::RequestUrl;

use super::*;
use crate::net::types::User;
use crate::state::theme::Theme;
use crate::state::toast::ToastState;

fn student() -> User {
    User {
        id: "1".to_owned(),
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.edu".to_owned(),
        program: Some("Mathematics".to_owned()),
        avatar_url: None,
    }
}

/// Server-render `StudentLayout` around a marker child for `state`.
fn render_layout(state: AuthState) -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RwSignal::new(state));
        provide_context(RwSignal::new(Theme::default()));
        provide_context(RwSignal::new(ToastState::default()));
        provide_context(RequestUrl::new("/student"));
        view! {
            <Router>
                <StudentLayout>
                    <p>"CHILD"</p>
                </StudentLayout>
            </Router>
        }
        .to_html()
    })
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle).unwrap_or_else(|| panic!("{needle:?} missing from {html}"))
}

#[test]
fn signed_out_renders_only_the_loading_placeholder() {
    let html = render_layout(AuthState::resolved(None));
    assert!(html.contains(r#"class="loading-placeholder""#), "{html}");
    assert!(html.contains(r#"role="status""#), "{html}");
    assert!(html.contains(r#"class="spinner""#), "{html}");
    assert!(!html.contains("CHILD"), "{html}");
    assert!(!html.contains(r#"class="sidebar""#), "{html}");
}

#[test]
fn pending_auth_renders_the_loading_placeholder() {
    let html = render_layout(AuthState::pending());
    assert!(html.contains(r#"class="loading-placeholder""#), "{html}");
    assert!(!html.contains("CHILD"), "{html}");
}

#[test]
fn signed_in_renders_sidebar_then_children_in_content_column() {
    let html = render_layout(AuthState::resolved(Some(student())));
    assert!(!html.contains("loading-placeholder"), "{html}");

    let sidebar = position(&html, r#"<aside class="sidebar">"#);
    let main = position(&html, r#"class="student-layout__content""#);
    let child = position(&html, "<p>CHILD</p>");
    let main_end = position(&html, "</main>");
    assert!(sidebar < main && main < child && child < main_end, "{html}");
    assert!(html.contains("Ada Lovelace"), "{html}");
}
