//! Fixed navigation sidebar for student pages.
//!
//! ARCHITECTURE
//! ============
//! Reads auth and theme from context and writes them back for logout and
//! theme toggling. Logout only clears auth state; the enclosing
//! `StudentLayout` notices and performs the redirect.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;
use crate::state::theme::Theme;
use crate::state::toast::ToastState;
#[cfg(feature = "hydrate")]
use crate::state::toast::ToastKind;
use crate::util::auth::HOME_PATH;
use crate::util::notify::use_toasts;

/// Sidebar navigation entries as `(href, label)`.
pub const NAV_ITEMS: [(&str, &str); 3] =
    [(HOME_PATH, "Dashboard"), ("/student/courses", "Courses"), ("/student/profile", "Profile")];

/// Whether the link to `href` should be highlighted on `current`.
///
/// The dashboard root only matches itself; other entries also match their
/// nested paths.
pub fn link_is_active(current: &str, href: &str) -> bool {
    let current = current.trim_end_matches('/');
    if href == HOME_PATH {
        return current == HOME_PATH;
    }
    current == href || current.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let theme = expect_context::<RwSignal<Theme>>();
    let toasts = use_toasts();
    let pathname = use_location().pathname;
    let signing_out = RwSignal::new(false);

    let user_name = move || auth.with(|a| a.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let user_program = move || {
        auth.with(|a| {
            a.user
                .as_ref()
                .and_then(|u| u.program.clone())
                .unwrap_or_else(|| "Undeclared".to_owned())
        })
    };

    let on_logout = move |_| {
        if signing_out.get() {
            return;
        }
        signing_out.set(true);
        sign_out(auth, toasts, signing_out);
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">"Student Portal"</div>
            <nav class="sidebar__nav">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(href, label)| {
                        let active = move || pathname.with(|p| link_is_active(p, href));
                        view! {
                            <a
                                href=href
                                class="sidebar__link"
                                class:sidebar__link--active=active
                                aria-current=move || if active() { Some("page") } else { None }
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <div class="sidebar__footer">
                <div class="sidebar__user">
                    <span class="sidebar__user-name">{user_name}</span>
                    <span class="sidebar__user-program">{user_program}</span>
                </div>
                <button
                    class="btn sidebar__theme-toggle"
                    title="Toggle theme"
                    on:click=move |_| theme.update(|t| *t = t.toggled())
                >
                    {move || theme.get().toggle_icon()}
                </button>
                <button class="btn sidebar__logout" on:click=on_logout disabled=move || signing_out.get()>
                    "Log out"
                </button>
            </div>
        </aside>
    }
}

fn sign_out(auth: RwSignal<AuthState>, toasts: RwSignal<ToastState>, signing_out: RwSignal<bool>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::net::api::logout().await;
        auth.set(AuthState::resolved(None));
        crate::util::notify::notify(toasts, ToastKind::Info, "You have been signed out.");
        signing_out.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = toasts;
        auth.set(AuthState::resolved(None));
        signing_out.set(false);
    }
}
