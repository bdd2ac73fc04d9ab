//! Protected layout shell for `/student/*` routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every student page. Visitors without a session see a spinner and
//! are sent to `/login`; signed-in students get the sidebar and the page in a
//! margin-offset content column. This is a UX guard only; the server's session
//! guard and API extractors enforce access.

#[cfg(all(test, feature = "ssr"))]
#[path = "student_layout_test.rs"]
mod student_layout_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::loading::LoadingPlaceholder;
use crate::components::sidebar::Sidebar;
use crate::state::auth::AuthState;
use crate::util::auth::{GateView, install_unauth_redirect};

#[component]
pub fn StudentLayout(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <Show
            when=move || auth.with(GateView::for_state) == GateView::Content
            fallback=|| view! { <LoadingPlaceholder/> }
        >
            <div class="student-layout">
                <Sidebar/>
                <main class="student-layout__content">{children()}</main>
            </div>
        </Show>
    }
}
