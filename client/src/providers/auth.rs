//! Authentication context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session itself is an HttpOnly cookie the browser cannot read, so the
//! provider starts in the pending state and asks `/api/auth/me` who is signed
//! in. Login and logout flows write the same signal afterwards.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Provides `RwSignal<AuthState>`, resolved by a one-shot session probe.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = RwSignal::new(AuthState::pending());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        // A login that finished first wins over the probe.
        auth.update(|a| {
            if a.loading {
                *a = AuthState::resolved(user);
            }
        });
    });

    children()
}
