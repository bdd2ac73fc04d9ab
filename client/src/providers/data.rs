//! Student data context.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::data::DataState;
use crate::state::toast::ToastState;
#[cfg(feature = "hydrate")]
use crate::state::toast::ToastKind;

/// Provides `RwSignal<DataState>`, kept in step with the signed-in user.
///
/// Must be rendered inside `AuthProvider`.
#[component]
pub fn DataProvider(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let data = RwSignal::new(DataState::default());
    provide_context(data);

    Effect::new(move || {
        let user_id = auth.with(|a| a.user_id().map(str::to_owned));
        match user_id {
            Some(id) => {
                if data.with_untracked(|d| d.needs_load(&id)) {
                    data.update(|d| d.begin_load(&id));
                    load_overview(data, toasts, id);
                }
            }
            None => {
                if data.with_untracked(|d| d.loaded_for.is_some()) {
                    data.update(DataState::clear);
                }
            }
        }
    });

    children()
}

fn load_overview(data: RwSignal<DataState>, toasts: RwSignal<ToastState>, user_id: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_student_overview().await;
        let failure = result.as_ref().err().cloned();
        let mut applied = false;
        data.update(|d| applied = d.finish_load(&user_id, result));
        if let (true, Some(e)) = (applied, failure) {
            log::warn!("student overview load failed: {e}");
            crate::util::notify::notify(toasts, ToastKind::Error, format!("Could not load your courses: {e}"));
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (data, toasts, user_id);
}
