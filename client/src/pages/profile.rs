//! Signed-in student's profile details.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::auth::AuthState;

/// Up to two uppercase initials for the avatar fallback.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <section class="page profile-page">
            <h1 class="page__title">"Profile"</h1>
            {move || auth.get().user.map(|user| view! { <ProfileCard user/> })}
        </section>
    }
}

#[component]
fn ProfileCard(user: User) -> impl IntoView {
    let avatar = match user.avatar_url.clone() {
        Some(url) => view! { <img class="profile-card__avatar" src=url alt=user.name.clone()/> }.into_any(),
        None => view! { <div class="profile-card__avatar profile-card__avatar--initials">{initials(&user.name)}</div> }
            .into_any(),
    };

    view! {
        <div class="profile-card">
            {avatar}
            <dl class="profile-card__fields">
                <dt>"Name"</dt>
                <dd>{user.name}</dd>
                <dt>"Email"</dt>
                <dd>{user.email}</dd>
                <dt>"Program"</dt>
                <dd>{user.program.unwrap_or_else(|| "Undeclared".to_owned())}</dd>
                <dt>"Student ID"</dt>
                <dd>{user.id}</dd>
            </dl>
        </div>
    }
}
