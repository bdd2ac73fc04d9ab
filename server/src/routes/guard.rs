//! Server-side session guard for student pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the client `StudentLayout` redirect for full page loads: a request
//! for `/student` or anything below it without a live session is answered
//! with a redirect to `/login` before the SSR handler runs. API routes are
//! protected by the `AuthUser` extractor instead.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use portal_client::util::auth::{HOME_PATH, LOGIN_PATH};

use super::auth::session_user;
use crate::state::AppState;

/// Whether `path` belongs to the protected student area.
pub(crate) fn is_protected_path(path: &str) -> bool {
    path.strip_prefix(HOME_PATH).is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Axum middleware: redirect unauthenticated requests for student pages.
pub async fn require_student_session(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    if !is_protected_path(request.uri().path()) {
        return next.run(request).await;
    }
    if session_user(&state, &jar).await.is_none() {
        tracing::debug!(path = %request.uri().path(), "redirecting anonymous request to login");
        return Redirect::temporary(LOGIN_PATH).into_response();
    }
    next.run(request).await
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
