//! Auth routes: password login, session lookup, logout.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use portal_client::net::types::{LoginRequest, User};

use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "portal_session";

/// Session cookie for a freshly created session.
pub(crate) fn session_cookie(token: String, secure: bool, ttl: std::time::Duration) -> Cookie<'static> {
    let max_age = time::Duration::try_from(ttl).unwrap_or(time::Duration::MAX);
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(max_age)
        .build()
}

/// Expired cookie that makes the browser drop the session.
pub(crate) fn cleared_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(time::Duration::ZERO)
        .build()
}

/// Resolve the session cookie in `jar` to a user, if it is valid.
pub(crate) async fn session_user(state: &AppState, jar: &CookieJar) -> Option<(User, String)> {
    let token = jar.get(COOKIE_NAME).map(Cookie::value)?;
    let student_id = state.sessions.validate(token).await?;
    let student = state.directory.get(&student_id)?;
    Some((student.to_user(), token.to_owned()))
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: User,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let app_state = AppState::from_ref(state);
        let (user, token) = session_user(&app_state, &jar)
            .await
            .ok_or(StatusCode::UNAUTHORIZED)?;
        Ok(Self { user, token })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/login` — check credentials, set session cookie, return the user.
pub async fn login(State(state): State<AppState>, jar: CookieJar, Json(body): Json<LoginRequest>) -> Response {
    let Some(student) = state.directory.authenticate(&body.email, &body.password) else {
        tracing::info!("login rejected");
        return (StatusCode::UNAUTHORIZED, "invalid email or password").into_response();
    };

    let token = state.sessions.create(&student.id).await;
    tracing::info!(student_id = %student.id, "student signed in");

    let cookie = session_cookie(token, state.config.cookie_secure, state.sessions.ttl());
    (jar.add(cookie), Json(student.to_user())).into_response()
}

/// `GET /api/auth/me` — return current user.
pub async fn me(auth: AuthUser) -> Json<User> {
    Json(auth.user)
}

/// `POST /api/auth/logout` — delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar, auth: AuthUser) -> impl IntoResponse {
    state.sessions.delete(&auth.token).await;
    tracing::info!(student_id = %auth.user.id, "student signed out");

    let jar = jar.add(cleared_session_cookie(state.config.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
