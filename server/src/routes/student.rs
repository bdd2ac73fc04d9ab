//! Student data routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use portal_client::net::types::StudentOverview;

use super::auth::AuthUser;
use crate::state::AppState;

/// `GET /api/student/overview` — courses and announcements for the caller.
pub async fn overview(State(state): State<AppState>, auth: AuthUser) -> Result<Json<StudentOverview>, StatusCode> {
    state
        .directory
        .overview(&auth.user.id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}
