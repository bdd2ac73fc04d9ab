use super::*;
use crate::services::directory::hash_password;

#[test]
fn test_directory_password_matches_constant() {
    let state = test_helpers::test_app_state();
    let ada = state.directory.get("1").unwrap();
    assert_eq!(ada.password_sha256, hash_password(test_helpers::TEST_PASSWORD));
}

#[tokio::test]
async fn app_state_sessions_use_configured_ttl() {
    let state = test_helpers::test_app_state();
    assert_eq!(state.sessions.ttl(), state.config.session_ttl);
    assert_eq!(state.sessions.len().await, 0);
}

#[tokio::test]
async fn app_state_clones_share_sessions() {
    let state = test_helpers::test_app_state();
    let clone = state.clone();
    let token = state.sessions.create("1").await;
    assert_eq!(clone.sessions.validate(&token).await.as_deref(), Some("1"));
}
