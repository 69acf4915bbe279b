//! Shared helpers for integration tests.

use axum::{body::to_bytes, response::Response};
use serde::de::DeserializeOwned;
use testsystem::server::model::session::{
    role::{Role, SESSION_USER_ROLES_KEY},
    user::SESSION_USER_ID_KEY,
};
use testsystem_test_utils::TestError;
use tower_sessions::Session;

/// Populates the session the way the authentication service does after login
pub async fn login_as(
    session: &Session,
    user_id: &str,
    roles: &[Role],
) -> Result<(), TestError> {
    session.insert(SESSION_USER_ID_KEY, user_id).await?;
    session.insert(SESSION_USER_ROLES_KEY, roles).await?;

    Ok(())
}

/// Reads a JSON response body
pub async fn body_json<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
