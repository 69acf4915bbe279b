use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::{role::SessionUserRoles, user::SessionUserId},
};

/// Retrieves the ID of the calling author from the session
///
/// The session is populated by the upstream authentication service; only users holding the
/// admin or teacher role may act as test authors.
///
/// # Arguments
/// - `session`: The user's session
///
/// # Returns
/// - `Ok(String)`: ID of the authenticated user
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: User ID not present in session
/// - `Err(Error::AuthError(AuthError::InsufficientRole))`: User holds neither the admin nor the teacher role
/// - `Err(Error)`: Internal errors (session store failures, etc.)
pub async fn get_author_from_session(session: &Session) -> Result<String, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let roles = SessionUserRoles::get(session).await?;
    if !roles.iter().any(|role| role.can_author_tests()) {
        return Err(Error::AuthError(AuthError::InsufficientRole(user_id)));
    }

    Ok(user_id)
}
