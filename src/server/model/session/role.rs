use serde::{
    de::{value::StrDeserializer, IntoDeserializer},
    Deserialize, Deserializer, Serialize,
};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_USER_ROLES_KEY: &str = "testsystem:user:roles";

/// Role granted to a user by the authentication service
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

impl Role {
    /// Whether the role may manage its own tests
    pub fn can_author_tests(&self) -> bool {
        matches!(self, Self::Admin | Self::Teacher)
    }
}

/// Roles stored in the session, role names this service doesn't know are skipped on read
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionUserRoles(#[serde(deserialize_with = "known_roles")] pub Vec<Role>);

fn known_roles<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Role>, D::Error> {
    let names = Vec::<String>::deserialize(deserializer)?;

    Ok(names
        .iter()
        .filter_map(|name| {
            let name_de: StrDeserializer<serde::de::value::Error> =
                name.as_str().into_deserializer();
            let role = Role::deserialize(name_de).ok();
            if role.is_none() {
                tracing::debug!(role = %name, "Ignoring unknown session role");
            }

            role
        })
        .collect())
}

impl SessionUserRoles {
    /// Insert user roles into session
    pub async fn insert(session: &Session, roles: &[Role]) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ROLES_KEY, SessionUserRoles(roles.to_vec()))
            .await?;

        Ok(())
    }

    /// Get user roles from session, empty if none were stored
    pub async fn get(session: &Session) -> Result<Vec<Role>, Error> {
        Ok(session
            .get::<SessionUserRoles>(SESSION_USER_ROLES_KEY)
            .await?
            .map(|SessionUserRoles(roles)| roles)
            .unwrap_or_default())
    }
}
