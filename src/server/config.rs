use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

pub static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_SESSION_INACTIVITY_DAYS: i64 = 7;

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub bind_address: SocketAddr,
    pub session_inactivity_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable lookup, `from_env` uses the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| lookup(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()));

        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        let session_inactivity_days = match lookup("SESSION_INACTIVITY_DAYS") {
            None => DEFAULT_SESSION_INACTIVITY_DAYS,
            Some(value) => match value.parse::<i64>() {
                Ok(days) if days > 0 => days,
                Ok(days) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "SESSION_INACTIVITY_DAYS".to_string(),
                        reason: format!("expected a positive number of days, got {}", days),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "SESSION_INACTIVITY_DAYS".to_string(),
                        reason: e.to_string(),
                    })
                }
            },
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            bind_address,
            session_inactivity_days,
        })
    }
}
