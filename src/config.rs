// ABOUTME: Database connection settings, read from the environment at startup.
// ABOUTME: No credentials or endpoints live in source.

use crate::error::DbError;

/// Connection settings for the remote analysis database.
///
/// Every field comes from a `DATADESK_DB_*` environment variable. No Debug
/// impl: the password must not end up in log output.
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Table searched by the notice keyword tool.
    pub notice_table: String,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

impl DbConfig {
    /// Load settings from `DATADESK_DB_*` environment variables.
    pub fn from_env() -> Result<Self, DbError> {
        let port = env_or("DATADESK_DB_PORT", "3306")
            .parse::<u16>()
            .map_err(|e| DbError::Config(format!("DATADESK_DB_PORT: {e}")))?;

        Ok(Self {
            host: env_or("DATADESK_DB_HOST", "127.0.0.1"),
            port,
            user: env_or("DATADESK_DB_USER", "root"),
            password: env_or("DATADESK_DB_PASSWORD", ""),
            database: env_or("DATADESK_DB_NAME", "smu"),
            notice_table: env_or("DATADESK_NOTICE_TABLE", "smu_notices"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Both tests mutate DATADESK_DB_PORT; serialize them.
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    #[test]
    fn test_defaults_without_env() {
        let _guard = ENV_LOCK.lock().unwrap();

        // Temporarily unset the port var if it exists
        let original = std::env::var("DATADESK_DB_PORT").ok();
        unsafe {
            std::env::remove_var("DATADESK_DB_PORT");
        }

        let config = DbConfig::from_env().unwrap();
        assert_eq!(config.port, 3306);
        assert_eq!(config.notice_table, "smu_notices");

        if let Some(val) = original {
            unsafe {
                std::env::set_var("DATADESK_DB_PORT", val);
            }
        }
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        let _guard = ENV_LOCK.lock().unwrap();

        let original = std::env::var("DATADESK_DB_PORT").ok();
        unsafe {
            std::env::set_var("DATADESK_DB_PORT", "not-a-port");
        }

        let result = DbConfig::from_env();
        assert!(matches!(result, Err(DbError::Config(_))));

        unsafe {
            match original {
                Some(val) => std::env::set_var("DATADESK_DB_PORT", val),
                None => std::env::remove_var("DATADESK_DB_PORT"),
            }
        }
    }
}
