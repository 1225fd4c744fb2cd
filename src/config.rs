use std::env;

use crate::error::ConfigError;

/// Connection settings for the hosted document store, read from the
/// environment. The host application uses these to build its store adapter;
/// the core itself only ever sees the resulting
/// [`DocumentStore`](crate::store::DocumentStore) handle.
#[derive(Debug, Clone)]
pub struct Config {
    pub project_id: String,
    pub credentials_path: Option<String>,
    pub emulator_host: Option<String>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            project_id: env::var("STORE_PROJECT_ID")
                .map_err(|_| ConfigError::MissingVar("STORE_PROJECT_ID"))?,
            credentials_path: env::var("STORE_CREDENTIALS_PATH").ok(),
            emulator_host: env::var("STORE_EMULATOR_HOST").ok(),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn missing_project_id_is_an_error() {
        unsafe {
            std::env::remove_var("STORE_PROJECT_ID");
        }
        assert!(Config::from_env().is_err());

        unsafe {
            std::env::set_var("STORE_PROJECT_ID", "demo-project");
        }
        let config = Config::from_env().expect("config");
        assert_eq!(config.project_id, "demo-project");
        assert_eq!(config.log_level, "info");

        unsafe {
            std::env::remove_var("STORE_PROJECT_ID");
        }
    }
}
