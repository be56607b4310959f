//! Configuration loading.
//!
//! Both entry points read the same two required values. The HTTP server
//! validates them once at startup and refuses to serve without them; the
//! task recorder validates per invocation and exits non-zero instead.

use secrecy::SecretString;
use std::env;
use thiserror::Error;

/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 8000;

/// Env file the task recorder loads before reading the environment.
/// The chat-bot deployment ships credentials next to the API service.
pub const RECORDER_ENV_PATH: &str = "api/.env";

/// Validated runtime configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Database endpoint, e.g. `https://<project>.supabase.co`.
    pub supabase_url: String,
    /// Service-role credential. Never logged or echoed.
    pub service_role_key: SecretString,
    /// HTTP listen port (serve only).
    pub port: u16,
}

/// Configuration failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Supabase credentials not found")]
    MissingCredentials,

    #[error("invalid PORT value '{0}'")]
    InvalidPort(String),
}

impl Settings {
    /// Load `./.env` if present, then read the process environment.
    /// Existing environment variables win over the file.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Load the recorder's fixed env file, letting it override the process
    /// environment, then read the result.
    pub fn load_recorder() -> Result<Self, ConfigError> {
        dotenvy::from_path_override(RECORDER_ENV_PATH).ok();
        Self::from_env()
    }

    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var("SUPABASE_URL").ok(),
            env::var("SUPABASE_SERVICE_ROLE_KEY").ok(),
            env::var("PORT").ok(),
        )
    }

    fn from_vars(
        url: Option<String>,
        key: Option<String>,
        port: Option<String>,
    ) -> Result<Self, ConfigError> {
        let supabase_url = url
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingCredentials)?;
        let key = key
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingCredentials)?;
        let port = match port.filter(|s| !s.is_empty()) {
            Some(p) => p.parse().map_err(|_| ConfigError::InvalidPort(p))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            supabase_url,
            service_role_key: SecretString::from(key),
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn url() -> Option<String> {
        Some("https://example.supabase.co".to_string())
    }

    fn key() -> Option<String> {
        Some("service-role-key".to_string())
    }

    #[test]
    fn valid_settings_parse_with_default_port() {
        let settings = Settings::from_vars(url(), key(), None).unwrap();

        assert_eq!(settings.supabase_url, "https://example.supabase.co");
        assert_eq!(settings.service_role_key.expose_secret(), "service-role-key");
        assert_eq!(settings.port, DEFAULT_PORT);
    }

    #[test]
    fn explicit_port_overrides_default() {
        let settings = Settings::from_vars(url(), key(), Some("9000".to_string())).unwrap();

        assert_eq!(settings.port, 9000);
    }

    #[test]
    fn missing_url_is_rejected() {
        let result = Settings::from_vars(None, key(), None);

        assert!(matches!(result, Err(ConfigError::MissingCredentials)));
    }

    #[test]
    fn missing_key_is_rejected() {
        let result = Settings::from_vars(url(), None, None);

        assert!(matches!(result, Err(ConfigError::MissingCredentials)));
    }

    #[test]
    fn empty_values_count_as_missing() {
        let result = Settings::from_vars(Some(String::new()), key(), None);

        assert!(matches!(result, Err(ConfigError::MissingCredentials)));
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let result = Settings::from_vars(url(), key(), Some("eighty".to_string()));

        assert!(matches!(result, Err(ConfigError::InvalidPort(_))));
    }

    #[test]
    fn debug_output_redacts_the_key() {
        let settings = Settings::from_vars(url(), key(), None).unwrap();

        let debug = format!("{:?}", settings);
        assert!(!debug.contains("service-role-key"));
    }

    #[test]
    fn env_file_values_parse_into_settings() {
        use std::collections::HashMap;
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "SUPABASE_URL=https://example.supabase.co").unwrap();
        writeln!(file, "SUPABASE_SERVICE_ROLE_KEY=file-key").unwrap();

        // from_path_iter reads the file without mutating the process
        // environment, which keeps parallel tests honest.
        let vars: HashMap<String, String> = dotenvy::from_path_iter(&path)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        let settings = Settings::from_vars(
            vars.get("SUPABASE_URL").cloned(),
            vars.get("SUPABASE_SERVICE_ROLE_KEY").cloned(),
            None,
        )
        .unwrap();

        assert_eq!(settings.supabase_url, "https://example.supabase.co");
        assert_eq!(settings.service_role_key.expose_secret(), "file-key");
    }
}
