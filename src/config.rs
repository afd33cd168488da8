//! Environment configuration for the remote task service.

use std::env;

/// Environment variable naming the service base URL.
pub const API_URL_VAR: &str = "TASKPAD_API_URL";
/// Environment variable naming the optional API secret key.
pub const SECRET_KEY_VAR: &str = "TASKPAD_SECRET_KEY";

/// Connection settings for the remote task service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL that request paths are appended to, without a trailing slash.
    pub base_url: String,
    /// Optional secret sent as `x-api-key` on every request.
    pub secret_key: Option<String>,
}

impl ApiConfig {
    /// Reads configuration from the process environment, honoring a `.env`
    /// file in the working directory when present.
    ///
    /// # Errors
    ///
    /// Returns an error string when `TASKPAD_API_URL` is unset or empty.
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();
        Self::from_vars(env::var(API_URL_VAR).ok(), env::var(SECRET_KEY_VAR).ok())
    }

    /// Builds a config from already-resolved variable values.
    ///
    /// # Errors
    ///
    /// Returns an error string when the base URL is missing or empty.
    pub fn from_vars(base_url: Option<String>, secret_key: Option<String>) -> Result<Self, String> {
        let base_url = base_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| format!("{API_URL_VAR} is not set; point it at the task service"))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            secret_key: secret_key.filter(|key| !key.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_base_url_is_an_error() {
        let result = ApiConfig::from_vars(None, None);
        assert!(result.unwrap_err().contains(API_URL_VAR));
    }

    #[test]
    fn empty_base_url_is_an_error() {
        let result = ApiConfig::from_vars(Some("  ".to_string()), None);
        assert!(result.is_err());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ApiConfig::from_vars(Some("https://api.example.com/".to_string()), None)
            .unwrap();
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn empty_secret_key_is_treated_as_absent() {
        let config = ApiConfig::from_vars(
            Some("https://api.example.com".to_string()),
            Some(String::new()),
        )
        .unwrap();
        assert!(config.secret_key.is_none());
    }
}
