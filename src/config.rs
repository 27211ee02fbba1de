use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::error::ClientError;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SESSION_POLL_SECS: u64 = 60;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api_url: String,
    pub request_timeout_secs: u64,
    pub session_poll_secs: u64,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok(); // Load .env file if present

        let config = Config {
            api_url: env::var("DORM_API_URL")?,
            request_timeout_secs: env::var("DORM_REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
                .parse()?,
            session_poll_secs: env::var("DORM_SESSION_POLL_SECS")
                .unwrap_or_else(|_| DEFAULT_SESSION_POLL_SECS.to_string())
                .parse()?,
            log_format: parse_log_format(
                &env::var("DORM_LOG_FORMAT").unwrap_or_else(|_| "text".to_string()),
            )?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Config pointing at `api_url` with every other knob at its default.
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Config {
            api_url: api_url.into(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            session_poll_secs: DEFAULT_SESSION_POLL_SECS,
            log_format: LogFormat::Text,
        }
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if self.api_url.is_empty() {
            return Err(ClientError::Config("DORM_API_URL is empty".into()));
        }

        let url = url::Url::parse(&self.api_url)
            .map_err(|e| ClientError::Config(format!("DORM_API_URL is not a valid URL: {}", e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::Config(format!(
                "DORM_API_URL must use http or https, got {}",
                url.scheme()
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(ClientError::Config(
                "DORM_REQUEST_TIMEOUT_SECS must be greater than 0".into(),
            ));
        }
        if self.session_poll_secs == 0 {
            return Err(ClientError::Config(
                "DORM_SESSION_POLL_SECS must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn session_poll_interval(&self) -> Duration {
        Duration::from_secs(self.session_poll_secs)
    }
}

fn parse_log_format(raw: &str) -> anyhow::Result<LogFormat> {
    match raw.trim().to_lowercase().as_str() {
        "" | "text" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        other => anyhow::bail!("DORM_LOG_FORMAT must be 'text' or 'json', got '{}'", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::with_api_url("http://localhost:8183");
        assert!(config.validate().is_ok());
        assert_eq!(config.session_poll_interval(), Duration::from_secs(60));
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_validate_empty_api_url() {
        let config = Config::with_api_url("");
        assert!(matches!(config.validate(), Err(ClientError::Config(_))));
    }

    #[test]
    fn test_validate_invalid_url() {
        let config = Config::with_api_url("not-a-url");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        let config = Config::with_api_url("ftp://localhost:8183");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_poll_interval() {
        let mut config = Config::with_api_url("https://dorm.example.org");
        config.session_poll_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_log_format() {
        assert_eq!(parse_log_format("JSON").unwrap(), LogFormat::Json);
        assert_eq!(parse_log_format("text").unwrap(), LogFormat::Text);
        assert!(parse_log_format("xml").is_err());
    }
}
