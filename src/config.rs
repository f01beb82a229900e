/// Events endpoint configuration
use crate::error::ConfigError;
use url::Url;

pub const DEFAULT_EVENTS_URL: &str = "https://timeline-amikua.vercel.app/api/events";

/// Build-time override of the endpoint, e.g. a local dev server
const EVENTS_URL_OVERRIDE: Option<&str> = option_env!("TIMELINE_EVENTS_URL");

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub endpoint: Url,
}

impl Config {
    /// Configuration baked into this build
    pub fn load() -> Result<Config, ConfigError> {
        Config::with_endpoint(EVENTS_URL_OVERRIDE.unwrap_or(DEFAULT_EVENTS_URL))
    }

    pub fn with_endpoint(input: &str) -> Result<Config, ConfigError> {
        let endpoint = Url::parse(input.trim()).map_err(|source| ConfigError::InvalidUrl {
            input: input.to_string(),
            source,
        })?;

        match endpoint.scheme() {
            "http" | "https" => Ok(Config { endpoint }),
            other => Err(ConfigError::UnsupportedScheme {
                scheme: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let config = Config::with_endpoint(DEFAULT_EVENTS_URL).unwrap();
        assert_eq!(config.endpoint.as_str(), DEFAULT_EVENTS_URL);
    }

    #[test]
    fn test_local_override() {
        let config = Config::with_endpoint("http://localhost:3000/api/events").unwrap();
        assert_eq!(config.endpoint.host_str(), Some("localhost"));
        assert_eq!(config.endpoint.port(), Some(3000));
        assert_eq!(config.endpoint.path(), "/api/events");
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        let config = Config::with_endpoint("  https://example.com/api/events\n").unwrap();
        assert_eq!(config.endpoint.as_str(), "https://example.com/api/events");
    }

    #[test]
    fn test_relative_url_rejected() {
        let result = Config::with_endpoint("/api/events");
        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let result = Config::with_endpoint("ftp://example.com/events");
        assert!(matches!(result, Err(ConfigError::UnsupportedScheme { ref scheme }) if scheme == "ftp"));
    }
}
