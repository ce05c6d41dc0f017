//! Runtime settings.
//!
//! This module provides the [`Settings`] type, the immutable process
//! configuration consumed by the HTTP boundary. There is no schema beyond
//! the defaults: every key is optional and falls back to its development
//! default when absent or unparsable.

/// Environment variable naming the deployment environment.
const ENV_APP_ENV: &str = "APP_ENV";
/// Environment variable for the listen port.
const ENV_PORT: &str = "PORT";
/// Environment variable for the log verbosity.
const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
/// Environment variable for the CORS allow-origin.
const ENV_CORS_ORIGIN: &str = "CORS_ORIGIN";

const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3001";

/// Immutable process configuration.
///
/// Loaded once at startup and passed to the boundary layer through the
/// application state; no global mutable singleton.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Deployment environment name ("development", "production", ...).
    pub environment: String,
    /// TCP port the HTTP server listens on.
    pub port: u16,
    /// Log verbosity, in `tracing` env-filter syntax.
    pub log_level: String,
    /// Origin allowed by the CORS policy.
    pub cors_origin: String,
}

impl Settings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings from an arbitrary key/value lookup.
    ///
    /// Missing keys use the development defaults; an unparsable `PORT`
    /// also falls back to the default rather than failing startup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup(ENV_PORT)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            environment: lookup(ENV_APP_ENV).unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            port,
            log_level: lookup(ENV_LOG_LEVEL).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            cors_origin: lookup(ENV_CORS_ORIGIN)
                .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
        }
    }

    /// Returns true when running in a production-equivalent environment.
    ///
    /// Gates diagnostics that must not leak to clients, such as stack
    /// traces in 5xx error bodies.
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let settings = Settings::from_lookup(|_| None);

        assert_eq!(settings.environment, "development");
        assert_eq!(settings.port, 3000);
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.cors_origin, "http://localhost:3001");
        assert!(!settings.is_production());
    }

    #[test]
    fn test_values_read_from_lookup() {
        let settings = Settings::from_lookup(|key| match key {
            "APP_ENV" => Some("production".to_string()),
            "PORT" => Some("8080".to_string()),
            "LOG_LEVEL" => Some("debug".to_string()),
            "CORS_ORIGIN" => Some("https://booking.example.com".to_string()),
            _ => None,
        });

        assert_eq!(settings.environment, "production");
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.cors_origin, "https://booking.example.com");
        assert!(settings.is_production());
    }

    #[test]
    fn test_unparsable_port_falls_back_to_default() {
        let settings = Settings::from_lookup(|key| match key {
            "PORT" => Some("not-a-port".to_string()),
            _ => None,
        });

        assert_eq!(settings.port, 3000);
    }

    #[test]
    fn test_staging_is_not_production() {
        let settings = Settings::from_lookup(|key| match key {
            "APP_ENV" => Some("staging".to_string()),
            _ => None,
        });

        assert!(!settings.is_production());
    }
}
