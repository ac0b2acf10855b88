use std::time::Duration;

use dioxus_logger::tracing::Level;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_API_HOST: &str = "0.0.0.0";
const DEFAULT_API_PORT: u16 = 8000;
const DEFAULT_READY_TIMEOUT_SECS: u64 = 10;
const DEFAULT_DISCORD_CDN_URL: &str = "https://cdn.discordapp.com";

pub struct Config {
    pub discord_token: String,

    pub api_host: String,
    pub api_port: u16,

    /// How long startup waits for the Discord session; zero disables the wait.
    pub discord_ready_timeout: Duration,
    pub discord_cdn_url: String,

    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value for a variable name, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and optional ones valid
    /// - `Err(AppError::ConfigErr)` - Missing token or unparsable value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = lookup("DISCORD_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?;

        let api_port = parse_or(&lookup, "API_PORT", DEFAULT_API_PORT)?;
        let ready_timeout_secs =
            parse_or(&lookup, "DISCORD_READY_TIMEOUT_SECS", DEFAULT_READY_TIMEOUT_SECS)?;
        let log_level = parse_or(&lookup, "LOG_LEVEL", Level::INFO)?;

        Ok(Self {
            discord_token: discord_token.trim().to_string(),
            api_host: lookup("API_HOST").unwrap_or_else(|| DEFAULT_API_HOST.to_string()),
            api_port,
            discord_ready_timeout: Duration::from_secs(ready_timeout_secs),
            discord_cdn_url: lookup("DISCORD_CDN_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_DISCORD_CDN_URL.to_string()),
            log_level,
        })
    }

    /// Address the HTTP listener binds to, as `host:port`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: value.clone(),
                reason: e.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    /// Tests defaults are applied when only the token is set.
    ///
    /// Expected: Ok with port 8000, 10 second timeout, public CDN and INFO logging
    #[test]
    fn applies_defaults() {
        let config = config_from(&[("DISCORD_TOKEN", "token")]).unwrap();

        assert_eq!(config.discord_token, "token");
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert_eq!(config.discord_ready_timeout, Duration::from_secs(10));
        assert_eq!(config.discord_cdn_url, "https://cdn.discordapp.com");
        assert_eq!(config.log_level, Level::INFO);
    }

    /// Tests a missing token is a configuration error.
    ///
    /// Expected: Err(ConfigError::MissingEnvVar("DISCORD_TOKEN"))
    #[test]
    fn rejects_missing_token() {
        let result = config_from(&[("API_PORT", "9000")]);

        match result {
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) => {
                assert_eq!(name, "DISCORD_TOKEN")
            }
            _ => panic!("Expected missing DISCORD_TOKEN error"),
        }
    }

    /// Tests a blank token counts as missing.
    ///
    /// Expected: Err(ConfigError::MissingEnvVar)
    #[test]
    fn rejects_blank_token() {
        let result = config_from(&[("DISCORD_TOKEN", "   ")]);

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(_)))
        ));
    }

    /// Tests overrides for every optional variable.
    ///
    /// Expected: Ok with overridden values and trailing slash removed from the CDN URL
    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("DISCORD_TOKEN", "token"),
            ("API_HOST", "127.0.0.1"),
            ("API_PORT", "3000"),
            ("DISCORD_READY_TIMEOUT_SECS", "0"),
            ("DISCORD_CDN_URL", "https://cdn.example.com/"),
            ("LOG_LEVEL", "debug"),
        ])
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.discord_ready_timeout, Duration::ZERO);
        assert_eq!(config.discord_cdn_url, "https://cdn.example.com");
        assert_eq!(config.log_level, Level::DEBUG);
    }

    /// Tests an unparsable port is reported with the offending value.
    ///
    /// Expected: Err(ConfigError::InvalidEnvVar) naming API_PORT
    #[test]
    fn rejects_invalid_port() {
        let result = config_from(&[("DISCORD_TOKEN", "token"), ("API_PORT", "eighty")]);

        match result {
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { name, value, .. })) => {
                assert_eq!(name, "API_PORT");
                assert_eq!(value, "eighty");
            }
            _ => panic!("Expected invalid API_PORT error"),
        }
    }
}
