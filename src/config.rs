//! # Bot Configuration Module
//!
//! Loads the bot token and the mini-app URL from the process environment,
//! optionally seeded from a `.env` file.

use reqwest::Url;
use std::path::Path;

use crate::config_errors::ConfigError;

/// Environment variable holding the Telegram bot token
pub const BOT_TOKEN_VAR: &str = "BOT_TOKEN";
/// Environment variable holding the mini-app URL
pub const WEBAPP_URL_VAR: &str = "WEBAPP_URL";

/// Startup configuration, immutable for the lifetime of the process
#[derive(Clone, PartialEq, Eq)]
pub struct BotConfig {
    /// Telegram bot token
    pub bot_token: String,
    /// URL the keyboard button opens as a Telegram Web App
    pub webapp_url: Url,
}

impl BotConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// The token is checked before the URL, so when both are absent the
    /// token is the one reported.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = required(&lookup, BOT_TOKEN_VAR)?;
        let webapp_url = parse_webapp_url(&required(&lookup, WEBAPP_URL_VAR)?)?;

        Ok(Self {
            bot_token,
            webapp_url,
        })
    }
}

impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("bot_token", &"<redacted>")
            .field("webapp_url", &self.webapp_url.as_str())
            .finish()
    }
}

fn required<F>(lookup: &F, var: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ConfigError::Missing { var }),
    }
}

/// Telegram only opens mini-apps served over HTTPS
fn parse_webapp_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
        var: WEBAPP_URL_VAR,
        reason: e.to_string(),
    })?;

    if url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl {
            var: WEBAPP_URL_VAR,
            reason: format!("expected an https URL, got scheme '{}'", url.scheme()),
        });
    }

    Ok(url)
}

/// Merge `./.env` into the process environment.
///
/// Returns whether a file was loaded. Variables already present in the
/// environment are left untouched.
pub fn load_env_file() -> bool {
    dotenv::dotenv().is_ok()
}

/// Merge the given dotenv file into the process environment
pub fn load_env_file_from(path: &Path) -> Result<(), dotenv::Error> {
    dotenv::from_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_are_trimmed() {
        let config = BotConfig::from_lookup(|name| match name {
            BOT_TOKEN_VAR => Some("  123:abc \n".to_string()),
            WEBAPP_URL_VAR => Some(" https://cashrocket.example/app ".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.bot_token, "123:abc");
        assert_eq!(config.webapp_url.as_str(), "https://cashrocket.example/app");
    }

    #[test]
    fn test_http_scheme_rejected() {
        let err = parse_webapp_url("http://cashrocket.example").unwrap_err();
        assert_eq!(err.var(), WEBAPP_URL_VAR);
        assert!(err.to_string().contains("https"));
    }

    #[test]
    fn test_relative_url_rejected() {
        let err = parse_webapp_url("cashrocket.example/app").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { var: WEBAPP_URL_VAR, .. }));
    }
}
