//! # Configuration Error Types Module
//!
//! Errors raised while loading the bot configuration at startup.
//! Every variant names the environment variable at fault.

/// Custom error types for startup configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Variable is unset, empty or whitespace only
    Missing { var: &'static str },
    /// Variable is set but is not a usable web-app URL.
    ///
    /// Stricter than "any non-empty value": a plain `http://` URL is refused
    /// at startup because Telegram will not open it as a Web App.
    InvalidUrl { var: &'static str, reason: String },
}

impl ConfigError {
    /// Name of the environment variable this error is about
    pub fn var(&self) -> &'static str {
        match self {
            ConfigError::Missing { var } | ConfigError::InvalidUrl { var, .. } => *var,
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing { var } => write!(
                f,
                "{var} is not set. Put it into the .env file or export it in the environment"
            ),
            ConfigError::InvalidUrl { var, reason } => {
                write!(f, "{var} is not a valid web app URL: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
