use std::path::PathBuf;

use interfaces_github_repositories::index::GITHUB_API_BASE;
use thiserror::Error;
use utils_trace::{TraceFormat, TraceFormatParseError};

pub const DEFAULT_ACCOUNT: &str = "ismaillaakoubi";
pub const DEFAULT_USER_AGENT: &str = "portfolio-render";
pub const DEFAULT_THEME_PATH: &str = ".portfolio-theme";
pub const DEFAULT_OUTPUT_PATH: &str = "index.html";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioConfig {
    pub account: String,
    pub api_base: String,
    pub user_agent: String,
    pub theme_path: PathBuf,
    pub output_path: PathBuf,
    pub log_level: String,
    pub log_format: TraceFormat,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DotEnv: {source}")]
    DotEnv {
        #[from]
        source: dotenvy::Error,
    },

    #[error("{name} must not be empty")]
    Empty { name: &'static str },

    #[error("{name}: {source}")]
    LogFormat {
        name: &'static str,
        source: TraceFormatParseError,
    },
}

impl PortfolioConfig {
    /// Reads `.env` when present, then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(source) if source.not_found() => {}
            Err(source) => return Err(ConfigError::DotEnv { source }),
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let text = |name: &'static str, default: &str| -> Result<String, ConfigError> {
            match lookup(name) {
                None => Ok(default.to_string()),
                Some(value) if value.trim().is_empty() => Err(ConfigError::Empty { name }),
                Some(value) => Ok(value.trim().to_string()),
            }
        };

        let log_format = match lookup("PORTFOLIO_LOG_FORMAT") {
            None => TraceFormat::default(),
            Some(value) => value.parse::<TraceFormat>().map_err(|source| ConfigError::LogFormat {
                name: "PORTFOLIO_LOG_FORMAT",
                source,
            })?,
        };

        Ok(Self {
            account: text("PORTFOLIO_GITHUB_ACCOUNT", DEFAULT_ACCOUNT)?,
            api_base: text("PORTFOLIO_GITHUB_API_BASE", GITHUB_API_BASE)?,
            user_agent: text("PORTFOLIO_USER_AGENT", DEFAULT_USER_AGENT)?,
            theme_path: PathBuf::from(text("PORTFOLIO_THEME_PATH", DEFAULT_THEME_PATH)?),
            output_path: PathBuf::from(text("PORTFOLIO_OUTPUT_PATH", DEFAULT_OUTPUT_PATH)?),
            log_level: text("PORTFOLIO_LOG_LEVEL", DEFAULT_LOG_LEVEL)?,
            log_format,
        })
    }
}
