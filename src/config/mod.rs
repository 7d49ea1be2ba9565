use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Main application configuration
///
/// Every knob here is ambient: logging, display strings. Nothing in the
/// environment changes the fee arithmetic or the startup theme (always
/// light on a fresh load).
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    /// When set, tracing output goes to this file; when unset, logging is
    /// disabled entirely so nothing writes to the terminal the form owns.
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Unit suffix shown after fee and net amounts.
    pub currency_label: String,
    /// Address shown in the contact-info block.
    pub contact_email: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_file: env::var("FEEFORM_LOG_FILE").ok().map(PathBuf::from),
            },
            display: DisplayConfig {
                currency_label: env::var("FEEFORM_CURRENCY_LABEL")
                    .unwrap_or_else(|_| "SP".to_string()),
                contact_email: env::var("FEEFORM_CONTACT_EMAIL")
                    .unwrap_or_else(|_| "support@feeform.example".to_string()),
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.display.currency_label.trim().is_empty() {
            return Err(AppError::configuration(
                "Currency label must not be empty",
            ));
        }

        if !self.display.contact_email.contains('@') {
            return Err(AppError::configuration(
                "Contact email must contain an '@'",
            ));
        }

        Ok(())
    }
}
