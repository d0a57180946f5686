//! Configuration for the box office console.
//!
//! Loaded from environment variables (a `.env` file is read first by the
//! binary). Only the backend URL and anon key are required.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Reminder site used when `REMINDER_BASE_URL` is unset
pub const DEFAULT_REMINDER_BASE_URL: &str = "http://localhost:3000";

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Hosted database connection
    pub backend: BackendConfig,
    /// Reminder delivery
    pub reminders: ReminderConfig,
    /// Operator to mount at startup (`ADMIN_USER_EMAIL`)
    pub admin_email: Option<String>,
    /// Default log directive (`LOG_LEVEL`), used when `RUST_LOG` is unset
    pub log_level: String,
}

/// Hosted database connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Project URL (`SUPABASE_URL`)
    pub url: String,
    /// Public anon key (`SUPABASE_ANON_KEY`)
    pub anon_key: String,
    /// Signed-in user's token (`SUPABASE_ACCESS_TOKEN`)
    pub access_token: Option<String>,
}

/// Reminder delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderConfig {
    /// Site serving `/api/sendEmail` (`REMINDER_BASE_URL`)
    pub base_url: String,
    /// Delivery mode (`REMINDER_MODE`)
    pub mode: ReminderMode,
}

/// How reminder batches are delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderMode {
    /// POST to the reminder endpoint
    #[default]
    Http,
    /// Log the batch instead of sending it
    Console,
}

impl FromStr for ReminderMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "console" => Ok(Self::Console),
            other => Err(ConfigError::Invalid {
                var: "REMINDER_MODE",
                reason: format!("expected `http` or `console`, got `{other}`"),
            }),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required variable is missing or a value
    /// can't be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through `lookup`, which returns a variable's value
    /// if it is set.
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required variable is missing or a value
    /// can't be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());
        let require = |var: &'static str| get(var).ok_or(ConfigError::Missing(var));

        let url = require("SUPABASE_URL")?;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                var: "SUPABASE_URL",
                reason: "must start with http:// or https://".to_string(),
            });
        }

        let mode = get("REMINDER_MODE")
            .map(|mode| mode.parse::<ReminderMode>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            backend: BackendConfig {
                url,
                anon_key: require("SUPABASE_ANON_KEY")?,
                access_token: get("SUPABASE_ACCESS_TOKEN"),
            },
            reminders: ReminderConfig {
                base_url: get("REMINDER_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_REMINDER_BASE_URL.to_string()),
                mode,
            },
            admin_email: get("ADMIN_USER_EMAIL"),
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }
}
