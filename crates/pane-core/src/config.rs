//! Shell Configuration
//!
//! Tunables read once at startup. Every field has a default, so an empty
//! JSON object is a valid configuration.

use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Viewports at or below this width use the narrow layout
    pub narrow_breakpoint_px: u32,
    pub sidebar_width_px: u32,
    /// Progress shown when a detail panel opens
    pub initial_progress: u8,
    /// Progress added per submitted comment
    pub progress_step: u8,
    /// `log` level name ("error" .. "trace", or "off")
    pub log_level: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            narrow_breakpoint_px: 768,
            sidebar_width_px: 256,
            initial_progress: 65,
            progress_step: 5,
            log_level: "info".to_string(),
        }
    }
}

impl ShellConfig {
    /// Parse a JSON object. Arrays and scalars are rejected, as are unknown keys.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(text)?;
        if !value.is_object() {
            return Err(invalid("config", "expected a JSON object"));
        }
        let config: Self = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.narrow_breakpoint_px == 0 {
            return Err(invalid("narrow_breakpoint_px", "must be greater than zero"));
        }
        if self.sidebar_width_px == 0 {
            return Err(invalid("sidebar_width_px", "must be greater than zero"));
        }
        if self.initial_progress > 100 {
            return Err(invalid("initial_progress", "must be at most 100"));
        }
        if self.progress_step > 100 {
            return Err(invalid("progress_step", "must be at most 100"));
        }
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| invalid("log_level", format!("unknown level `{}`", self.log_level)))?;
        Ok(())
    }

    /// Falls back to `Info` for an unvalidated, unknown level name
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}
