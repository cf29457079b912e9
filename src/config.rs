use serde::Deserialize;

use crate::error::SiteResult;

pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    pub event_name: String,
    /// Parsed by the browser's `Date`, so a string without an offset is local time.
    pub countdown_target: String,
    pub started_message: String,
    pub notification_ms: u32,
    pub welcome_message: String,
    pub welcome_delay_ms: u32,
    pub welcome_duration_ms: u32,
    pub global_name: String,
    pub log_level: LogLevel,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            event_name: "HILARICAS 2025".to_string(),
            countdown_target: "2025-02-14T09:30:00".to_string(),
            started_message: "Event Started!".to_string(),
            notification_ms: 2500,
            welcome_message: "🎉 Welcome to HILARICAS 2025!".to_string(),
            welcome_delay_ms: 1500,
            welcome_duration_ms: 3000,
            global_name: "HILARICAS".to_string(),
            log_level: LogLevel::Info,
        }
    }
}

impl SiteConfig {
    /// Reads the JSON block embedded in the page. Blank input means defaults.
    pub fn from_json(raw: &str) -> SiteResult<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_level(self) -> log::Level {
        match self {
            Self::Error => log::Level::Error,
            Self::Warn => log::Level::Warn,
            Self::Info => log::Level::Info,
            Self::Debug => log::Level::Debug,
            Self::Trace => log::Level::Trace,
        }
    }
}
