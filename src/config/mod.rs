// GUI configuration module
pub mod theme;

use serde::Deserialize;
use thiserror::Error;

use crate::state::app_state::Theme;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration parse error: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Application configuration, mirroring `assets/config/default.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    pub window: WindowSettings,
    pub toolbar: ToolbarStyle,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppSettings {
    pub theme: String, // "dark" or "light"
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

/// Geometry of the control strip overlay.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToolbarStyle {
    pub bottom_offset: u32,
    pub corner_radius: u32,
    pub gap: u32,
}

impl AppConfig {
    /// Loads the default configuration embedded in the binary.
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_str = include_str!("../../assets/config/default.json");
        let config: AppConfig = serde_json::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size {}x{} must be non-zero",
                self.window.width, self.window.height
            )));
        }
        match self.app.theme.as_str() {
            "dark" | "light" => Ok(()),
            other => Err(ConfigError::Invalid(format!("unknown theme '{other}'"))),
        }
    }

    pub fn theme(&self) -> Theme {
        match self.app.theme.as_str() {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }
}
