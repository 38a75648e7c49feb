use gloo_storage::Storage;
use serde::{Deserialize, Serialize};

use crate::models::error::AppError;

/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Name used as the prefix of every console message
    pub const WIDGET_NAME: &'static str = "apod-widget";

    /// localStorage key holding the JSON configuration overrides
    pub const STORAGE_KEY: &'static str = "apod-config";

    /// Embedded player size used when no media caps are configured
    pub const DEFAULT_VIDEO_WIDTH: u32 = 960;
    pub const DEFAULT_VIDEO_HEIGHT: u32 = 540;

    /// Longest delay a browser timer honours; larger values fire at once
    pub const MAX_TIMER_DELAY_MS: u32 = i32::MAX as u32;
}

/// Layout hint describing where the host placed the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    FullscreenBelow,
    FullscreenAbove,
    /// Any regular region of the dashboard
    #[default]
    #[serde(other)]
    Region,
}

impl Position {
    /// Returns true when the widget fills the whole background.
    pub fn is_fullscreen(&self) -> bool {
        matches!(self, Position::FullscreenBelow | Position::FullscreenAbove)
    }
}

/// User-facing widget options.
///
/// Every key is optional in the JSON form; missing keys keep their defaults.
/// Durations are milliseconds and `0` for a media cap means unconstrained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetConfig {
    pub appid: String,
    pub update_interval: u32,
    pub animation_speed: u32,
    pub max_media_width: u32,
    pub max_media_height: u32,
    pub max_description_length: usize,
    pub show_title: bool,
    pub show_description: bool,
    pub use_short_description: bool,
    pub show_date: bool,
    pub initial_load_delay: u32,
    pub retry_delay: u32,
    pub api_base: String,
    pub apod_endpoint: String,
    pub background_size: String,
    pub background_position: String,
    pub background_overlay: String,
    pub position: Position,
    pub language: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            appid: String::new(),
            update_interval: 6 * 60 * 60 * 1000,
            animation_speed: 1000,
            max_media_width: 0,
            max_media_height: 0,
            max_description_length: 200,
            show_title: true,
            show_description: false,
            use_short_description: true,
            show_date: false,
            initial_load_delay: 0,
            retry_delay: 2500,
            api_base: "https://api.nasa.gov/".to_string(),
            apod_endpoint: "planetary/apod".to_string(),
            background_size: "cover".to_string(),
            background_position: "center".to_string(),
            background_overlay: String::new(),
            position: Position::default(),
            language: "en".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Parses a JSON object, filling absent keys with defaults.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        serde_json::from_str(json)
            .map_err(|e| AppError::ConfigError(format!("Invalid configuration: {e}")))
    }

    /// Loads the configuration stored in localStorage, falling back to defaults.
    pub fn load() -> Self {
        match gloo_storage::LocalStorage::get::<WidgetConfig>(Config::STORAGE_KEY) {
            Ok(config) => config,
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("No usable stored configuration ({e}), using defaults").into(),
                );
                Self::default()
            }
        }
    }

    /// Returns true if an API key has been supplied.
    pub fn has_appid(&self) -> bool {
        !self.appid.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WidgetConfig::default();
        assert_eq!(config.update_interval, 21_600_000);
        assert_eq!(config.retry_delay, 2500);
        assert_eq!(config.max_description_length, 200);
        assert!(config.show_title);
        assert!(!config.show_description);
        assert!(!config.has_appid());
    }

    #[test]
    fn test_partial_json_merges_over_defaults() {
        let config = WidgetConfig::from_json(r#"{"appid": "KEY", "showDescription": true}"#).unwrap();
        assert_eq!(config.appid, "KEY");
        assert!(config.show_description);
        assert_eq!(config.api_base, "https://api.nasa.gov/");
        assert_eq!(config.apod_endpoint, "planetary/apod");
    }

    #[test]
    fn test_whitespace_appid_is_missing() {
        let config = WidgetConfig::from_json(r#"{"appid": "   "}"#).unwrap();
        assert!(!config.has_appid());
    }

    #[test]
    fn test_position_parsing() {
        let config = WidgetConfig::from_json(r#"{"position": "fullscreen_below"}"#).unwrap();
        assert!(config.position.is_fullscreen());

        let config = WidgetConfig::from_json(r#"{"position": "top_left"}"#).unwrap();
        assert_eq!(config.position, Position::Region);
        assert!(!config.position.is_fullscreen());
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = WidgetConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }
}
