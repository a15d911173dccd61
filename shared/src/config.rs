use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::api::Endpoints;
use crate::colors::{fallback_department_colors, DepartmentPalette};

pub const DEFAULT_FILTER_STORAGE_KEY: &str = "calendarFilterPrefs";
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_NOTIFICATION_DURATION_MS: u32 = 3000;

/// Page-level settings. Every field has a default, so an empty object (or no
/// configuration at all) yields a working setup against the same origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Prefix for API calls; empty means same-origin relative paths
    pub api_base_url: String,
    pub filter_storage_key: String,
    /// `EnvFilter` directive string, e.g. `info` or `shared=debug,info`
    pub log_filter: String,
    pub notification_duration_ms: u32,
    pub department_colors: BTreeMap<String, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            filter_storage_key: DEFAULT_FILTER_STORAGE_KEY.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            notification_duration_ms: DEFAULT_NOTIFICATION_DURATION_MS,
            department_colors: fallback_department_colors(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(self.api_base_url.clone())
    }

    pub fn department_palette(&self) -> DepartmentPalette {
        if self.department_colors.is_empty() {
            DepartmentPalette::default()
        } else {
            DepartmentPalette::new(self.department_colors.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.filter_storage_key, "calendarFilterPrefs");
        assert_eq!(config.notification_duration_ms, 3000);
        assert_eq!(config.endpoints().projects(), "/api/projects");
    }

    #[test]
    fn test_partial_overrides() {
        let config = AppConfig::from_json(
            r##"{"apiBaseUrl":"http://localhost:5000","logFilter":"debug","departmentColors":{"SFX":"#000000"}}"##,
        )
        .unwrap();
        assert_eq!(config.endpoints().projects(), "http://localhost:5000/api/projects");
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.filter_storage_key, DEFAULT_FILTER_STORAGE_KEY);

        let palette = config.department_palette();
        assert_eq!(palette.style_for("SFX").background, "#000000");
        assert_eq!(palette.style_for("VFX").background, crate::colors::UNKNOWN_DEPARTMENT_COLOR);
    }

    #[test]
    fn test_empty_palette_uses_fallback() {
        let config = AppConfig::from_json(r#"{"departmentColors":{}}"#).unwrap();
        assert_eq!(config.department_palette(), DepartmentPalette::default());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(AppConfig::from_json("{not json").is_err());
        assert!(AppConfig::from_json(r#"{"notificationDurationMs":"soon"}"#).is_err());
    }
}
