use std::cell::RefCell;

use log::Level;

const API_BASE_KEY: &str = "finsight_api_base";
const LOG_LEVEL_KEY: &str = "finsight_log_level";

const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Runtime configuration. Defaults can be overridden per browser through
/// local storage, which is handy when pointing a deployed bundle at a
/// different backend.
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Base URL every API endpoint is appended to, without a trailing slash.
    pub api_base: String,
    pub log_level: Level,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            log_level: Level::Info,
        }
    }
}

impl AppSettings {
    pub fn with_overrides(api_base: Option<String>, log_level: Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(base) = api_base {
            let base = base.trim().trim_end_matches('/');
            if !base.is_empty() {
                settings.api_base = base.to_string();
            }
        }

        if let Some(level) = log_level {
            settings.log_level = parse_level(&level).unwrap_or(settings.log_level);
        }

        settings
    }

    pub fn from_storage() -> Self {
        let mut api_base = None;
        let mut log_level = None;

        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                api_base = storage.get_item(API_BASE_KEY).ok().flatten();
                log_level = storage.get_item(LOG_LEVEL_KEY).ok().flatten();
            }
        }

        Self::with_overrides(api_base, log_level)
    }

    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base, endpoint)
    }
}

fn parse_level(raw: &str) -> Option<Level> {
    match raw.trim().to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Reads overrides from local storage. Call once before the app renders.
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_storage();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_overrides() {
        let settings = AppSettings::with_overrides(None, None);
        assert_eq!(settings.api_base, "http://localhost:5000/api");
        assert_eq!(settings.log_level, Level::Info);
    }

    #[test]
    fn api_base_override_drops_trailing_slash() {
        let settings =
            AppSettings::with_overrides(Some("https://finsight.example.com/api/".into()), None);
        assert_eq!(
            settings.api_url("/goals"),
            "https://finsight.example.com/api/goals"
        );
    }

    #[test]
    fn blank_override_keeps_default() {
        let settings = AppSettings::with_overrides(Some("   ".into()), None);
        assert_eq!(settings.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let settings = AppSettings::with_overrides(None, Some("DEBUG".into()));
        assert_eq!(settings.log_level, Level::Debug);

        let settings = AppSettings::with_overrides(None, Some("verbose".into()));
        assert_eq!(settings.log_level, Level::Info);
    }
}
