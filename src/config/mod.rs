//! Runtime configuration.
//!
//! Defaults are compiled in. A deployment may override them by defining a
//! `window.ENV` object before the wasm bundle loads, e.g.
//!
//! ```js
//! window.ENV = { ASSET_BASE: "https://cdn.example.com/gamehost", CATALOG_SIZE: "12" };
//! ```

/// Where `logo.jpg` and `placeholder.webp` are served from.
pub const DEFAULT_ASSET_BASE: &str = "/assets";

/// Number of placeholder cards on the home grid.
pub const DEFAULT_CATALOG_SIZE: u32 = 6;

/// Icon shown on the third-party sign-in button.
pub const GOOGLE_ICON_URL: &str = "https://www.svgrepo.com/show/475656/google-color.svg";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub asset_base: String,
    pub catalog_size: u32,
    pub log_level: log::Level,
}

impl AppConfig {
    pub fn new() -> Self {
        let env = web_sys::window()
            .and_then(|w| w.get("ENV"))
            .filter(|env| !env.is_undefined() && env.is_object());

        let read = |key: &str| -> Option<String> {
            let env = env.as_ref()?;
            js_sys::Reflect::get(env, &key.into()).ok()?.as_string()
        };

        Self::from_overrides(read("ASSET_BASE"), read("CATALOG_SIZE"), read("LOG_LEVEL"))
    }

    /// Apply raw override strings on top of the defaults. Unparseable values
    /// are ignored.
    pub fn from_overrides(
        asset_base: Option<String>,
        catalog_size: Option<String>,
        log_level: Option<String>,
    ) -> Self {
        let asset_base = asset_base
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_ASSET_BASE.to_string());

        let catalog_size = catalog_size
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_CATALOG_SIZE);

        let log_level = log_level
            .and_then(|s| s.trim().parse::<log::Level>().ok())
            .unwrap_or_else(default_log_level);

        Self {
            asset_base,
            catalog_size,
            log_level,
        }
    }

    pub fn logo_ref(&self) -> String {
        format!("{}/logo.jpg", self.asset_base)
    }

    pub fn placeholder_ref(&self) -> String {
        format!("{}/placeholder.webp", self.asset_base)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_overrides(None, None, None)
    }
}

fn default_log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.asset_base, DEFAULT_ASSET_BASE);
        assert_eq!(config.catalog_size, DEFAULT_CATALOG_SIZE);
        assert_eq!(config.logo_ref(), "/assets/logo.jpg");
        assert_eq!(config.placeholder_ref(), "/assets/placeholder.webp");
    }

    #[test]
    fn test_overrides_trim_trailing_slash() {
        let config = AppConfig::from_overrides(
            Some("https://cdn.example.com/gh/".to_string()),
            Some("12".to_string()),
            Some("warn".to_string()),
        );
        assert_eq!(config.logo_ref(), "https://cdn.example.com/gh/logo.jpg");
        assert_eq!(config.catalog_size, 12);
        assert_eq!(config.log_level, log::Level::Warn);
    }

    #[test]
    fn test_bad_overrides_fall_back_to_defaults() {
        let config = AppConfig::from_overrides(
            Some("   ".to_string()),
            Some("six".to_string()),
            Some("loud".to_string()),
        );
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_catalog_size_out_of_range_falls_back() {
        for raw in ["-1", "4294967296", "1e3"] {
            let config = AppConfig::from_overrides(None, Some(raw.to_string()), None);
            assert_eq!(config.catalog_size, DEFAULT_CATALOG_SIZE, "{raw}");
        }
    }
}
