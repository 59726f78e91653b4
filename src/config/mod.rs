pub mod actions;
pub mod key;
pub mod keybindings;
pub mod loader;
pub mod resolver;

pub use actions::{
    DialogAction, GlobalAction, JobsAction, NavAction, RequestsAction, SearchAction,
};
use keybindings::KeybindingsConfig;
pub use loader::load;
pub use resolver::KeyResolver;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Catppuccin Mocha".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshConfig {
    /// Poll interval for the dashboards, in seconds.
    pub interval_secs: u64,
    /// Initial auto-refresh state for the provider dashboard.
    pub auto_refresh: bool,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_secs: crate::refresh::POLL_INTERVAL.as_secs(),
            auto_refresh: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.refresh.interval_secs, 30);
        assert!(config.refresh.auto_refresh);
    }

    #[test]
    fn test_partial_config_overrides() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            base_url = "http://fixitnow.internal:8080"

            [refresh]
            interval_secs = 10
            auto_refresh = false
            "#,
        )
        .unwrap();
        assert_eq!(config.server.base_url, "http://fixitnow.internal:8080");
        assert_eq!(config.refresh.interval_secs, 10);
        assert!(!config.refresh.auto_refresh);
        // Untouched sections still default
        assert_eq!(config.theme.name, "Catppuccin Mocha");
    }

    #[test]
    fn test_keybinding_override() {
        let config: AppConfig = toml::from_str(
            r#"
            [keybindings.jobs]
            accept = "a"
            skip = "s"
            start = "S"
            complete = "c"
            view = "v"
            refresh = "F5"
            toggle_auto_refresh = "p"
            "#,
        )
        .unwrap();
        assert_eq!(config.keybindings.jobs.refresh.display(), "F5");
    }
}
