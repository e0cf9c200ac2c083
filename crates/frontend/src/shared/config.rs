use serde::Deserialize;

use crate::shared::error::ClientError;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub list: ListConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Full origin of the backend; derived from the window location when unset
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Backend port used when the origin is derived from the window
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Quiet period before a search edit triggers a page-1 reload
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_prefix() -> String {
    "/api".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_page_size() -> u32 {
    20
}

fn default_search_debounce_ms() -> u32 {
    500
}

fn default_level() -> String {
    "debug".to_string()
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
prefix = "/api"
port = 3000

[list]
page_size = 20
search_debounce_ms = 500

[logging]
level = "debug"
"#;

impl ClientConfig {
    /// Parse a TOML document; missing keys take their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, ClientError> {
        let config: ClientConfig =
            toml::from_str(contents).map_err(|e| ClientError::Config(e.to_string()))?;
        if config.list.page_size == 0 {
            return Err(ClientError::Config("list.page_size must be positive".into()));
        }
        Ok(config)
    }

    /// Log level for the console logger; unknown names fall back to `Info`
    pub fn log_level(&self) -> log::Level {
        self.logging
            .level
            .parse::<log::Level>()
            .unwrap_or(log::Level::Info)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        // the embedded document is covered by tests
        toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|_| ClientConfig {
            api: ApiConfig {
                base_url: None,
                prefix: default_prefix(),
                port: default_port(),
            },
            list: ListConfig {
                page_size: default_page_size(),
                search_debounce_ms: default_search_debounce_ms(),
            },
            logging: LoggingConfig {
                level: default_level(),
            },
        })
    }
}

/// Load the configuration: bundled override when present, otherwise the
/// embedded default.
pub fn load_config(override_toml: Option<&str>) -> Result<ClientConfig, ClientError> {
    match override_toml {
        Some(contents) => {
            log::info!("Loading client config from bundled override");
            ClientConfig::from_toml_str(contents)
        }
        None => {
            log::info!("Using default embedded configuration");
            ClientConfig::from_toml_str(DEFAULT_CONFIG)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None).unwrap();
        assert_eq!(config.api.base_url, None);
        assert_eq!(config.api.prefix, "/api");
        assert_eq!(config.list.page_size, 20);
        assert_eq!(config.list.search_debounce_ms, 500);
        assert_eq!(config.log_level(), log::Level::Debug);
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_override_fills_missing_keys() {
        let config = load_config(Some(
            r#"
            [api]
            base_url = "https://bins.example.org"

            [list]
            page_size = 50

            [logging]
            level = "warn"
            "#,
        ))
        .unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("https://bins.example.org"));
        assert_eq!(config.api.prefix, "/api");
        assert_eq!(config.list.page_size, 50);
        assert_eq!(config.list.search_debounce_ms, 500);
        assert_eq!(config.log_level(), log::Level::Warn);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(matches!(
            ClientConfig::from_toml_str("[list]\npage_size = 0\n[api]\n[logging]\n"),
            Err(ClientError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::from_toml_str("not toml ["),
            Err(ClientError::Config(_))
        ));
    }
}
