//! Client configuration
//!
//! Resolution order (later wins):
//! 1. `config.toml` embedded into the bundle
//! 2. `QUERY_SERVICE_URL` set at build time
//! 3. Page query string: `?service=http://host:port&log=info`

use serde::Deserialize;

/// Default configuration embedded in the bundle
const EMBEDDED_CONFIG: &str = include_str!("../../config.toml");

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct ClientConfig {
    #[serde(default)]
    pub service: ServiceSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServiceSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_query_path")]
    pub query_path: String,
}

impl Default for ServiceSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            query_path: default_query_path(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingSection {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_query_path() -> String {
    contracts::usecases::u501_query_console::QUERY_PATH.to_string()
}

fn default_level() -> String {
    "debug".to_string()
}

/// Overrides accepted from the page URL
#[derive(Debug, Default, Deserialize)]
struct PageParams {
    service: Option<String>,
    log: Option<String>,
}

impl ClientConfig {
    /// Full URL of the query endpoint
    pub fn query_url(&self) -> String {
        let base = self.service.base_url.trim_end_matches('/');
        let path = self.service.query_path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Configured level; unknown names fall back to `debug`
    pub fn level_filter(&self) -> log::LevelFilter {
        self.logging
            .level
            .parse()
            .unwrap_or(log::LevelFilter::Debug)
    }
}

/// Load configuration for the running page
pub fn load_config() -> ClientConfig {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    resolve_config(EMBEDDED_CONFIG, option_env!("QUERY_SERVICE_URL"), &search)
}

/// Apply the resolution order to explicit inputs
pub fn resolve_config(toml_text: &str, build_url: Option<&str>, search: &str) -> ClientConfig {
    let mut config = match toml::from_str::<ClientConfig>(toml_text) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Invalid embedded config, using defaults: {}", e);
            ClientConfig::default()
        }
    };

    if let Some(url) = build_url.filter(|u| !u.trim().is_empty()) {
        config.service.base_url = url.trim().to_string();
    }

    let query = search.trim_start_matches('?');
    if !query.is_empty() {
        match serde_qs::from_str::<PageParams>(query) {
            Ok(params) => {
                if let Some(service) = params.service.filter(|s| !s.trim().is_empty()) {
                    config.service.base_url = service.trim().to_string();
                }
                if let Some(level) = params.log {
                    match level.parse::<log::LevelFilter>() {
                        Ok(_) => config.logging.level = level,
                        Err(_) => log::warn!(
                            "Unknown log level '{}', keeping '{}'",
                            level,
                            config.logging.level
                        ),
                    }
                }
            }
            Err(e) => log::warn!("Ignoring page parameters '{}': {}", query, e),
        }
    }

    config
}
