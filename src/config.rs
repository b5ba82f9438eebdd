use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::{env, time::Duration};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Host of the contact API the page submits to. No default: an unset
    /// value is a startup error.
    #[serde(default)]
    pub base_url: String,
    pub timeout_secs: u64,
    pub cors_origins: Vec<String>,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Contact details and branding shown on the page.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_site_tagline")]
    pub tagline: String,
    #[serde(default = "default_site_email")]
    pub email: String,
    #[serde(default = "default_site_phone")]
    pub phone: String,
    #[serde(default = "default_site_address")]
    pub address: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            tagline: default_site_tagline(),
            email: default_site_email(),
            phone: default_site_phone(),
            address: default_site_address(),
        }
    }
}

fn default_site_name() -> String {
    "JEXLA Group".to_string()
}

fn default_site_tagline() -> String {
    "Excellence & Automation".to_string()
}

fn default_site_email() -> String {
    "contact@jexlagroup.com".to_string()
}

fn default_site_phone() -> String {
    "+91 98765 43210".to_string()
}

fn default_site_address() -> String {
    "Mumbai, Maharashtra, India".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy variables (BACKEND_URL, DATABASE_URL, CORS_ORIGINS)
    /// 2. Environment variables (JEXLA__API__BASE_URL, etc.)
    /// 3. Config file specified by path, CONFIG_PATH or config/default.toml
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("database.url", "sqlite:jexla.db")?
            .set_default("database.max_connections", 5)?
            .set_default("api.timeout_secs", 10)?
            .set_default("api.cors_origins", vec!["*"])?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("JEXLA")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("api.cors_origins")
                .try_parsing(true),
        );

        if let Ok(base_url) = env::var("BACKEND_URL") {
            builder = builder.set_override("api.base_url", base_url)?;
        }
        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }
        if let Ok(origins) = env::var("CORS_ORIGINS") {
            builder = builder.set_override("api.cors_origins", split_origins(&origins))?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api.base_url.trim().is_empty() {
            return Err(
                "API base URL is not set (api.base_url, JEXLA__API__BASE_URL or BACKEND_URL)"
                    .to_string(),
            );
        }
        jexla_contact::contact_endpoint(&self.api.base_url)
            .map_err(|e| format!("API base URL `{}` is invalid: {e}", self.api.base_url))?;
        if self.api.timeout_secs == 0 {
            return Err("API timeout must be at least 1 second".to_string());
        }
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        Ok(())
    }
}

fn split_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_owned)
        .collect()
}
