//! Configuration loading and CLI definitions.

use std::{fs, path::Path};

use clap::Parser;
use serde::{Deserialize, Serialize};
use subtrack_core::defaults;
use subtrack_core::{Plan, PlanCatalog, Validity};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    /// SQL persistence. Omitted = in-memory storage.
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
    #[serde(default)]
    pub users: UsersConfig,
    /// Plan catalog entries. Empty = built-in default catalog.
    #[serde(default)]
    pub plans: Vec<PlanEntry>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen address, e.g. `0.0.0.0:3000`.
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL (postgres://, mysql://, sqlite:).
    pub url: String,
    #[serde(default = "default_db_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_db_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_db_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

/// Registered user names, used to seed the in-memory directory.
///
/// Ignored in SQL mode, where identity is administered in the database.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UsersConfig {
    #[serde(default)]
    pub names: Vec<String>,
}

/// One plan catalog entry.
///
/// `validity_days` omitted means the plan never expires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanEntry {
    pub id: String,
    #[serde(default)]
    pub validity_days: Option<u32>,
    pub cost: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Base log level (trace, debug, info, warn, error).
    pub level: Option<String>,
    /// Output format (json, pretty, compact). Default: pretty
    pub format: Option<String>,
    /// Output target (stdout, stderr). Default: stderr
    pub output: Option<String>,
    /// Per-module log level overrides.
    #[serde(default)]
    pub filters: std::collections::HashMap<String, String>,
}

#[derive(Debug, Clone, Parser, Default)]
pub struct CliOverrides {
    /// Override HTTP listen address, e.g. 0.0.0.0:3000
    #[arg(long)]
    pub listen: Option<String>,
    /// Override database URL (postgres://, mysql://, sqlite:)
    #[arg(long)]
    pub database_url: Option<String>,
    /// Override log level (trace/debug/info/warn/error)
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unsupported config format")]
    UnsupportedFormat,
    #[error("validation: {0}")]
    Validation(String),
}

pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)?;
    match path.extension().and_then(|s| s.to_str()).unwrap_or("") {
        "json" => Ok(serde_json::from_str(&data)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(&data)?),
        "toml" => Ok(toml::from_str(&data)?),
        _ => Err(ConfigError::UnsupportedFormat),
    }
}

pub fn apply_overrides(config: &mut Config, overrides: &CliOverrides) {
    if let Some(v) = &overrides.listen {
        config.server.listen = v.clone();
    }
    if let Some(v) = &overrides.database_url {
        match config.database {
            Some(ref mut db) => db.url = v.clone(),
            None => {
                config.database = Some(DatabaseConfig {
                    url: v.clone(),
                    max_connections: default_db_max_connections(),
                    min_connections: default_db_min_connections(),
                    connect_timeout_secs: default_db_connect_timeout_secs(),
                });
            }
        }
    }
    if let Some(v) = &overrides.log_level {
        config.logging.level = Some(v.clone());
    }
}

pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.listen.trim().is_empty() {
        return Err(ConfigError::Validation("server.listen is empty".into()));
    }
    if let Some(ref db) = config.database {
        if db.url.trim().is_empty() {
            return Err(ConfigError::Validation("database.url is empty".into()));
        }
        if db.max_connections == 0 {
            return Err(ConfigError::Validation(
                "database.max_connections must be > 0".into(),
            ));
        }
        if db.min_connections > db.max_connections {
            return Err(ConfigError::Validation(
                "database.min_connections cannot exceed max_connections".into(),
            ));
        }
    }
    let mut seen = std::collections::HashSet::new();
    for plan in &config.plans {
        if plan.id.trim().is_empty() {
            return Err(ConfigError::Validation("plans: id is empty".into()));
        }
        if !seen.insert(plan.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "plans: duplicate id '{}'",
                plan.id
            )));
        }
        if plan.cost < 0 {
            return Err(ConfigError::Validation(format!(
                "plans: cost for '{}' must be non-negative",
                plan.id
            )));
        }
        if plan.validity_days == Some(0) {
            return Err(ConfigError::Validation(format!(
                "plans: validity_days for '{}' must be > 0",
                plan.id
            )));
        }
    }
    Ok(())
}

impl Config {
    /// Build the plan catalog from the configured entries, falling back
    /// to the built-in defaults when none are listed.
    pub fn plan_catalog(&self) -> PlanCatalog {
        if self.plans.is_empty() {
            return PlanCatalog::new(defaults::default_plans(), defaults::FREE_PLAN_ID);
        }
        let plans = self.plans.iter().map(|entry| {
            let validity = match entry.validity_days {
                Some(days) => Validity::Finite(days),
                None => Validity::Unbounded,
            };
            Plan::new(entry.id.clone(), validity, entry.cost)
        });
        PlanCatalog::new(plans, defaults::FREE_PLAN_ID)
    }
}

// ============================================================================
// Default Value Functions (for serde)
// ============================================================================

fn default_listen() -> String {
    defaults::DEFAULT_LISTEN.to_string()
}

fn default_db_max_connections() -> u32 {
    defaults::DEFAULT_DB_MAX_CONNECTIONS
}

fn default_db_min_connections() -> u32 {
    defaults::DEFAULT_DB_MIN_CONNECTIONS
}

fn default_db_connect_timeout_secs() -> u64 {
    defaults::DEFAULT_DB_CONNECT_TIMEOUT_SECS
}
