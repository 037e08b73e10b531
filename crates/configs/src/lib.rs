use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: None }
    }
}

fn default_host() -> String { "0.0.0.0".into() }
fn default_port() -> u16 { 8000 }

/// Document store settings. An empty `url` means no store is configured.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            name: None,
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 1 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }

/// Which document store backend a database URL selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// No URL configured; the service runs without a store.
    Disabled,
    /// `postgres://` or `postgresql://`
    Postgres(String),
    /// `file://<dir>`: one JSON file per store name inside `dir`.
    JsonFile(PathBuf),
}

/// Default logical store name when `database.name` is not given.
pub const DEFAULT_STORE_NAME: &str = "sponsorisily";

/// Path of the config file: `CONFIG_PATH` or `config.toml`.
pub fn config_path() -> PathBuf {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string()).into()
}

pub fn load_from_file(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` when present (defaults otherwise), apply environment
    /// overrides and validate.
    pub fn load() -> Result<Self> {
        let path = config_path();
        let mut cfg = if path.exists() { load_from_file(&path)? } else { AppConfig::default() };
        cfg.apply_env(|k| std::env::var(k).ok());
        cfg.validate()?;
        Ok(cfg)
    }

    /// Overlay environment variables. The lookup is injected so tests do not
    /// have to mutate the process environment.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |k: &str| lookup(k).filter(|v| !v.trim().is_empty());

        if let Some(host) = non_empty("HOST") {
            self.server.host = host;
        }
        if let Some(port) = non_empty("PORT").and_then(|p| p.trim().parse::<u16>().ok()) {
            self.server.port = port;
        }
        if let Some(w) = non_empty("TOKIO_WORKER_THREADS").and_then(|v| v.trim().parse::<usize>().ok()) {
            self.server.worker_threads = Some(w);
        }
        if let Some(url) = non_empty("DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(name) = non_empty("DATABASE_NAME") {
            self.database.name = Some(name);
        }
    }

    pub fn validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        if self.worker_threads == Some(0) {
            self.worker_threads = None;
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    /// Pool bounds only; an unusable `url` is left to store startup, which
    /// runs without a store rather than refusing to serve.
    pub fn validate(&self) -> Result<()> {
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }

    /// Resolve the URL scheme into a backend.
    pub fn backend(&self) -> Result<StoreBackend> {
        let url = self.url.trim();
        if url.is_empty() {
            return Ok(StoreBackend::Disabled);
        }
        let lower = url.to_lowercase();
        if lower.starts_with("postgresql://") || lower.starts_with("postgres://") {
            return Ok(StoreBackend::Postgres(url.to_string()));
        }
        if let Some(dir) = url.strip_prefix("file://") {
            if dir.is_empty() {
                return Err(anyhow!("database.url file:// needs a directory"));
            }
            return Ok(StoreBackend::JsonFile(PathBuf::from(dir)));
        }
        Err(anyhow!("database.url must start with postgres://, postgresql:// or file://"))
    }

    /// Logical store name: the configured name, else the last path segment of
    /// a Postgres URL, else [`DEFAULT_STORE_NAME`].
    pub fn store_name(&self) -> String {
        if let Some(name) = self.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            return name.to_string();
        }
        let lower = self.url.to_lowercase();
        if lower.starts_with("postgres") {
            let without_query = self.url.split('?').next().unwrap_or_default();
            if let Some((authority, db)) = without_query.rsplit_once('/') {
                if !db.is_empty() && !authority.ends_with('/') {
                    return db.to_string();
                }
            }
        }
        DEFAULT_STORE_NAME.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_bind_all_interfaces_on_8000() {
        let mut cfg = AppConfig::default();
        cfg.apply_env(env(&[]));
        cfg.validate().unwrap();
        assert_eq!(cfg.server.bind_addr(), "0.0.0.0:8000");
        assert_eq!(cfg.database.backend().unwrap(), StoreBackend::Disabled);
    }

    #[test]
    fn env_overrides_port_and_database() {
        let mut cfg = AppConfig::default();
        cfg.apply_env(env(&[
            ("PORT", "9100"),
            ("DATABASE_URL", "postgres://u:p@localhost:5432/leads"),
            ("DATABASE_NAME", ""),
        ]));
        cfg.validate().unwrap();
        assert_eq!(cfg.server.port, 9100);
        assert!(matches!(cfg.database.backend().unwrap(), StoreBackend::Postgres(_)));
        assert_eq!(cfg.database.store_name(), "leads");
    }

    #[test]
    fn unparsable_port_keeps_default() {
        let mut cfg = AppConfig::default();
        cfg.apply_env(env(&[("PORT", "eighty")]));
        assert_eq!(cfg.server.port, 8000);
    }

    #[test]
    fn file_url_selects_json_backend_and_name_wins() {
        let mut cfg = AppConfig::default();
        cfg.apply_env(env(&[("DATABASE_URL", "file://data"), ("DATABASE_NAME", "marketing")]));
        cfg.validate().unwrap();
        assert_eq!(cfg.database.backend().unwrap(), StoreBackend::JsonFile(PathBuf::from("data")));
        assert_eq!(cfg.database.store_name(), "marketing");
    }

    #[test]
    fn unknown_scheme_loads_but_has_no_backend() {
        let mut cfg = AppConfig::default();
        cfg.apply_env(env(&[("DATABASE_URL", "mongodb://localhost:27017")]));
        cfg.validate().unwrap();
        assert!(cfg.database.backend().is_err());
    }

    #[test]
    fn toml_sections_parse_with_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            port = 8081

            [database]
            url = "file://var/db"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8081);
        assert_eq!(cfg.database.max_connections, 10);
        assert_eq!(cfg.database.store_name(), DEFAULT_STORE_NAME);
    }
}
