//! Configuration types for loggate.
//!
//! [`Config::load`] layers the compiled-in defaults, an optional TOML file,
//! and `LOGGATE_*` environment variables (`__` separates sections, e.g.
//! `LOGGATE_STORE__HOST`). [`Config::defaults`] returns the defaults without
//! touching the filesystem or environment (useful in tests).
//!
//! The resulting [`Config`] is built once at startup and handed to the store
//! and server by reference; nothing reads the environment while serving.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 8080

[store]
enabled          = true
host             = "localhost"
port             = 3306
user             = "root"
password         = ""
database         = "loggate"
probe_timeout_ms = 2000
"#;

/// Looked up in the working directory when no `--config` is given.
pub const LOCAL_CONFIG_FILE: &str = "loggate.toml";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
}

fn default_server_host() -> String { "0.0.0.0".to_string() }
fn default_server_port() -> u16 { 8080 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `[store]` section — connection parameters of the primary MySQL store.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// `false` forces every request onto the fixture set.
    #[serde(default = "default_store_enabled")]
    pub enabled: bool,
    #[serde(default = "default_store_host")]
    pub host: String,
    #[serde(default = "default_store_port")]
    pub port: u16,
    #[serde(default = "default_store_user")]
    pub user: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_store_database")]
    pub database: String,
    /// Upper bound on connect + ping.
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
}

fn default_store_enabled() -> bool { true }
fn default_store_host() -> String { "localhost".to_string() }
fn default_store_port() -> u16 { 3306 }
fn default_store_user() -> String { "root".to_string() }
fn default_store_database() -> String { "loggate".to_string() }
fn default_probe_timeout_ms() -> u64 { 2000 }

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            enabled: default_store_enabled(),
            host: default_store_host(),
            port: default_store_port(),
            user: default_store_user(),
            password: String::new(),
            database: default_store_database(),
            probe_timeout_ms: default_probe_timeout_ms(),
        }
    }
}

impl StoreConfig {
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load defaults, then `path` (required) or `./loggate.toml` (optional),
    /// then `LOGGATE_*` environment variables.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_with_env(path, environment())
    }

    pub(crate) fn load_with_env(
        path: Option<&Path>,
        env: config::Environment,
    ) -> anyhow::Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(LOCAL_CONFIG_FILE).required(false),
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("LOGGATE")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
