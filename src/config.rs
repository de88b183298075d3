//! Configuration for the taskboard server.
//!
//! Supports layered configuration with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (`~/.config/taskboard/config.toml`)
//! 4. Compiled defaults

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// A setting holds a value the server cannot run with.
    #[error("invalid setting `{field}`: {reason}")]
    InvalidValue {
        /// Name of the offending setting.
        field: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

// ---------------------------------------------------------------------------
// TOML file structs (all fields Option for partial overrides)
// ---------------------------------------------------------------------------

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigFile {
    server: ServerFileConfig,
    database: DatabaseFileConfig,
}

/// `[server]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ServerFileConfig {
    bind_addr: Option<String>,
}

/// `[database]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct DatabaseFileConfig {
    url: Option<String>,
    pool_size: Option<u32>,
    connect_timeout_ms: Option<u64>,
    statement_timeout_ms: Option<u64>,
}

// ---------------------------------------------------------------------------
// CLI arguments
// ---------------------------------------------------------------------------

/// CLI arguments for the taskboard server.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "Task-tracking web application")]
pub struct CliArgs {
    /// Address to bind the HTTP server to.
    #[arg(short, long, env = "TASKBOARD_ADDR")]
    pub bind: Option<String>,

    /// Path to config file (default: `~/.config/taskboard/config.toml`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// `PostgreSQL` connection URL.
    #[arg(long, env = "TASKBOARD_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum number of pooled database connections.
    #[arg(long)]
    pub pool_size: Option<u32>,

    /// Time allowed for establishing a database connection, in milliseconds.
    #[arg(long)]
    pub connect_timeout_ms: Option<u64>,

    /// Time allowed for a single storage call, in milliseconds.
    #[arg(long)]
    pub statement_timeout_ms: Option<u64>,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", env = "TASKBOARD_LOG")]
    pub log_level: String,
}

// ---------------------------------------------------------------------------
// Resolved configuration
// ---------------------------------------------------------------------------

/// Database settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection URL.
    pub url: String,
    /// Maximum number of pooled connections.
    pub pool_size: u32,
    /// Time allowed for establishing a connection.
    pub connect_timeout: Duration,
    /// Time allowed for a single storage call.
    pub statement_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://postgres@localhost:5432/app_task".to_owned(),
            pool_size: 10,
            connect_timeout: Duration::from_secs(5),
            statement_timeout: Duration::from_secs(5),
        }
    }
}

/// Fully resolved server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address to bind the HTTP server to (e.g., `0.0.0.0:9000`).
    pub bind_addr: String,
    /// Database settings.
    pub database: DatabaseConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:9000".to_owned(),
            database: DatabaseConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration by merging CLI args, env vars, and a TOML file.
    ///
    /// If `--config` is given and the file does not exist, returns an error.
    /// If no `--config` is given, the default path is tried and a missing
    /// file is treated as empty config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config file cannot be read or parsed,
    /// or if a resolved setting is out of range.
    pub fn load(cli: &CliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        Self::resolve(cli, &file)
    }

    /// Priority: CLI > file > default.
    fn resolve(cli: &CliArgs, file: &ConfigFile) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let db_defaults = defaults.database;

        let database = DatabaseConfig {
            url: cli
                .database_url
                .clone()
                .or_else(|| file.database.url.clone())
                .unwrap_or(db_defaults.url),
            pool_size: cli
                .pool_size
                .or(file.database.pool_size)
                .unwrap_or(db_defaults.pool_size),
            connect_timeout: cli
                .connect_timeout_ms
                .or(file.database.connect_timeout_ms)
                .map_or(db_defaults.connect_timeout, Duration::from_millis),
            statement_timeout: cli
                .statement_timeout_ms
                .or(file.database.statement_timeout_ms)
                .map_or(db_defaults.statement_timeout, Duration::from_millis),
        };

        database.validate()?;

        Ok(Self {
            bind_addr: cli
                .bind
                .clone()
                .or_else(|| file.server.bind_addr.clone())
                .unwrap_or(defaults.bind_addr),
            database,
        })
    }
}

impl DatabaseConfig {
    /// Rejects settings the connection pool would panic on or that would
    /// cancel every statement.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pool_size",
                reason: "must be at least 1",
            });
        }
        if self.connect_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "connect_timeout_ms",
                reason: "must be greater than zero",
            });
        }
        if self.statement_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "statement_timeout_ms",
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn load_config_file(explicit_path: Option<&Path>) -> Result<ConfigFile, ConfigError> {
    if let Some(path) = explicit_path {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        return Ok(toml::from_str(&contents)?);
    }

    let Some(config_dir) = dirs::config_dir() else {
        return Ok(ConfigFile::default());
    };
    let default_path = config_dir.join("taskboard").join("config.toml");

    match std::fs::read_to_string(&default_path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(source) => Err(ConfigError::ReadFile {
            path: default_path,
            source,
        }),
    }
}
