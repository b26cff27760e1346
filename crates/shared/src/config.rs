//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Repository retry configuration.
    #[serde(default)]
    pub retry: RetryConfig,
    /// In-memory account store configuration.
    #[serde(default)]
    pub accounts: AccountsConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Retry configuration for repository lookups.
#[derive(Debug, Clone, Deserialize)]
pub struct RetryConfig {
    /// Total attempts per lookup, including the first one.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Pause between attempts in milliseconds.
    #[serde(default)]
    pub backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            backoff_ms: 0,
        }
    }
}

fn default_max_attempts() -> u32 {
    3
}

/// Which kind of failure the failure-injection decorator raises.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    /// A failure worth retrying, e.g. a query timeout.
    #[default]
    Transient,
    /// A failure that will not go away on retry, e.g. a constraint violation.
    Persistent,
}

/// In-memory account store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountsConfig {
    /// Accounts preloaded at startup.
    #[serde(default = "default_seed")]
    pub seed: Vec<SeedAccount>,
    /// Probability (0.0 to 1.0) that a lookup fails.
    #[serde(default)]
    pub failure_rate: f64,
    /// Kind of the injected failure.
    #[serde(default)]
    pub failure_kind: FailureKind,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            failure_rate: 0.0,
            failure_kind: FailureKind::default(),
        }
    }
}

/// A preloaded account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedAccount {
    /// Account number, `D-DDD-DDD-DDD`.
    pub number: String,
    /// Opening balance.
    #[serde(default)]
    pub balance: rust_decimal::Decimal,
}

fn default_seed() -> Vec<SeedAccount> {
    ["1-234-567-890", "9-876-543-210", "1-236-547-890", "9-874-563-210"]
        .into_iter()
        .map(|number| SeedAccount {
            number: number.to_string(),
            balance: rust_decimal::Decimal::ZERO,
        })
        .collect()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SAVINGS").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
