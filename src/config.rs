// Ledger configuration

use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors from configuration validation
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid log filter {filter:?}: {reason}")]
    InvalidLogFilter { filter: String, reason: String },
}

/// What `createAsset` does when the id is already taken
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CreatePolicy {
    /// Last write wins; the old record stays reachable through history
    #[default]
    Overwrite,
    /// Refuse the create with `AlreadyExists`
    RejectExisting,
}

/// Configuration for a ledger instance
#[derive(Clone, Debug)]
pub struct LedgerConfig {
    /// Directory of the sled database
    pub data_dir: PathBuf,
    /// Create-vs-overwrite semantics of `createAsset`
    pub create_policy: CreatePolicy,
    /// Flush the database after every committed write
    pub flush_every_write: bool,
    /// Default tracing filter when RUST_LOG is unset
    pub log_filter: String,
}

impl LedgerConfig {
    /// Create a new config with builder pattern
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the database directory
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set the create policy
    pub fn with_create_policy(mut self, policy: CreatePolicy) -> Self {
        self.create_policy = policy;
        self
    }

    /// Enable or disable flushing after every write
    pub fn with_flush_every_write(mut self, enabled: bool) -> Self {
        self.flush_every_write = enabled;
        self
    }

    /// Set the default log filter
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "data_dir must not be empty".to_string(),
            ));
        }
        EnvFilter::try_new(&self.log_filter).map_err(|e| ConfigError::InvalidLogFilter {
            filter: self.log_filter.clone(),
            reason: e.to_string(),
        })?;
        Ok(())
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("drugchain-data"),
            create_policy: CreatePolicy::Overwrite,
            flush_every_write: false,
            log_filter: "info".to_string(),
        }
    }
}
