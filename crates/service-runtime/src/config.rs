//! # Runtime Configuration
//!
//! Environment-driven settings for the composition root.

use modulith_store::StoreConfig;
use tracing::warn;

/// Configuration for the service runtime.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// HTTP listen port.
    pub port: u16,
    /// Store adapter connection settings.
    pub store: StoreConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            store: StoreConfig::new("mem://localhost", "appdb").with_retry_writes(true),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// Recognized variables:
    ///
    /// - `MODULITH_PORT` - HTTP listen port
    /// - `MODULITH_STORE_URI` - store endpoint URI
    /// - `MODULITH_STORE_DB` - database name
    /// - `MODULITH_STORE_RETRY_WRITES` - retry-on-write flag (`true`/`1`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(port) = std::env::var("MODULITH_PORT") {
            match port.parse() {
                Ok(p) => config.port = p,
                Err(_) => warn!("MODULITH_PORT must be a port number, ignoring {:?}", port),
            }
        }
        if let Ok(uri) = std::env::var("MODULITH_STORE_URI") {
            config.store.uri = uri;
        }
        if let Ok(database) = std::env::var("MODULITH_STORE_DB") {
            config.store.database = database;
        }
        if let Ok(flag) = std::env::var("MODULITH_STORE_RETRY_WRITES") {
            config.store.retry_writes = parse_flag(&flag);
        }

        config
    }
}

/// Parse a boolean environment flag: `true`/`1` (any case) is true.
fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1")
}
