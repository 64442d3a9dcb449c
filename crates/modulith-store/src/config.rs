//! # Store Configuration
//!
//! Connection settings and connection-URI assembly.

use crate::errors::StoreError;
use std::time::Duration;

/// Default bound on the connection handshake and liveness check.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default bound on resource release during disconnect.
pub const DEFAULT_DISCONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for a store adapter.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base endpoint URI, without the database path segment.
    pub uri: String,
    /// Database (namespace) name, appended to the URI as a path segment.
    pub database: String,
    /// Whether to request retry-on-write semantics, appended to the URI as
    /// a query option.
    pub retry_writes: bool,
    /// Bound on the connection handshake and liveness check.
    pub connect_timeout: Duration,
    /// Bound on resource release during disconnect.
    pub disconnect_timeout: Duration,
}

impl StoreConfig {
    /// Create a configuration with default timeouts and no retry writes.
    pub fn new(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
            retry_writes: false,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            disconnect_timeout: DEFAULT_DISCONNECT_TIMEOUT,
        }
    }

    /// Enable retry-on-write semantics.
    pub fn with_retry_writes(mut self, retry_writes: bool) -> Self {
        self.retry_writes = retry_writes;
        self
    }

    /// Override the connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Validate the configuration before any driver call.
    ///
    /// ## Errors
    ///
    /// - `Config`: the URI or database name is empty.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.uri.is_empty() {
            return Err(StoreError::Config("uri is required".to_string()));
        }
        if self.database.is_empty() {
            return Err(StoreError::Config("database name is required".to_string()));
        }
        Ok(())
    }

    /// Assemble the full connection URI: `<uri>/<database>`, with
    /// `?retryWrites=true` appended when retry writes are enabled.
    pub fn connection_uri(&self) -> String {
        let mut uri = format!("{}/{}", self.uri, self.database);
        if self.retry_writes {
            uri.push_str("?retryWrites=true");
        }
        uri
    }
}
