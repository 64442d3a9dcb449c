//! # Error Types
//!
//! Store adapter and driver errors.

use crate::lifecycle::LifecycleState;
use thiserror::Error;

/// Errors raised by the store adapter.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Configuration rejected before any driver call was made.
    #[error("invalid store configuration: {0}")]
    Config(String),

    /// The connection handshake failed or timed out.
    ///
    /// Fatal to process startup: downstream modules assume a connected
    /// adapter exists before they run.
    #[error("connection to {uri} failed: {reason}")]
    ConnectFailure { uri: String, reason: String },

    /// The post-connect liveness check failed.
    ///
    /// Fatal to process startup, same as `ConnectFailure`.
    #[error("liveness check for database {database} failed: {reason}")]
    LivenessFailure { database: String, reason: String },

    /// An operation was attempted from a lifecycle state that does not
    /// permit it (for example `disconnect()` on an already-disconnected
    /// adapter).
    #[error("invalid lifecycle transition from {from:?}")]
    InvalidLifecycleTransition { from: LifecycleState },

    /// The underlying driver reported a failure.
    #[error("driver error: {0}")]
    Driver(#[from] DriverError),
}

/// Errors reported by a concrete store driver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    /// The endpoint could not be reached.
    #[error("endpoint unavailable: {0}")]
    Unavailable(String),

    /// The endpoint was reached but the operation failed.
    #[error("operation failed: {0}")]
    Operation(String),
}
