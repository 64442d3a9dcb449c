//! # Error Types
//!
//! Exposure-side errors. Composition errors (duplicate identities,
//! capability mismatches) come from `modulith-core` and convert directly.

use modulith_core::ComposeError;
use std::net::SocketAddr;
use thiserror::Error;

/// Errors raised by the HTTP exposure.
#[derive(Debug, Error)]
pub enum ExposureError {
    /// Registration or activation failed at the composition layer.
    #[error(transparent)]
    Compose(#[from] ComposeError),

    /// `activate()` was called on an already-activated exposure.
    ///
    /// Contributions carry no idempotence guarantee, so re-applying them is
    /// rejected instead of silently double-registering routes.
    #[error("exposure is already activated")]
    AlreadyActivated,

    /// The listener failed to bind.
    #[error("failed to listen on {addr}: {source}")]
    Listen {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The server failed while serving.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
