//! # Error Types
//!
//! Composition errors shared across the framework crates.

use crate::identity::Identity;
use thiserror::Error;

/// Errors raised while composing modules, providers, and exposures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    /// An identity was registered twice within one scope.
    ///
    /// Raised at registration time (a module adding a provider with a reused
    /// identity, an exposure adding a module with a reused name). The caller
    /// must pick a different identity or fix the wiring; the existing entry
    /// is never overwritten.
    #[error("duplicate identity: {identity} is already registered on {scope}")]
    DuplicateIdentity { scope: Identity, identity: Identity },

    /// A looked-up capability did not have the shape the exposure requires.
    ///
    /// Raised at activation time. Fatal: a module registered a same-named
    /// capability of the wrong shape, and composition must stop rather than
    /// silently drop contributions.
    #[error("capability {identity} on module {module} does not satisfy the required interface")]
    CapabilityTypeMismatch { module: Identity, identity: Identity },
}
