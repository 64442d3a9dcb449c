//! # Provider Contract
//!
//! The object-safe trait every capability unit implements. A provider is
//! owned by exactly one module and looked up by identity; exposures narrow
//! the trait object back to the concrete capability they understand via
//! [`Provider::as_any`].

use crate::identity::Identity;
use std::any::Any;

/// A named capability unit owned by a module.
///
/// Concrete providers carry capability-specific state (for example a list
/// of pending route registrations) and expose capability-specific methods.
/// The framework only requires the identity and a narrowing hook; an
/// exposure that looks a provider up downcasts it to the interface it
/// needs, and treats a failed downcast as a fatal configuration error.
pub trait Provider: Send + Sync {
    /// The identity this provider is registered and looked up under.
    fn identity(&self) -> &Identity;

    /// Narrowing hook for exposures.
    ///
    /// Implementations return `self`.
    fn as_any(&self) -> &dyn Any;
}

/// A type-erased provider handle for module registries.
pub type DynProvider = Box<dyn Provider>;
