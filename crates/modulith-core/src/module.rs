//! # Module
//!
//! A named bag of providers, the unit of composition. Modules never
//! reference exposures; they are passive capability registries that can be
//! constructed and inspected without any transport running.

use crate::errors::ComposeError;
use crate::identity::Identity;
use crate::provider::{DynProvider, Provider};
use crate::registry::Registry;
use tracing::info;

/// A named unit of functionality owning a set of providers.
///
/// The provider set is populated during construction and is logically
/// read-only once the module is handed to an exposure; there is no runtime
/// re-registration after activation.
pub struct Module {
    name: Identity,
    providers: Registry<DynProvider>,
}

impl Module {
    /// Create an empty module with the given name.
    pub fn new(name: impl Into<Identity>) -> Self {
        let name = name.into();
        Self {
            providers: Registry::new(name.clone()),
            name,
        }
    }

    /// The module's name, used as its registry key on an exposure.
    pub fn name(&self) -> &Identity {
        &self.name
    }

    /// Register a provider on this module.
    ///
    /// ## Errors
    ///
    /// - `DuplicateIdentity`: a provider with the same identity already
    ///   exists on this module.
    pub fn add_provider(&mut self, provider: DynProvider) -> Result<(), ComposeError> {
        let identity = provider.identity().clone();
        self.providers.insert(identity.clone(), provider)?;
        info!("[Module] {} provides {}", self.name, identity);
        Ok(())
    }

    /// Look up a provider by identity.
    ///
    /// `None` means this module does not implement that capability, the
    /// expected majority case during an exposure's activation walk.
    pub fn provider(&self, identity: &Identity) -> Option<&dyn Provider> {
        self.providers.get(identity).map(|p| p.as_ref())
    }

    /// Number of providers registered on this module.
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }
}
