//! # Registry Primitive
//!
//! An identity-keyed map that rejects duplicate registration. This is the
//! single registration/lookup contract used by modules (provider sets) and
//! exposures (module sets).

use crate::errors::ComposeError;
use crate::identity::Identity;
use std::collections::HashMap;
use tracing::debug;

/// Identity-keyed registry with reject-on-duplicate semantics.
///
/// Entries are unordered. Absence on lookup is a normal outcome; most
/// scopes will not hold every identity that might be asked for.
#[derive(Debug)]
pub struct Registry<V> {
    /// The scope this registry belongs to, named in duplicate errors.
    scope: Identity,
    entries: HashMap<Identity, V>,
}

impl<V> Registry<V> {
    /// Create an empty registry for the given scope.
    pub fn new(scope: Identity) -> Self {
        Self {
            scope,
            entries: HashMap::new(),
        }
    }

    /// Register a value under an identity.
    ///
    /// ## Errors
    ///
    /// - `DuplicateIdentity`: the identity is already present. The existing
    ///   entry is left untouched.
    pub fn insert(&mut self, identity: Identity, value: V) -> Result<(), ComposeError> {
        if self.entries.contains_key(&identity) {
            return Err(ComposeError::DuplicateIdentity {
                scope: self.scope.clone(),
                identity,
            });
        }
        debug!("[Registry] {} registered on {}", identity, self.scope);
        self.entries.insert(identity, value);
        Ok(())
    }

    /// Look up a value by identity. `None` is the expected miss outcome.
    pub fn get(&self, identity: &Identity) -> Option<&V> {
        self.entries.get(identity)
    }

    /// Look up a value mutably by identity.
    pub fn get_mut(&mut self, identity: &Identity) -> Option<&mut V> {
        self.entries.get_mut(identity)
    }

    /// Check whether an identity is registered.
    pub fn contains(&self, identity: &Identity) -> bool {
        self.entries.contains_key(identity)
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over registered identities (no ordering guarantee).
    pub fn identities(&self) -> impl Iterator<Item = &Identity> {
        self.entries.keys()
    }

    /// Iterate over registered values (no ordering guarantee).
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }

    /// Iterate over entries (no ordering guarantee).
    pub fn iter(&self) -> impl Iterator<Item = (&Identity, &V)> {
        self.entries.iter()
    }
}
