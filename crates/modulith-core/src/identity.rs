//! # Identity
//!
//! The registry key type: an immutable string-like tag naming a capability
//! kind or a module. Equality and hashing are defined over the tag text, so
//! a static tag and an owned tag with the same text are the same identity.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Unique tag naming a capability kind or a module.
///
/// Identities are immutable after creation. Within one registration scope
/// (a module's provider set, an exposure's module set) each identity must
/// be unique; see [`crate::Registry`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity(Cow<'static, str>);

impl Identity {
    /// Create an identity from a static tag.
    ///
    /// Usable in `const` context, so capability namespaces can be declared
    /// as constants next to the capability they name.
    pub const fn from_static(tag: &'static str) -> Self {
        Self(Cow::Borrowed(tag))
    }

    /// Create an identity from an owned tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Cow::Owned(tag.into()))
    }

    /// The tag text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Identity {
    fn from(tag: &'static str) -> Self {
        Self::from_static(tag)
    }
}

impl From<String> for Identity {
    fn from(tag: String) -> Self {
        Self(Cow::Owned(tag))
    }
}
