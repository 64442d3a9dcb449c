//! # In-Memory Driver
//!
//! Process-local document store for unit tests and local runs.
//! Production deployments supply a real driver behind the same ports.

use crate::errors::DriverError;
use crate::ports::{Document, DocumentCollection, StoreDriver, StoreSession};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Shared collection storage: collection name -> documents.
type Collections = Arc<RwLock<HashMap<String, Vec<Document>>>>;

/// Connection behavior, used to simulate failure modes in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Behavior {
    /// Handshake and liveness check succeed.
    Reachable,
    /// Handshake never completes; the caller's timeout fires.
    Unreachable,
    /// Handshake succeeds but the liveness check is rejected.
    FailingPing,
}

/// In-memory store driver.
///
/// Sessions opened from one driver instance share the same collections, so
/// data written through one session is visible through another.
pub struct MemoryDriver {
    behavior: Behavior,
    collections: Collections,
}

impl MemoryDriver {
    /// A reachable in-memory endpoint.
    pub fn new() -> Self {
        Self {
            behavior: Behavior::Reachable,
            collections: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// An endpoint whose handshake never completes, for exercising the
    /// connect timeout path.
    pub fn unreachable() -> Self {
        Self {
            behavior: Behavior::Unreachable,
            collections: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// An endpoint that accepts connections but rejects the liveness probe.
    pub fn with_failing_ping() -> Self {
        Self {
            behavior: Behavior::FailingPing,
            collections: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MemoryDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StoreDriver for MemoryDriver {
    async fn connect(&self, _uri: &str) -> Result<Box<dyn StoreSession>, DriverError> {
        match self.behavior {
            Behavior::Unreachable => std::future::pending().await,
            Behavior::Reachable | Behavior::FailingPing => Ok(Box::new(MemorySession {
                fail_ping: self.behavior == Behavior::FailingPing,
                collections: Arc::clone(&self.collections),
            })),
        }
    }
}

/// An open in-memory session.
struct MemorySession {
    fail_ping: bool,
    collections: Collections,
}

#[async_trait]
impl StoreSession for MemorySession {
    async fn ping(&self) -> Result<(), DriverError> {
        if self.fail_ping {
            return Err(DriverError::Unavailable(
                "liveness probe rejected".to_string(),
            ));
        }
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), DriverError> {
        Ok(())
    }

    fn collection(&self, name: &str) -> Box<dyn DocumentCollection> {
        Box::new(MemoryCollection {
            name: name.to_string(),
            collections: Arc::clone(&self.collections),
        })
    }
}

/// Accessor for one in-memory collection.
struct MemoryCollection {
    name: String,
    collections: Collections,
}

/// Subset match: every key/value pair of the filter object is present and
/// equal in the document. An empty (or non-object) filter matches anything.
fn matches_filter(document: &Document, filter: &Document) -> bool {
    match filter.as_object() {
        Some(fields) => fields.iter().all(|(key, expected)| {
            document.get(key).map(|actual| actual == expected) == Some(true)
        }),
        None => true,
    }
}

#[async_trait]
impl DocumentCollection for MemoryCollection {
    async fn insert_one(&self, document: Document) -> Result<(), DriverError> {
        self.collections
            .write()
            .entry(self.name.clone())
            .or_default()
            .push(document);
        Ok(())
    }

    async fn find_one(&self, filter: &Document) -> Result<Option<Document>, DriverError> {
        let collections = self.collections.read();
        Ok(collections
            .get(&self.name)
            .and_then(|docs| docs.iter().find(|d| matches_filter(d, filter)).cloned()))
    }

    async fn find(&self, filter: &Document) -> Result<Vec<Document>, DriverError> {
        let collections = self.collections.read();
        Ok(collections
            .get(&self.name)
            .map(|docs| {
                docs.iter()
                    .filter(|d| matches_filter(d, filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn count_documents(&self) -> Result<u64, DriverError> {
        let collections = self.collections.read();
        Ok(collections.get(&self.name).map_or(0, |docs| docs.len() as u64))
    }

    async fn delete_one(&self, filter: &Document) -> Result<bool, DriverError> {
        let mut collections = self.collections.write();
        if let Some(docs) = collections.get_mut(&self.name) {
            if let Some(position) = docs.iter().position(|d| matches_filter(d, filter)) {
                docs.remove(position);
                return Ok(true);
            }
        }
        Ok(false)
    }

    async fn drop(&self) -> Result<(), DriverError> {
        self.collections.write().remove(&self.name);
        Ok(())
    }
}
