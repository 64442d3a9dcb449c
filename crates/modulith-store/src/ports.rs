//! # Driven Ports
//!
//! Interfaces a concrete store driver must implement. The adapter in this
//! crate is generic over these ports; production deployments supply a real
//! driver, tests use [`crate::adapters::memory::MemoryDriver`].
//!
//! All operations are pure pass-through delegations to the underlying
//! resource and carry no contract beyond "fails if the resource itself
//! fails". Timeouts are enforced by the adapter, which wraps driver calls
//! in `tokio::time::timeout`.

use crate::errors::DriverError;
use async_trait::async_trait;

/// A schemaless document.
pub type Document = serde_json::Value;

/// Entry point of a store driver: opens sessions against an endpoint.
#[async_trait]
pub trait StoreDriver: Send + Sync {
    /// Perform the connection handshake against the assembled URI.
    ///
    /// The caller bounds this call with a timeout; implementations may
    /// block until the endpoint answers or rejects.
    async fn connect(&self, uri: &str) -> Result<Box<dyn StoreSession>, DriverError>;
}

/// An open connection to the resource.
#[async_trait]
pub trait StoreSession: Send + Sync {
    /// Liveness check against the connected endpoint.
    async fn ping(&self) -> Result<(), DriverError>;

    /// Release the connection.
    async fn disconnect(&self) -> Result<(), DriverError>;

    /// Accessor for a named collection.
    fn collection(&self, name: &str) -> Box<dyn DocumentCollection>;
}

/// Accessor for one collection of documents.
#[async_trait]
pub trait DocumentCollection: Send + Sync {
    /// Insert a document.
    async fn insert_one(&self, document: Document) -> Result<(), DriverError>;

    /// Find the first document matching the filter.
    ///
    /// A document matches when every key/value pair of the filter object is
    /// present and equal in the document.
    async fn find_one(&self, filter: &Document) -> Result<Option<Document>, DriverError>;

    /// Find all documents matching the filter.
    async fn find(&self, filter: &Document) -> Result<Vec<Document>, DriverError>;

    /// Count all documents in the collection.
    async fn count_documents(&self) -> Result<u64, DriverError>;

    /// Delete the first document matching the filter. Returns whether a
    /// document was deleted.
    async fn delete_one(&self, filter: &Document) -> Result<bool, DriverError>;

    /// Drop the whole collection.
    async fn drop(&self) -> Result<(), DriverError>;
}

impl std::fmt::Debug for dyn DocumentCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DocumentCollection")
    }
}
