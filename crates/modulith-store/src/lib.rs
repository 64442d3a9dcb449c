//! # Modulith Store
//!
//! Document-store adapter for the Modulith composition framework: a stateful
//! handle to an external document resource with an explicit
//! connect/disconnect lifecycle.
//!
//! ## Architecture (Ports & Adapters)
//!
//! - `ports` - the driven interfaces a concrete driver must implement
//!   (`StoreDriver`, `StoreSession`, `DocumentCollection`)
//! - `adapter` - the lifecycle-managed [`StoreAdapter`] built on those ports
//! - `adapters::memory` - in-memory driver for tests and local runs
//!
//! ## Lifecycle
//!
//! ```text
//! connect(): Connecting ──handshake + ping──► Connected ──disconnect()──► Disconnected
//!                 │                               │
//!                 └──error/timeout──► Failed ◄────┘ (disconnect error)
//! ```
//!
//! Construction blocks until the resource is confirmed reachable (bounded
//! handshake plus liveness ping) or fails fatally; downstream modules may
//! assume a returned adapter is connected.

pub mod adapter;
pub mod adapters;
pub mod config;
pub mod errors;
pub mod lifecycle;
pub mod ports;

pub use adapter::StoreAdapter;
pub use adapters::memory::MemoryDriver;
pub use config::StoreConfig;
pub use errors::{DriverError, StoreError};
pub use lifecycle::LifecycleState;
pub use ports::{Document, DocumentCollection, StoreDriver, StoreSession};
