//! # Modulith Core
//!
//! Identity, registry, provider, and module primitives for the Modulith
//! composition framework.
//!
//! ## Design Principles
//!
//! - **No compile-time coupling**: modules publish capabilities under stable
//!   identities; exposures discover them at activation time.
//! - **Reject on duplicate**: a reused identity is a wiring bug, never a
//!   silent overwrite.
//! - **Absence is normal**: most modules do not implement every capability;
//!   a missing provider is an expected lookup outcome, not an error.
//!
//! ## Composition Flow
//!
//! ```text
//! ┌──────────────┐  add_provider()   ┌──────────────┐
//! │   Provider   │ ────────────────► │    Module    │
//! └──────────────┘                   └──────┬───────┘
//!                                           │ expose_module()
//!                                           ▼
//!                                    ┌──────────────┐
//!                                    │   Exposure   │  activate(): lookup,
//!                                    │  (transport) │  narrow, apply
//!                                    └──────────────┘
//! ```

pub mod errors;
pub mod identity;
pub mod module;
pub mod provider;
pub mod registry;

pub use errors::ComposeError;
pub use identity::Identity;
pub use module::Module;
pub use provider::{DynProvider, Provider};
pub use registry::Registry;
