//! # Modulith Test Suite
//!
//! Unified test crate for cross-crate scenarios.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── composition.rs        # module -> exposure aggregation & activation
//!     └── adapter_lifecycle.rs  # store adapter connect/disconnect scenarios
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p modulith-tests
//!
//! # By category
//! cargo test -p modulith-tests integration::composition::
//! cargo test -p modulith-tests integration::adapter_lifecycle::
//! ```

pub mod integration;
