//! # Integration Tests
//!
//! Cross-crate scenarios exercising the full composition path: modules
//! built in isolation, registered into an exposure, activated, and driven
//! with synthetic requests; plus adapter lifecycle against the in-memory
//! driver.

pub mod adapter_lifecycle;
pub mod composition;
