//! # Modulith HTTP Exposure
//!
//! Process-boundary entry point that aggregates one capability kind -
//! route registration under the `"RouteHandler"` identity - across all
//! registered modules onto a single axum server.
//!
//! ## Activation Sequence
//!
//! For every registered module, `activate()`:
//!
//! 1. looks up the `"RouteHandler"` provider identity;
//! 2. skips the module if absent (not an error - most modules do not
//!    contribute routes);
//! 3. narrows the provider to [`RouteProvider`]; a failed narrowing is a
//!    fatal configuration error that aborts activation entirely;
//! 4. replays the provider's route registrations onto the router.
//!
//! ## Shutdown
//!
//! `run()` takes an explicit [`ShutdownSignal`]; translating an OS signal
//! into a shutdown trigger is the composition root's job, not this
//! crate's. No global signal handler is installed here.

pub mod errors;
pub mod exposure;
pub mod provider;
pub mod shutdown;

pub use errors::ExposureError;
pub use exposure::{ExposureConfig, HttpExposure};
pub use provider::{RouteProvider, ROUTE_CAPABILITY};
pub use shutdown::{shutdown_channel, ShutdownController, ShutdownSignal};
