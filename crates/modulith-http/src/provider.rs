//! # Route Provider
//!
//! The capability unit modules use to contribute routes to an HTTP
//! exposure. Contributions are appended during module construction and
//! replayed onto the live router at activation.

use axum::Router;
use modulith_core::{Identity, Provider};
use std::any::Any;
use tracing::debug;

/// The capability identity the HTTP exposure looks up on every module.
///
/// A module that registers its route provider under any other identity is
/// silently skipped at activation - the tag is a process-wide convention,
/// not a checked contract.
pub const ROUTE_CAPABILITY: Identity = Identity::from_static("RouteHandler");

/// One route contribution: a function that folds routes into a router.
pub type RouteRegistration = Box<dyn Fn(Router) -> Router + Send + Sync>;

/// Capability unit holding a module's pending route registrations.
///
/// `add_route` is append-only and never fails. `apply` replays all
/// registrations in insertion order; the framework makes no idempotence
/// guarantee, so callers must not apply the same provider to the same
/// router twice unless their registrations are safe to double-register.
pub struct RouteProvider {
    identity: Identity,
    routes: Vec<RouteRegistration>,
}

impl RouteProvider {
    /// Create an empty route provider under [`ROUTE_CAPABILITY`].
    pub fn new() -> Self {
        Self {
            identity: ROUTE_CAPABILITY,
            routes: Vec::new(),
        }
    }

    /// Append a route registration.
    pub fn add_route(&mut self, registration: impl Fn(Router) -> Router + Send + Sync + 'static) {
        self.routes.push(Box::new(registration));
    }

    /// Replay all registrations onto the router, in insertion order.
    pub fn apply(&self, router: Router) -> Router {
        debug!(
            "[RouteProvider] applying {} route registration(s)",
            self.routes.len()
        );
        self.routes
            .iter()
            .fold(router, |router, registration| registration(router))
    }

    /// Number of pending registrations.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }
}

impl Default for RouteProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for RouteProvider {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
