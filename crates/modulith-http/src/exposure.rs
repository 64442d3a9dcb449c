//! # HTTP Exposure
//!
//! Owns the module registry and the axum server. Aggregates every
//! registered module's `"RouteHandler"` contributions into one router at
//! activation, then serves it until the shutdown signal fires.

use crate::errors::ExposureError;
use crate::provider::{RouteProvider, ROUTE_CAPABILITY};
use crate::shutdown::ShutdownSignal;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use modulith_core::{ComposeError, Identity, Module, Registry};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tower::ServiceExt;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// Identity the exposure itself is known under.
pub const HTTP_EXPOSURE: Identity = Identity::from_static("HttpExposure");

/// Listener settings for the HTTP exposure.
#[derive(Debug, Clone)]
pub struct ExposureConfig {
    /// Interface to bind.
    pub host: IpAddr,
    /// Port to listen on.
    pub port: u16,
}

impl ExposureConfig {
    /// Bind all interfaces on the given port.
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Self::default()
        }
    }

    /// The socket address to bind.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ExposureConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
        }
    }
}

/// Process-boundary entry point aggregating module routes onto one server.
///
/// Modules are registered before activation; the module set is frozen for
/// the run once `activate()` has succeeded. Building, registering, and
/// activating all happen on one task - only the served transport is
/// concurrent.
pub struct HttpExposure {
    name: Identity,
    config: ExposureConfig,
    modules: Registry<Module>,
    /// Base router until activation, aggregated router after.
    router: Option<Router>,
    /// One-shot activation guard.
    activated: bool,
}

impl HttpExposure {
    /// Create an exposure with a base router (health route, trace layer
    /// applied at activation).
    pub fn new(config: ExposureConfig) -> Self {
        Self {
            name: HTTP_EXPOSURE,
            config,
            modules: Registry::new(HTTP_EXPOSURE),
            router: Some(Router::new().route("/health", get(health))),
            activated: false,
        }
    }

    /// The exposure's identity.
    pub fn name(&self) -> &Identity {
        &self.name
    }

    /// Register a module.
    ///
    /// ## Errors
    ///
    /// - `DuplicateIdentity`: a module with the same name is already
    ///   registered. Rejected rather than overwritten, so a wiring bug
    ///   cannot silently mask an earlier module.
    pub fn expose_module(&mut self, module: Module) -> Result<(), ExposureError> {
        let name = module.name().clone();
        self.modules.insert(name.clone(), module)?;
        info!("[HttpExposure] module {} registered", name);
        Ok(())
    }

    /// Number of registered modules.
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Walk all registered modules and aggregate their route contributions.
    ///
    /// Modules without a `"RouteHandler"` provider are skipped; a provider
    /// under that identity with the wrong shape aborts activation entirely.
    /// One-shot: a second call is rejected, because contributions carry no
    /// idempotence guarantee.
    ///
    /// ## Errors
    ///
    /// - `AlreadyActivated`: activation already ran.
    /// - `Compose(CapabilityTypeMismatch)`: a module registered a
    ///   same-named capability of the wrong shape.
    pub fn activate(&mut self) -> Result<(), ExposureError> {
        if self.activated {
            return Err(ExposureError::AlreadyActivated);
        }
        let mut router = self.router.take().ok_or(ExposureError::AlreadyActivated)?;

        for module in self.modules.values() {
            let Some(provider) = module.provider(&ROUTE_CAPABILITY) else {
                debug!(
                    "[HttpExposure] no {} provider on module {}, skipping",
                    ROUTE_CAPABILITY,
                    module.name()
                );
                continue;
            };
            let Some(routes) = provider.as_any().downcast_ref::<RouteProvider>() else {
                return Err(ComposeError::CapabilityTypeMismatch {
                    module: module.name().clone(),
                    identity: ROUTE_CAPABILITY,
                }
                .into());
            };
            router = routes.apply(router);
            info!(
                "[HttpExposure] module {} contributed {} route registration(s)",
                module.name(),
                routes.route_count()
            );
        }

        self.router = Some(router.layer(TraceLayer::new_for_http()));
        self.activated = true;
        info!(
            "[HttpExposure] activated with {} module(s)",
            self.modules.len()
        );
        Ok(())
    }

    /// Activate if not yet activated. Used by the lazy entry points
    /// (`run`, `inject`) so callers may omit the explicit `activate()`.
    fn ensure_activated(&mut self) -> Result<(), ExposureError> {
        if self.activated {
            return Ok(());
        }
        self.activate()
    }

    /// Bind the listener and serve until the shutdown signal fires.
    ///
    /// ## Errors
    ///
    /// - `Listen`: the listener failed to bind; surfaced to the caller,
    ///   never swallowed.
    /// - `Serve`: the server failed while serving.
    pub async fn run(mut self, shutdown: ShutdownSignal) -> Result<(), ExposureError> {
        self.ensure_activated()?;

        let addr = self.config.listen_addr();
        let router = self.router.take().ok_or(ExposureError::AlreadyActivated)?;

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|source| ExposureError::Listen { addr, source })?;
        info!("[HttpExposure] listening on http://{}", addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown.wait())
            .await
            .map_err(ExposureError::Serve)?;

        info!("[HttpExposure] server stopped");
        Ok(())
    }

    /// Drive a synthetic request through the aggregated router, without a
    /// listener. Activates lazily on first use (one-shot, same guard as
    /// `activate()`); test harnesses can issue requests without managing
    /// activation order.
    pub async fn inject(&mut self, request: Request<Body>) -> Result<Response, ExposureError> {
        self.ensure_activated()?;
        let router = self.router.clone().ok_or(ExposureError::AlreadyActivated)?;
        let response = match router.oneshot(request).await {
            Ok(response) => response,
            Err(infallible) => match infallible {},
        };
        Ok(response)
    }
}

/// Liveness endpoint served by every exposure, independent of modules.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "modulith-http",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
