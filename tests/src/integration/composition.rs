//! # Composition Tests
//!
//! Modules built first, registered into an exposure, activated, and driven
//! with synthetic requests - the full plugin-discovery path, no listener
//! involved.

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use modulith_core::{ComposeError, Identity, Module, Provider};
    use modulith_http::{
        ExposureConfig, ExposureError, HttpExposure, RouteProvider, ROUTE_CAPABILITY,
    };
    use modulith_store::{MemoryDriver, StoreAdapter, StoreConfig};
    use service_runtime::modules::{orders, users};
    use service_runtime::SharedStore;
    use std::any::Any;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    // =========================================================================
    // FIXTURES
    // =========================================================================

    /// A module contributing a single literal-response route.
    fn route_module(name: &'static str, path: &'static str) -> Module {
        let mut provider = RouteProvider::new();
        provider.add_route(move |router| router.route(path, get(move || async move { name })));
        let mut module = Module::new(name);
        module.add_provider(Box::new(provider)).unwrap();
        module
    }

    fn request(path: &str) -> Request<Body> {
        Request::builder().uri(path).body(Body::empty()).unwrap()
    }

    fn post_json(path: &str, body: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn shared_store() -> SharedStore {
        let driver = MemoryDriver::new();
        let config = StoreConfig::new("mem://localhost", "testdb").with_retry_writes(true);
        let adapter = StoreAdapter::connect(&driver, config).await.unwrap();
        Arc::new(Mutex::new(adapter))
    }

    /// Registered under the route capability identity, but not a
    /// `RouteProvider`.
    struct NotARouteProvider {
        identity: Identity,
    }

    impl Provider for NotARouteProvider {
        fn identity(&self) -> &Identity {
            &self.identity
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    // =========================================================================
    // AGGREGATION ACROSS MODULES
    // =========================================================================

    #[tokio::test]
    async fn test_users_and_orders_both_respond() {
        let store = shared_store().await;

        let mut exposure = HttpExposure::new(ExposureConfig::default());
        exposure.expose_module(users::module(Arc::clone(&store)).unwrap()).unwrap();
        exposure.expose_module(orders::module(Arc::clone(&store)).unwrap()).unwrap();
        exposure.activate().unwrap();

        // Both modules' routes are live on one surface
        let created = exposure
            .inject(post_json("/users", &serde_json::json!({"name": "ada"})))
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);

        let response = exposure.inject(request("/users")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!([{"name": "ada"}])
        );

        let response = exposure.inject(request("/orders")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_activation_is_order_independent() {
        for registration_order in [["alpha", "beta"], ["beta", "alpha"]] {
            let mut exposure = HttpExposure::new(ExposureConfig::default());
            for name in registration_order {
                let path = if name == "alpha" { "/alpha" } else { "/beta" };
                exposure.expose_module(route_module(name, path)).unwrap();
            }
            exposure.activate().unwrap();

            // Neither module's contribution is dropped, whichever way the
            // registration order went
            for path in ["/alpha", "/beta"] {
                let response = exposure.inject(request(path)).await.unwrap();
                assert_eq!(response.status(), StatusCode::OK, "path {path} must respond");
            }
        }
    }

    #[tokio::test]
    async fn test_module_without_route_capability_is_skipped() {
        let mut exposure = HttpExposure::new(ExposureConfig::default());
        exposure.expose_module(Module::new("metrics")).unwrap();
        exposure.expose_module(route_module("alpha", "/alpha")).unwrap();

        // The capability-less module neither fails activation nor blocks
        // the other module's contribution
        exposure.activate().unwrap();
        let response = exposure.inject(request("/alpha")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    // =========================================================================
    // REGISTRATION & ACTIVATION FAILURES
    // =========================================================================

    #[tokio::test]
    async fn test_duplicate_module_name_is_rejected() {
        let mut exposure = HttpExposure::new(ExposureConfig::default());
        exposure.expose_module(route_module("users", "/users")).unwrap();

        let err = exposure
            .expose_module(route_module("users", "/users-v2"))
            .unwrap_err();
        assert!(matches!(
            err,
            ExposureError::Compose(ComposeError::DuplicateIdentity { .. })
        ));

        // The module set never exceeds the number of successful registrations
        assert_eq!(exposure.module_count(), 1);
    }

    #[tokio::test]
    async fn test_wrong_shape_capability_fails_activation() {
        let mut broken = Module::new("broken");
        broken
            .add_provider(Box::new(NotARouteProvider {
                identity: ROUTE_CAPABILITY,
            }))
            .unwrap();

        let mut exposure = HttpExposure::new(ExposureConfig::default());
        exposure.expose_module(route_module("alpha", "/alpha")).unwrap();
        exposure.expose_module(broken).unwrap();

        // The whole activation fails - the caller is informed instead of
        // contributions being silently lost
        let err = exposure.activate().unwrap_err();
        assert!(matches!(
            err,
            ExposureError::Compose(ComposeError::CapabilityTypeMismatch { .. })
        ));
    }

    #[tokio::test]
    async fn test_inject_activates_lazily_exactly_once() {
        let mut exposure = HttpExposure::new(ExposureConfig::default());
        exposure.expose_module(route_module("alpha", "/alpha")).unwrap();

        for _ in 0..3 {
            let response = exposure.inject(request("/alpha")).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        // The lazy path used the one-shot guard; explicit re-activation is
        // rejected rather than double-applying contributions
        assert!(matches!(
            exposure.activate(),
            Err(ExposureError::AlreadyActivated)
        ));
    }

    #[tokio::test]
    async fn test_health_route_is_module_independent() {
        let mut exposure = HttpExposure::new(ExposureConfig::default());
        let response = exposure.inject(request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let payload = body_json(response).await;
        assert_eq!(payload["status"], "healthy");
    }

    // =========================================================================
    // MODULE ISOLATION
    // =========================================================================

    #[test]
    fn test_module_is_inspectable_without_transport() {
        let module = route_module("alpha", "/alpha");

        // A module is a passive capability bag: constructible and
        // inspectable with no server running
        assert_eq!(module.name(), &Identity::from_static("alpha"));
        let provider = module.provider(&ROUTE_CAPABILITY).unwrap();
        let routes = provider.as_any().downcast_ref::<RouteProvider>().unwrap();
        assert_eq!(routes.route_count(), 1);
        assert!(module.provider(&Identity::from_static("Metrics")).is_none());
    }

    #[test]
    fn test_route_provider_apply_replays_onto_any_router() {
        let module = route_module("alpha", "/alpha");
        let provider = module
            .provider(&ROUTE_CAPABILITY)
            .and_then(|p| p.as_any().downcast_ref::<RouteProvider>())
            .unwrap();

        // Contributions replay onto a caller-supplied router
        let _router: Router = provider.apply(Router::new());
    }
}
