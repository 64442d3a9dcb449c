//! # Adapter Lifecycle Tests
//!
//! Store adapter scenarios against the in-memory driver: construction with
//! liveness verification, accessor pass-through, bounded connect timeout,
//! and disconnect semantics.

#[cfg(test)]
mod tests {
    use modulith_store::{
        LifecycleState, MemoryDriver, StoreAdapter, StoreConfig, StoreError,
    };
    use serde_json::json;

    fn test_config() -> StoreConfig {
        StoreConfig::new("mem://localhost", "testdb").with_retry_writes(true)
    }

    #[tokio::test]
    async fn test_connect_yields_usable_collections() {
        let driver = MemoryDriver::new();
        let adapter = StoreAdapter::connect(&driver, test_config()).await.unwrap();
        assert_eq!(adapter.state(), LifecycleState::Connected);
        assert_eq!(adapter.database(), "testdb");

        // Fresh instance: zero documents
        let items = adapter.collection("items").unwrap();
        assert_eq!(items.count_documents().await.unwrap(), 0);

        // Insert then find for the same key returns the document
        items
            .insert_one(json!({"key": "widget", "qty": 3}))
            .await
            .unwrap();
        let found = items.find_one(&json!({"key": "widget"})).await.unwrap();
        assert_eq!(found, Some(json!({"key": "widget", "qty": 3})));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unreachable_endpoint_fails_within_timeout() {
        let driver = MemoryDriver::unreachable();

        // The handshake never completes; the configured bound fires and no
        // usable handle is returned
        let err = StoreAdapter::connect(&driver, test_config()).await.unwrap_err();
        match err {
            StoreError::ConnectFailure { uri, reason } => {
                assert_eq!(uri, "mem://localhost/testdb?retryWrites=true");
                assert!(reason.contains("timed out"), "unexpected reason: {reason}");
            }
            other => panic!("expected ConnectFailure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failing_ping_reports_liveness_failure() {
        let driver = MemoryDriver::with_failing_ping();

        let err = StoreAdapter::connect(&driver, test_config()).await.unwrap_err();
        assert!(matches!(err, StoreError::LivenessFailure { .. }));
    }

    #[tokio::test]
    async fn test_double_disconnect_reports_invalid_transition() {
        let driver = MemoryDriver::new();
        let mut adapter = StoreAdapter::connect(&driver, test_config()).await.unwrap();

        adapter.disconnect().await.unwrap();
        assert_eq!(adapter.state(), LifecycleState::Disconnected);

        // Second call must not panic; it reports the invalid transition
        let err = adapter.disconnect().await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidLifecycleTransition {
                from: LifecycleState::Disconnected
            }
        ));
    }

    #[tokio::test]
    async fn test_disconnected_adapter_refuses_accessors() {
        let driver = MemoryDriver::new();
        let mut adapter = StoreAdapter::connect(&driver, test_config()).await.unwrap();
        adapter.disconnect().await.unwrap();

        let err = adapter.collection("items").unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidLifecycleTransition {
                from: LifecycleState::Disconnected
            }
        ));
    }

    #[tokio::test]
    async fn test_data_survives_across_sessions_of_one_driver() {
        let driver = MemoryDriver::new();

        let mut first = StoreAdapter::connect(&driver, test_config()).await.unwrap();
        first
            .collection("items")
            .unwrap()
            .insert_one(json!({"key": "durable"}))
            .await
            .unwrap();
        first.disconnect().await.unwrap();

        // A second adapter over the same driver sees the data: the resource
        // outlives any one holder
        let second = StoreAdapter::connect(&driver, test_config()).await.unwrap();
        let found = second
            .collection("items")
            .unwrap()
            .find_one(&json!({"key": "durable"}))
            .await
            .unwrap();
        assert!(found.is_some());
    }
}
