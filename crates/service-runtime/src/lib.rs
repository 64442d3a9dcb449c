//! # Service Runtime
//!
//! The composition root for a Modulith service: builds the store adapter,
//! constructs the demo modules, registers them into the HTTP exposure, and
//! runs the server with Ctrl-C translated into graceful shutdown.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (from environment)
//! 2. Connect the store adapter (fatal on failure - downstream modules
//!    assume a connected store)
//! 3. Build modules and register them into the exposure
//! 4. Activate (aggregate route contributions)
//! 5. Install the signal-to-shutdown translation
//! 6. Serve until shutdown, then release the store
//!
//! All registration happens on this task before `run()`; the only
//! concurrent element is the shutdown listener.

pub mod config;
pub mod modules;

use anyhow::{Context, Result};
use modulith_http::{shutdown_channel, ExposureConfig, HttpExposure};
use modulith_store::{MemoryDriver, StoreAdapter};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::config::RuntimeConfig;

/// Store adapter shared across modules.
///
/// Lifecycle transitions are not internally locked, so shared holders go
/// through a mutex; the adapter outlives every module that captured it.
pub type SharedStore = Arc<Mutex<StoreAdapter>>;

/// The runtime orchestrating composition, serving, and teardown.
pub struct ServiceRuntime {
    config: RuntimeConfig,
}

impl ServiceRuntime {
    /// Create a runtime with configuration.
    pub fn new(config: RuntimeConfig) -> Self {
        Self { config }
    }

    /// Compose and serve, blocking until shutdown completes.
    ///
    /// Startup failures (store unreachable, wiring errors, listener bind)
    /// propagate out and terminate the process; a failed store release
    /// after shutdown is escalated the same way rather than ignored.
    pub async fn run(self) -> Result<()> {
        // Step 1: connect the store adapter
        let driver = MemoryDriver::new();
        let store = StoreAdapter::connect(&driver, self.config.store.clone())
            .await
            .context("store adapter construction failed")?;
        let store: SharedStore = Arc::new(Mutex::new(store));

        // Step 2: build modules and register them
        let mut exposure = HttpExposure::new(ExposureConfig::with_port(self.config.port));
        exposure.expose_module(modules::users::module(Arc::clone(&store))?)?;
        exposure.expose_module(modules::orders::module(Arc::clone(&store))?)?;

        // Step 3: aggregate route contributions
        exposure.activate()?;

        // Step 4: translate Ctrl-C into the explicit shutdown trigger
        let (controller, signal) = shutdown_channel();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("failed to listen for interrupt signal: {}", e);
            }
            info!("shutting down...");
            controller.shutdown();
        });

        // Step 5: serve until shutdown
        exposure
            .run(signal)
            .await
            .context("http exposure failed")?;

        // Step 6: release the store
        let mut store = store.lock().await;
        store
            .disconnect()
            .await
            .context("store release failed during shutdown")?;

        info!("shutdown complete");
        Ok(())
    }
}
