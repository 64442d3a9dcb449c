//! # Shutdown Plumbing
//!
//! Explicit cancellation pair for graceful shutdown. The controller is
//! held by whoever decides to stop serving (usually the composition root's
//! signal handler); the signal is passed into [`crate::HttpExposure::run`].

use tokio::sync::watch;
use tracing::warn;

/// Create a connected controller/signal pair.
pub fn shutdown_channel() -> (ShutdownController, ShutdownSignal) {
    let (tx, rx) = watch::channel(false);
    (ShutdownController { tx }, ShutdownSignal { rx })
}

/// One-shot trigger for graceful shutdown.
#[derive(Debug)]
pub struct ShutdownController {
    tx: watch::Sender<bool>,
}

impl ShutdownController {
    /// Request graceful shutdown. Safe to call if the serving side is
    /// already gone.
    pub fn shutdown(&self) {
        if self.tx.send(true).is_err() {
            warn!("[Shutdown] no listener for shutdown signal");
        }
    }
}

/// Receiving side of the shutdown trigger.
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

impl ShutdownSignal {
    /// Resolve once shutdown has been requested.
    ///
    /// Also resolves if the controller is dropped without firing - a
    /// server with no way left to stop it should stop.
    pub async fn wait(mut self) {
        loop {
            if *self.rx.borrow() {
                return;
            }
            if self.rx.changed().await.is_err() {
                return;
            }
        }
    }
}
