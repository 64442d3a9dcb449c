//! # Store Adapter
//!
//! Lifecycle-managed handle to a document store. Construction blocks until
//! the resource is confirmed reachable or fails fatally; accessors are
//! valid only while `Connected`.

use crate::config::StoreConfig;
use crate::errors::StoreError;
use crate::lifecycle::LifecycleState;
use crate::ports::{DocumentCollection, StoreDriver, StoreSession};
use modulith_core::Identity;
use tokio::time::timeout;
use tracing::{error, info};

/// Default identity a store adapter is known under.
pub const STORE_ADAPTER: Identity = Identity::from_static("StoreAdapter");

/// A stateful handle to an external document store.
///
/// The adapter is owned by whichever component created it; when shared
/// across modules as a long-lived resource its lifetime is that of the
/// longest holder. Lifecycle transitions are not internally locked:
/// concurrent `disconnect()` calls on one adapter require external
/// synchronization, which `&mut self` enforces at compile time for a
/// single owner.
pub struct StoreAdapter {
    identity: Identity,
    config: StoreConfig,
    state: LifecycleState,
    session: Option<Box<dyn StoreSession>>,
}

impl std::fmt::Debug for StoreAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreAdapter")
            .field("identity", &self.identity)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("session", &self.session.as_ref().map(|_| "<session>"))
            .finish()
    }
}

impl StoreAdapter {
    /// Connect to the store and verify it is alive.
    ///
    /// Performs the handshake against the assembled connection URI under
    /// the configured timeout, then issues a liveness ping. Both steps must
    /// succeed for an adapter to be returned; any failure is fatal to
    /// process startup.
    ///
    /// ## Errors
    ///
    /// - `Config`: empty URI or database name (rejected before any driver
    ///   call)
    /// - `ConnectFailure`: handshake failed or timed out
    /// - `LivenessFailure`: ping failed or timed out
    pub async fn connect(
        driver: &dyn StoreDriver,
        config: StoreConfig,
    ) -> Result<Self, StoreError> {
        config.validate()?;

        let uri = config.connection_uri();
        info!("[StoreAdapter] connecting {} db...", config.database);

        // Connecting -> Connected on success, Connecting -> Failed on error;
        // a failed construction returns Err, so no handle escapes in Failed.
        let handshake = timeout(config.connect_timeout, driver.connect(&uri)).await;
        let session = match handshake {
            Ok(Ok(session)) => session,
            Ok(Err(e)) => {
                error!("[StoreAdapter] connection failed: {}", e);
                return Err(StoreError::ConnectFailure {
                    uri,
                    reason: e.to_string(),
                });
            }
            Err(_) => {
                error!("[StoreAdapter] connection timed out");
                return Err(StoreError::ConnectFailure {
                    uri,
                    reason: format!("timed out after {:?}", config.connect_timeout),
                });
            }
        };

        let liveness = timeout(config.connect_timeout, session.ping()).await;
        match liveness {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                error!("[StoreAdapter] liveness check failed: {}", e);
                return Err(StoreError::LivenessFailure {
                    database: config.database,
                    reason: e.to_string(),
                });
            }
            Err(_) => {
                error!("[StoreAdapter] liveness check timed out");
                return Err(StoreError::LivenessFailure {
                    database: config.database,
                    reason: format!("timed out after {:?}", config.connect_timeout),
                });
            }
        }

        info!("[StoreAdapter] {} db is connected", config.database);
        Ok(Self {
            identity: STORE_ADAPTER,
            config,
            state: LifecycleState::Connected,
            session: Some(session),
        })
    }

    /// The identity this adapter is known under.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// The database name this adapter is bound to.
    pub fn database(&self) -> &str {
        &self.config.database
    }

    /// Accessor for a named collection.
    ///
    /// Pure pass-through to the underlying resource.
    ///
    /// ## Errors
    ///
    /// - `InvalidLifecycleTransition`: the adapter is not `Connected`.
    pub fn collection(&self, name: &str) -> Result<Box<dyn DocumentCollection>, StoreError> {
        match &self.session {
            Some(session) if self.state.is_connected() => Ok(session.collection(name)),
            _ => Err(StoreError::InvalidLifecycleTransition { from: self.state }),
        }
    }

    /// Release the resource.
    ///
    /// Valid only from `Connected`; calling it from any other state returns
    /// `InvalidLifecycleTransition` and never panics. On driver failure or
    /// timeout the adapter moves to `Failed` and the error is returned for
    /// the caller to log and escalate.
    pub async fn disconnect(&mut self) -> Result<(), StoreError> {
        if !self.state.is_connected() {
            return Err(StoreError::InvalidLifecycleTransition { from: self.state });
        }

        info!("[StoreAdapter] disconnecting {} db...", self.config.database);
        let session = self
            .session
            .take()
            .ok_or(StoreError::InvalidLifecycleTransition { from: self.state })?;

        match timeout(self.config.disconnect_timeout, session.disconnect()).await {
            Ok(Ok(())) => {
                self.state = LifecycleState::Disconnected;
                info!("[StoreAdapter] {} db is disconnected", self.config.database);
                Ok(())
            }
            Ok(Err(e)) => {
                self.state = LifecycleState::Failed;
                error!("[StoreAdapter] disconnect failed: {}", e);
                Err(StoreError::Driver(e))
            }
            Err(_) => {
                self.state = LifecycleState::Failed;
                error!("[StoreAdapter] disconnect timed out");
                Err(StoreError::Driver(crate::errors::DriverError::Unavailable(
                    format!("disconnect timed out after {:?}", self.config.disconnect_timeout),
                )))
            }
        }
    }
}
