//! # Adapter Lifecycle
//!
//! The connect/disconnect state machine shared by store adapters.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a store adapter.
///
/// Valid transitions:
///
/// - `Connecting -> Connected` (handshake + liveness check succeeded)
/// - `Connecting -> Failed` (handshake or liveness check failed)
/// - `Connected -> Disconnected` (explicit disconnect succeeded)
/// - `Connected -> Failed` (disconnect failed or timed out)
///
/// `Disconnected` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleState {
    /// Handshake in progress.
    Connecting,
    /// Resource confirmed reachable; accessors are usable.
    Connected,
    /// Resource released by an explicit disconnect.
    Disconnected,
    /// Handshake, liveness check, or disconnect failed.
    Failed,
}

impl LifecycleState {
    /// Whether a transition to `next` is part of the state machine.
    pub fn can_transition_to(self, next: LifecycleState) -> bool {
        matches!(
            (self, next),
            (LifecycleState::Connecting, LifecycleState::Connected)
                | (LifecycleState::Connecting, LifecycleState::Failed)
                | (LifecycleState::Connected, LifecycleState::Disconnected)
                | (LifecycleState::Connected, LifecycleState::Failed)
        )
    }

    /// Whether resource accessors may be used in this state.
    pub fn is_connected(self) -> bool {
        self == LifecycleState::Connected
    }

    /// Whether the state machine has reached an end state.
    pub fn is_terminal(self) -> bool {
        matches!(self, LifecycleState::Disconnected | LifecycleState::Failed)
    }
}
