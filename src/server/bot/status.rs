//! Readiness state of the Discord session.
//!
//! The session moves through `Idle → Connecting → Ready | Failed` exactly once, and to
//! `Closed` on shutdown. The state lives in a `tokio::sync::watch` channel so request
//! handlers read it without blocking while startup code can await the transition.

use std::time::Duration;

use tokio::sync::watch;

/// Lifecycle state of the Discord session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Client built, handshake not started.
    Idle,
    /// Handshake in progress.
    Connecting,
    /// Handshake complete and guild cache populated.
    Ready {
        /// Tag of the bot account, e.g. `gateway#1234`
        identity: String,
    },
    /// Handshake failed; the session will not become ready without a restart.
    Failed { reason: String },
    /// Session shut down.
    Closed,
}

/// Shared, observable `ConnectionStatus`.
///
/// Held behind an `Arc` by both the connection and the gateway event handler. Transitions
/// are one-way: a session that reached `Ready` or `Failed` never returns to `Connecting`.
pub struct SessionStatus {
    tx: watch::Sender<ConnectionStatus>,
}

impl SessionStatus {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ConnectionStatus::Idle);
        Self { tx }
    }

    /// Snapshot of the current state.
    #[cfg(test)]
    pub fn current(&self) -> ConnectionStatus {
        self.tx.borrow().clone()
    }

    pub fn is_ready(&self) -> bool {
        matches!(*self.tx.borrow(), ConnectionStatus::Ready { .. })
    }

    /// Bot account tag while the session is ready.
    pub fn identity(&self) -> Option<String> {
        match &*self.tx.borrow() {
            ConnectionStatus::Ready { identity } => Some(identity.clone()),
            _ => None,
        }
    }

    /// Receiver notified on every transition.
    #[cfg(test)]
    pub fn subscribe(&self) -> watch::Receiver<ConnectionStatus> {
        self.tx.subscribe()
    }

    /// Waits until the handshake outcome is known.
    ///
    /// # Returns
    /// - `ConnectionStatus::Ready`, `Failed` or `Closed` - Whichever is reached first
    pub async fn settled(&self) -> ConnectionStatus {
        let mut rx = self.tx.subscribe();
        let settled = rx
            .wait_for(|status| {
                !matches!(status, ConnectionStatus::Idle | ConnectionStatus::Connecting)
            })
            .await
            .map(|status| (*status).clone());

        settled.unwrap_or(ConnectionStatus::Closed)
    }

    /// Moves `Idle → Connecting`.
    ///
    /// # Returns
    /// - `true` - The caller won the transition and should start the handshake
    /// - `false` - The handshake was already started
    pub fn begin_connecting(&self) -> bool {
        self.tx.send_if_modified(|status| match status {
            ConnectionStatus::Idle => {
                *status = ConnectionStatus::Connecting;
                true
            }
            _ => false,
        })
    }

    /// Moves `Connecting → Ready`. Ignored in any other state.
    pub fn mark_ready(&self, identity: String) -> bool {
        self.tx.send_if_modified(|status| match status {
            ConnectionStatus::Connecting => {
                *status = ConnectionStatus::Ready { identity };
                true
            }
            _ => false,
        })
    }

    /// Marks the session ready once `grace` has elapsed, unless it settled earlier.
    ///
    /// Covers guilds that stay unavailable after the handshake: the guild cache never
    /// reports complete, but the session is usable for every guild that did arrive.
    ///
    /// # Returns
    /// - `true` - This call made the session ready
    /// - `false` - The session was already ready, failed or closed
    pub async fn mark_ready_after(&self, identity: String, grace: Duration) -> bool {
        tokio::time::sleep(grace).await;
        self.mark_ready(identity)
    }

    /// Moves `Idle | Connecting → Failed`. A ready session keeps its state.
    pub fn mark_failed(&self, reason: String) -> bool {
        self.tx.send_if_modified(|status| match status {
            ConnectionStatus::Idle | ConnectionStatus::Connecting => {
                *status = ConnectionStatus::Failed { reason };
                true
            }
            _ => false,
        })
    }

    /// Moves any state except `Failed` to `Closed`.
    pub fn mark_closed(&self) {
        self.tx.send_if_modified(|status| match status {
            ConnectionStatus::Failed { .. } | ConnectionStatus::Closed => false,
            _ => {
                *status = ConnectionStatus::Closed;
                true
            }
        });
    }
}

impl Default for SessionStatus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the happy path through the lifecycle.
    ///
    /// Expected: not ready until marked ready, identity only while ready
    #[test]
    fn transitions_to_ready() {
        let status = SessionStatus::new();
        assert_eq!(status.current(), ConnectionStatus::Idle);
        assert!(!status.is_ready());

        assert!(status.begin_connecting());
        assert!(!status.is_ready());
        assert_eq!(status.identity(), None);

        assert!(status.mark_ready("gateway#0001".to_string()));
        assert!(status.is_ready());
        assert_eq!(status.identity().as_deref(), Some("gateway#0001"));

        status.mark_closed();
        assert!(!status.is_ready());
        assert_eq!(status.identity(), None);
    }

    /// Tests a second handshake start is refused.
    ///
    /// Expected: only the first begin_connecting wins
    #[test]
    fn begin_connecting_is_idempotent() {
        let status = SessionStatus::new();

        assert!(status.begin_connecting());
        assert!(!status.begin_connecting());
        assert_eq!(status.current(), ConnectionStatus::Connecting);
    }

    /// Tests a failed handshake is terminal.
    ///
    /// Expected: later ready events and closes leave the failure in place
    #[test]
    fn failure_is_terminal() {
        let status = SessionStatus::new();
        status.begin_connecting();

        assert!(status.mark_failed("Invalid authentication".to_string()));
        assert!(!status.mark_ready("gateway".to_string()));
        status.mark_closed();

        assert_eq!(
            status.current(),
            ConnectionStatus::Failed {
                reason: "Invalid authentication".to_string()
            }
        );
    }

    /// Tests a ready session is not downgraded to failed.
    ///
    /// Expected: mark_failed returns false and readiness persists
    #[test]
    fn ready_is_not_overwritten_by_failure() {
        let status = SessionStatus::new();
        status.begin_connecting();
        status.mark_ready("gateway".to_string());

        assert!(!status.mark_failed("late error".to_string()));
        assert!(status.is_ready());
    }

    /// Tests subscribers observe the transition.
    ///
    /// Expected: wait_for resolves with the ready state
    #[tokio::test]
    async fn subscribers_observe_ready() {
        let status = std::sync::Arc::new(SessionStatus::new());
        let mut rx = status.subscribe();
        status.begin_connecting();

        let waiter = tokio::spawn(async move {
            rx.wait_for(|s| matches!(s, ConnectionStatus::Ready { .. }))
                .await
                .map(|s| (*s).clone())
        });

        status.mark_ready("gateway".to_string());

        let observed = waiter.await.unwrap().unwrap();
        assert_eq!(
            observed,
            ConnectionStatus::Ready {
                identity: "gateway".to_string()
            }
        );
    }

    /// Tests a session becomes ready after the grace period without a complete cache.
    ///
    /// Expected: still connecting just before the grace elapses, ready after
    #[tokio::test(start_paused = true)]
    async fn ready_after_grace_without_cache_ready() {
        let status = std::sync::Arc::new(SessionStatus::new());
        status.begin_connecting();

        let fallback = status.clone();
        let task = tokio::spawn(async move {
            fallback
                .mark_ready_after("gateway#0001".to_string(), Duration::from_secs(5))
                .await
        });

        tokio::time::sleep(Duration::from_secs(4)).await;
        assert_eq!(status.current(), ConnectionStatus::Connecting);

        assert!(task.await.unwrap());
        assert_eq!(status.identity().as_deref(), Some("gateway#0001"));
    }

    /// Tests the grace fallback leaves an already settled session alone.
    ///
    /// Expected: returns false and keeps the identity reported by the cache
    #[tokio::test(start_paused = true)]
    async fn grace_fallback_ignored_once_ready() {
        let status = SessionStatus::new();
        status.begin_connecting();
        status.mark_ready("cached#0001".to_string());

        let changed = status
            .mark_ready_after("fallback#0001".to_string(), Duration::from_secs(5))
            .await;

        assert!(!changed);
        assert_eq!(status.identity().as_deref(), Some("cached#0001"));
    }
}
