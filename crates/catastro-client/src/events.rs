//! Session event broadcast
//!
//! Decouples the transport layer from whatever reacts to an expired session
//! (typically a navigation guard forcing re-login). Built on
//! `tokio::sync::broadcast`: the client emits, zero or more subscribers
//! listen independently, and delivery is best-effort. Emitting with no
//! subscribers is a no-op.

use tokio::sync::broadcast;

/// Default buffer size for the session event channel
pub const DEFAULT_EVENT_CAPACITY: usize = 16;

/// Events emitted by the transport layer about the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The backend rejected a request with 401; the session is no longer
    /// valid and the user must authenticate again
    Expired,
}

/// Broadcast bus for session events.
///
/// Cloning shares the underlying channel: all clones emit to the same
/// subscribers. Construct one per application and hand it to the client.
#[derive(Debug, Clone)]
pub struct SessionEvents {
    sender: broadcast::Sender<SessionEvent>,
}

impl SessionEvents {
    /// Create a bus with the given channel capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to session events.
    ///
    /// Each receiver sees every event emitted after subscription. Slow
    /// receivers get `RecvError::Lagged` and can keep listening.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.sender.subscribe()
    }

    /// Fire-and-forget broadcast that the session has expired.
    ///
    /// A send error only means there are no subscribers, which is fine.
    pub fn emit_expired(&self) {
        let _ = self.sender.send(SessionEvent::Expired);
    }

    /// Number of currently attached subscribers
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for SessionEvents {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast::error::TryRecvError;

    #[tokio::test]
    async fn test_emit_reaches_subscriber() {
        let events = SessionEvents::default();
        let mut rx = events.subscribe();

        events.emit_expired();

        assert_eq!(rx.recv().await.unwrap(), SessionEvent::Expired);
    }

    #[tokio::test]
    async fn test_emit_without_subscribers_is_noop() {
        let events = SessionEvents::default();
        assert_eq!(events.receiver_count(), 0);

        // Must not panic or error out
        events.emit_expired();
    }

    #[tokio::test]
    async fn test_multiple_subscribers_each_receive() {
        let events = SessionEvents::new(4);
        let mut a = events.subscribe();
        let mut b = events.subscribe();

        events.emit_expired();

        assert_eq!(a.recv().await.unwrap(), SessionEvent::Expired);
        assert_eq!(b.recv().await.unwrap(), SessionEvent::Expired);
    }

    #[tokio::test]
    async fn test_clone_shares_channel() {
        let events = SessionEvents::default();
        let clone = events.clone();
        let mut rx = events.subscribe();

        clone.emit_expired();

        assert_eq!(rx.try_recv().unwrap(), SessionEvent::Expired);
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }
}
