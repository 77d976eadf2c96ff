use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::{Mutex, RwLock};
use serde::Serialize;

/// The in-memory record of the current wallet connection state.
///
/// Invariant: `connected == true` implies `address` is a non-empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub connected: bool,
    pub address: Option<String>,
    pub balance_display: String,
    pub chain_id: String,
    pub last_error: Option<String>,
    pub busy: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            connected: false,
            address: None,
            balance_display: "0".to_string(),
            chain_id: String::new(),
            last_error: None,
            busy: false,
        }
    }
}

/// Identifies a subscriber registered with [`SessionStore::subscribe`].
pub type SubscriptionId = u64;

type Subscriber = Box<dyn Fn(&Session) + Send + Sync>;

/// Single source of truth for the session.
///
/// Readers take [`snapshot`](Self::snapshot)s or subscribe for change
/// notifications; the mutation API is crate-private so only the connection
/// controller (and provider event handlers routed through it) write. Writes
/// from interleaved async tasks are last-write-wins.
///
/// Subscriber callbacks run on the writer's task and must not call
/// `subscribe`/`unsubscribe` re-entrantly.
pub struct SessionStore {
    session: RwLock<Session>,
    subscribers: Mutex<Vec<(SubscriptionId, Subscriber)>>,
    next_id: AtomicU64,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            session: RwLock::new(Session::default()),
            subscribers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// A copy of the current session state.
    pub fn snapshot(&self) -> Session {
        self.session.read().clone()
    }

    /// Registers a callback invoked with the new snapshot after every
    /// committed mutation.
    pub fn subscribe(&self, f: impl Fn(&Session) + Send + Sync + 'static) -> SubscriptionId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.subscribers.lock().push((id, Box::new(f)));
        id
    }

    /// Removes a subscriber. Returns false if the id was unknown.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.lock();
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id);
        subscribers.len() != before
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        for (_, subscriber) in self.subscribers.lock().iter() {
            subscriber(&snapshot);
        }
    }

    pub(crate) fn update(&self, f: impl FnOnce(&mut Session)) {
        {
            let mut session = self.session.write();
            f(&mut session);
        }
        self.notify();
    }

    pub(crate) fn set_busy(&self, busy: bool) {
        self.update(|s| s.busy = busy);
    }

    pub(crate) fn set_error<E: fmt::Display>(&self, err: &E) {
        self.update(|s| s.last_error = Some(err.to_string()));
    }

    pub(crate) fn clear_error(&self) {
        self.update(|s| s.last_error = None);
    }

    pub(crate) fn set_connected(&self, address: &str) {
        self.update(|s| {
            s.connected = true;
            s.address = Some(address.to_string());
        });
    }

    pub(crate) fn set_address(&self, address: &str) {
        self.update(|s| s.address = Some(address.to_string()));
    }

    pub(crate) fn set_chain_id(&self, chain_id: &str) {
        self.update(|s| s.chain_id = chain_id.to_string());
    }

    pub(crate) fn set_balance_display(&self, display: String) {
        self.update(|s| s.balance_display = display);
    }

    /// Resets the connection-dependent fields to their disconnected values.
    pub(crate) fn reset_disconnected(&self) {
        self.update(|s| {
            s.connected = false;
            s.address = None;
            s.balance_display = "0".to_string();
        });
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_default_session() {
        let store = SessionStore::new();
        let session = store.snapshot();
        assert!(!session.connected);
        assert_eq!(session.address, None);
        assert_eq!(session.balance_display, "0");
        assert_eq!(session.last_error, None);
        assert!(!session.busy);
    }

    #[test]
    fn test_subscribers_see_every_mutation() {
        let store = SessionStore::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_clone = seen.clone();
        let id = store.subscribe(move |_| {
            seen_clone.fetch_add(1, Ordering::SeqCst);
        });

        store.set_busy(true);
        store.set_connected("0xabc");
        assert_eq!(seen.load(Ordering::SeqCst), 2);

        assert!(store.unsubscribe(id));
        store.set_busy(false);
        assert_eq!(seen.load(Ordering::SeqCst), 2);
        assert!(!store.unsubscribe(id));
    }

    #[test]
    fn test_subscriber_receives_committed_snapshot() {
        let store = SessionStore::new();
        let last_address = Arc::new(Mutex::new(None::<String>));
        let last_clone = last_address.clone();
        store.subscribe(move |session| {
            *last_clone.lock() = session.address.clone();
        });

        store.set_connected("0x1111");
        store.set_address("0x2222");
        // Last write wins.
        assert_eq!(last_address.lock().as_deref(), Some("0x2222"));
        assert_eq!(store.snapshot().address.as_deref(), Some("0x2222"));
    }

    #[test]
    fn test_reset_disconnected() {
        let store = SessionStore::new();
        store.set_connected("0xabc");
        store.set_balance_display("1.5000".to_string());

        store.reset_disconnected();
        let session = store.snapshot();
        assert!(!session.connected);
        assert_eq!(session.address, None);
        assert_eq!(session.balance_display, "0");
    }
}
