//! Channel-based dispatch of provider notifications to the controller.
//!
//! The host feeds `accountsChanged`/`chainChanged` notifications from its
//! provider bridge into an mpsc channel; a spawned pump task dispatches them.
//! Shutting the pump down deregisters the handlers — it never aborts a
//! provider call already in flight.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::session::controller::ConnectionController;

/// An asynchronous notification from the wallet provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderEvent {
    /// The authorized account list changed; an empty list means the user
    /// revoked access.
    AccountsChanged(Vec<String>),
    /// The wallet's active chain changed.
    ChainChanged(String),
}

/// Handle over the spawned event dispatch task.
///
/// Dropping the handle without calling [`shutdown`](Self::shutdown) also
/// stops the pump, with the same between-dispatch semantics.
pub struct EventPump {
    stop: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl EventPump {
    /// Stops dispatching further events. The stop takes effect between
    /// dispatches: an event already handed to the controller runs to
    /// completion, provider call included.
    pub fn shutdown(self) {
        let _ = self.stop.send(());
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Spawns a task that forwards provider events to the controller until the
/// channel closes or the pump is shut down.
pub fn spawn_event_pump(
    controller: Arc<ConnectionController>,
    mut events: mpsc::UnboundedReceiver<ProviderEvent>,
) -> EventPump {
    let (stop, mut stopped) = oneshot::channel();
    let handle = tokio::spawn(async move {
        loop {
            // The stop signal is only checked between dispatches, never
            // while one is running. `biased` makes it win over a queued
            // event, so nothing is dispatched after shutdown.
            let event = tokio::select! {
                biased;
                _ = &mut stopped => {
                    debug!("event pump deregistered");
                    break;
                }
                maybe_event = events.recv() => match maybe_event {
                    Some(event) => event,
                    None => {
                        debug!("provider event channel closed");
                        break;
                    }
                },
            };
            match event {
                ProviderEvent::AccountsChanged(accounts) => {
                    controller.on_accounts_changed(accounts).await;
                }
                ProviderEvent::ChainChanged(chain_id) => {
                    controller.on_chain_changed(&chain_id);
                }
            }
        }
    });
    EventPump { stop, handle }
}
