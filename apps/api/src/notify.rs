#![allow(dead_code)]

//! Change notifications: a convenience refresh channel for consumers that
//! want to re-fetch after engine writes.
//!
//! Replaces module-level realtime subscription handles with an explicit
//! notifier owned by `AppState`: callers subscribe and get a disposable
//! handle; dropping it ends the subscription. Nothing depends on delivery
//! for correctness, so publishing with no subscribers is a no-op.

use serde::Serialize;
use tokio::sync::broadcast;
use uuid::Uuid;

const CHANNEL_CAPACITY: usize = 64;

/// Which stored collection changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangedEntity {
    Recommendations,
    Tasks,
    BudgetItems,
    VendorLeads,
    FeedbackAnalysis,
}

/// One change record: what changed and which event (or vendor) it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Change {
    pub entity: ChangedEntity,
    pub scope_id: Uuid,
}

/// Broadcast-backed notifier shared through `AppState`.
#[derive(Debug, Clone)]
pub struct ChangeNotifier {
    sender: broadcast::Sender<Change>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Publishes a change. Lagging or absent subscribers are ignored.
    pub fn publish(&self, entity: ChangedEntity, scope_id: Uuid) {
        let _ = self.sender.send(Change { entity, scope_id });
    }

    /// Returns a disposable subscription handle.
    pub fn subscribe(&self) -> Subscription {
        Subscription {
            receiver: self.sender.subscribe(),
        }
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

/// A live subscription. Dropping it unsubscribes.
pub struct Subscription {
    receiver: broadcast::Receiver<Change>,
}

impl Subscription {
    /// Waits for the next change. `None` once the notifier is gone.
    pub async fn next(&mut self) -> Option<Change> {
        loop {
            match self.receiver.recv().await {
                Ok(change) => return Some(change),
                // Missed messages are fine for a refresh trigger
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}
