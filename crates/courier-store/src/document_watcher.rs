//! Live subscription channels for user documents.
//!
//! Each watched document gets a `tokio::sync::watch` channel holding the
//! latest full snapshot. Subscribers see the current snapshot immediately
//! and every committed write afterwards; intermediate snapshots a slow
//! subscriber misses are dropped (last full snapshot wins).

use courier_core::UserDocument;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{RwLock, watch};
use uuid::Uuid;

/// Manages watch channels for all watched user documents.
#[derive(Clone, Default)]
pub struct DocumentWatcher {
    channels: Arc<RwLock<HashMap<Uuid, watch::Sender<Option<UserDocument>>>>>,
}

impl DocumentWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to a user's document, seeding a new channel with the given
    /// snapshot. An existing channel already holds the latest published
    /// snapshot, so the seed is ignored in that case.
    pub async fn subscribe(
        &self,
        user_id: Uuid,
        initial: Option<UserDocument>,
    ) -> watch::Receiver<Option<UserDocument>> {
        let mut channels = self.channels.write().await;

        match channels.get(&user_id) {
            Some(sender) => sender.subscribe(),
            None => {
                let (sender, receiver) = watch::channel(initial);
                log::debug!("Created watch channel for user {}", user_id);
                channels.insert(user_id, sender);
                receiver
            }
        }
    }

    /// Publish a fresh snapshot to all subscribers of a user's document.
    /// Channels nobody listens to any more are pruned instead.
    pub async fn publish(&self, user_id: Uuid, snapshot: Option<UserDocument>) {
        let mut channels = self.channels.write().await;

        let idle = match channels.get(&user_id) {
            Some(sender) if sender.receiver_count() == 0 => true,
            Some(sender) => {
                sender.send_replace(snapshot);
                false
            }
            None => false,
        };

        if idle {
            channels.remove(&user_id);
            log::debug!("Pruned idle watch channel for user {}", user_id);
        }
    }

    /// Number of live watch channels (for logging/debugging).
    pub async fn channel_count(&self) -> usize {
        let channels = self.channels.read().await;
        channels.len()
    }
}
