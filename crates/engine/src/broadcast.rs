// Copyright (C) 2026 Order Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Notice streaming support for presentation layers.
//!
//! Notices are broadcast to all subscribers and are informational only:
//! they describe what changed in the ledger, never direct it. A
//! presentation layer must still read the ledger projections for
//! authoritative data.

use order_desk_notices::Notice;
use tokio::sync::broadcast;
use tracing::debug;

/// Maximum number of notices to buffer in the broadcast channel.
/// If subscribers cannot keep up, older notices are dropped.
const NOTICE_BUFFER_SIZE: usize = 100;

/// Broadcaster for presentation-facing notices.
///
/// A lightweight wrapper around `tokio::sync::broadcast` that lets any
/// number of subscribers receive transition notices without ever
/// blocking the engine.
#[derive(Debug, Clone)]
pub struct NoticeBroadcaster {
    /// The broadcast channel sender.
    tx: broadcast::Sender<Notice>,
}

impl NoticeBroadcaster {
    /// Creates a new notice broadcaster.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(NOTICE_BUFFER_SIZE);
        Self { tx }
    }

    /// Publishes a notice to all subscribers.
    ///
    /// If nobody is subscribed, the notice is silently dropped. This is
    /// non-blocking and never waits for subscribers.
    pub fn publish(&self, notice: &Notice) {
        match self.tx.send(notice.clone()) {
            Ok(count) => {
                debug!(?notice, receivers = count, "Published notice");
            }
            Err(_) => {
                // No receivers, which is fine
                debug!(?notice, "No subscribers for notice");
            }
        }
    }

    /// Subscribes to the notice stream.
    ///
    /// Returns a receiver for all future notices. Notices published
    /// before subscription are not received.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.tx.subscribe()
    }
}

impl Default for NoticeBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}
