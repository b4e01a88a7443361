// Copyright (C) 2026 Order Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Session runtime for Order Desk.
//!
//! The engine owns the shared ledger for one dashboard session and is
//! the only place where wall-clock time enters the system: every
//! operation takes a single `Utc::now()` snapshot and hands it down to
//! the pure core. Mutations happen synchronously under one mutex, so
//! reads and writes of the ledger never interleave.

mod broadcast;
mod error;
mod ticker;

#[cfg(test)]
mod tests;

pub use broadcast::NoticeBroadcaster;
pub use error::EngineError;
pub use ticker::TickerHandle;

use chrono::{DateTime, Utc};
use order_desk::{EscalationResult, Ledger, run_escalation};
use order_desk_api::{
    ApiError, CreateOrderRequest, CreateOrderResponse, ListOrdersResponse, SetOrderStatusRequest,
    SetOrderStatusResponse, StatsResponse,
};
use order_desk_notices::Notice;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{Mutex, broadcast as tokio_broadcast};

/// Shared session state for one dashboard run.
///
/// Cloning the engine is cheap and shares the same ledger, broadcaster,
/// and visibility toggle.
#[derive(Clone)]
pub struct Engine {
    /// The session ledger, guarded by a single mutex.
    ledger: Arc<Mutex<Ledger>>,
    /// Broadcaster for presentation-facing notices.
    broadcaster: NoticeBroadcaster,
    /// Whether monetary values render unmasked. Purely presentational.
    show_values: Arc<AtomicBool>,
}

impl Engine {
    /// Creates an engine with an empty ledger and visible values.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ledger(Ledger::new())
    }

    /// Creates an engine over an existing ledger (demo seeding, tests).
    #[must_use]
    pub fn with_ledger(ledger: Ledger) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(ledger)),
            broadcaster: NoticeBroadcaster::new(),
            show_values: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Creates a new order from form input.
    ///
    /// # Errors
    ///
    /// Returns an error if any field is missing or invalid; the ledger
    /// is left untouched in that case.
    pub async fn create_order(
        &self,
        request: CreateOrderRequest,
    ) -> Result<CreateOrderResponse, ApiError> {
        let now: DateTime<Utc> = Utc::now();
        let mut ledger = self.ledger.lock().await;
        let result = order_desk_api::create_order(&ledger, request, now)?;
        *ledger = result.new_ledger;
        drop(ledger);
        self.broadcaster.publish(&result.notice);
        Ok(result.response)
    }

    /// Replaces an order's status.
    ///
    /// # Errors
    ///
    /// Returns an error if the status value is invalid or the order id
    /// is unknown.
    pub async fn set_order_status(
        &self,
        request: SetOrderStatusRequest,
    ) -> Result<SetOrderStatusResponse, ApiError> {
        let now: DateTime<Utc> = Utc::now();
        let mut ledger = self.ledger.lock().await;
        let result = order_desk_api::set_order_status(&ledger, request, now)?;
        *ledger = result.new_ledger;
        drop(ledger);
        self.broadcaster.publish(&result.notice);
        Ok(result.response)
    }

    /// Produces the grouped order list with countdown values.
    pub async fn list_orders(&self) -> ListOrdersResponse {
        let now: DateTime<Utc> = Utc::now();
        let ledger = self.ledger.lock().await;
        order_desk_api::list_orders(&ledger, now, self.values_visible())
    }

    /// Produces the dashboard statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if summing the ledger value overflows.
    pub async fn stats(&self) -> Result<StatsResponse, ApiError> {
        let now: DateTime<Utc> = Utc::now();
        let ledger = self.ledger.lock().await;
        order_desk_api::get_stats(&ledger, now, self.values_visible())
    }

    /// Returns a copy of the current ledger.
    pub async fn snapshot(&self) -> Ledger {
        self.ledger.lock().await.clone()
    }

    /// Whether monetary values currently render unmasked.
    #[must_use]
    pub fn values_visible(&self) -> bool {
        self.show_values.load(Ordering::Relaxed)
    }

    /// Flips the value-visibility toggle and returns the new state.
    ///
    /// The toggle is presentational only; it never touches the ledger.
    pub fn toggle_value_visibility(&self) -> bool {
        !self.show_values.fetch_xor(true, Ordering::Relaxed)
    }

    /// Subscribes to the notice stream.
    ///
    /// Notices published before subscription are not received.
    #[must_use]
    pub fn subscribe(&self) -> tokio_broadcast::Receiver<Notice> {
        self.broadcaster.subscribe()
    }

    /// Runs one escalation sweep at `now` and publishes the resulting
    /// notices. Returns how many orders were escalated.
    pub(crate) async fn escalation_tick(&self, now: DateTime<Utc>) -> usize {
        let mut ledger = self.ledger.lock().await;
        let result: EscalationResult = run_escalation(&ledger, now);
        *ledger = result.new_ledger;
        drop(ledger);

        for notice in &result.notices {
            self.broadcaster.publish(notice);
        }
        result.escalated.len()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
