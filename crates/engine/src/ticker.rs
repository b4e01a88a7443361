// Copyright (C) 2026 Order Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The periodic clock/escalation task.
//!
//! The ticker is driven by the presentation layer: it owns the handle,
//! picks the period, and tears the task down with the view. Each tick
//! takes exactly one `Utc::now()` snapshot, so every order in the sweep
//! is evaluated against the same instant.

use crate::Engine;
use crate::error::EngineError;
use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};

impl Engine {
    /// Starts the periodic clock/escalation task.
    ///
    /// The returned handle owns the task: call
    /// [`TickerHandle::shutdown`] for an orderly stop, or just drop the
    /// handle to cancel it.
    #[must_use]
    pub fn start_ticker(&self, period: Duration) -> TickerHandle {
        let engine: Self = self.clone();
        let task: JoinHandle<()> = tokio::spawn(async move {
            let mut interval: time::Interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                let now: DateTime<Utc> = Utc::now();
                let escalated: usize = engine.escalation_tick(now).await;
                if escalated > 0 {
                    info!(escalated, "Escalated pending orders near their deadline");
                } else {
                    debug!("Escalation tick found nothing to do");
                }
            }
        });
        TickerHandle { task: Some(task) }
    }
}

/// Handle to the periodic clock/escalation task.
///
/// Dropping the handle cancels the task, so a torn-down view can never
/// leave an orphaned timer mutating the ledger.
#[derive(Debug)]
pub struct TickerHandle {
    task: Option<JoinHandle<()>>,
}

impl TickerHandle {
    /// Stops the tick task and waits for it to wind down.
    ///
    /// # Errors
    ///
    /// Returns an error if the task terminated abnormally rather than by
    /// cancellation.
    pub async fn shutdown(mut self) -> Result<(), EngineError> {
        let Some(task) = self.task.take() else {
            return Ok(());
        };
        task.abort();
        match task.await {
            Ok(()) => Ok(()),
            Err(err) if err.is_cancelled() => Ok(()),
            Err(err) => Err(EngineError::TickerFailed {
                reason: err.to_string(),
            }),
        }
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
