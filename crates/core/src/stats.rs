// Copyright (C) 2026 Order Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Aggregate statistics over a ledger snapshot.
//!
//! Everything here is a pure function recomputed on each view refresh;
//! there is no caching and no incremental maintenance.

use crate::error::CoreError;
use crate::state::Ledger;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use order_desk_domain::{DomainError, OrderStatus, Price};
use serde::{Deserialize, Serialize};

/// Aggregate counts and value for a ledger snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStats {
    /// Number of orders in the ledger.
    pub total_count: usize,
    /// Orders currently `Pending`.
    pub pending_count: usize,
    /// Orders currently `Urgent`.
    pub urgent_count: usize,
    /// Orders currently `Done`.
    pub done_count: usize,
    /// Sum of all prices, regardless of status.
    pub total_value: Price,
}

/// Computes aggregate statistics for the ledger.
///
/// `total_value` includes `Done` orders; the counts always satisfy
/// `pending + urgent + done == total`.
///
/// # Errors
///
/// Returns an error if summing the ledger value overflows.
pub fn compute_stats(ledger: &Ledger) -> Result<LedgerStats, CoreError> {
    let mut total_value: Price = Price::from_cents(0);
    for order in &ledger.orders {
        total_value = total_value.checked_add(order.price).ok_or_else(|| {
            CoreError::DomainViolation(DomainError::PriceOverflow {
                operation: String::from("summing ledger value"),
            })
        })?;
    }

    let count_with = |status: OrderStatus| {
        ledger
            .orders
            .iter()
            .filter(|order| order.status == status)
            .count()
    };

    Ok(LedgerStats {
        total_count: ledger.orders.len(),
        pending_count: count_with(OrderStatus::Pending),
        urgent_count: count_with(OrderStatus::Urgent),
        done_count: count_with(OrderStatus::Done),
        total_value,
    })
}

/// Order count for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    /// The calendar day (UTC).
    pub day: NaiveDate,
    /// Orders created on that day.
    pub count: usize,
}

/// Counts orders created on each of the last `days` calendar days.
///
/// The result always has exactly `days` entries, oldest first, ending
/// with the day of `now`. Days with no orders report zero rather than
/// being omitted, so the sequence can drive a trend visualization
/// directly.
#[must_use]
pub fn daily_counts(ledger: &Ledger, now: DateTime<Utc>, days: u32) -> Vec<DailyCount> {
    let today: NaiveDate = now.date_naive();

    (0..days)
        .rev()
        .map(|back| {
            let day: NaiveDate = today - Duration::days(i64::from(back));
            let count: usize = ledger
                .orders
                .iter()
                .filter(|order| order.created_at.date_naive() == day)
                .count();
            DailyCount { day, count }
        })
        .collect()
}
