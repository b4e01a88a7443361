// Copyright (C) 2026 Order Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Service-level deadline math for orders.
//!
//! Every order carries an implicit 48-hour deadline measured from its
//! creation instant. The functions here are pure projections over
//! `(created_at, status, now)` and never mutate an order.
//!
//! ## Invariants
//!
//! - The countdown and the escalation rule use the same critical-window
//!   constant, so an order the countdown marks critical is exactly an
//!   order the rule would escalate.
//! - Re-applying the escalation rule at the same `now` never changes
//!   state after the first application.
//! - Orders past their deadline are never escalated; they report
//!   `expired` instead.

use crate::order::Order;
use crate::types::OrderStatus;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Hours between an order's creation and its service-level deadline.
pub const SLA_HOURS: i64 = 48;

/// Width of the critical window before the deadline, in hours.
pub const CRITICAL_WINDOW_HOURS: i64 = 6;

/// Returns the service-level deadline for an order.
#[must_use]
pub fn deadline(order: &Order) -> DateTime<Utc> {
    order.created_at + Duration::hours(SLA_HOURS)
}

/// A countdown value ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    /// Human-readable remaining-time string.
    pub text: String,
    /// The deadline has passed.
    pub expired: bool,
    /// Inside the critical window before the deadline.
    pub critical: bool,
}

/// Computes the countdown projection for an order at `now`.
///
/// Remaining time renders as whole hours, minutes modulo 60 and seconds
/// modulo 60. A deadline exactly at `now` counts as remaining, not
/// expired.
#[must_use]
pub fn remaining_time(order: &Order, now: DateTime<Utc>) -> Countdown {
    let remaining: Duration = deadline(order) - now;
    if remaining < Duration::zero() {
        return Countdown {
            text: String::from("Deadline passed"),
            expired: true,
            critical: false,
        };
    }

    let total_seconds: i64 = remaining.num_seconds();
    let hours: i64 = total_seconds / 3600;
    let minutes: i64 = (total_seconds % 3600) / 60;
    let seconds: i64 = total_seconds % 60;

    Countdown {
        text: format!("{hours}h {minutes:02}m {seconds:02}s"),
        expired: false,
        critical: hours < CRITICAL_WINDOW_HOURS,
    }
}

/// Applies the automatic escalation rule to a single order.
///
/// Returns `Some(Urgent)` when the order is `Pending` with between zero
/// and six hours left before its deadline, `None` otherwise. The rule is
/// one-directional: it never lowers `Urgent`, never touches `Done`, and
/// leaves already-expired orders alone.
#[must_use]
pub fn evaluate_escalation(order: &Order, now: DateTime<Utc>) -> Option<OrderStatus> {
    if order.status != OrderStatus::Pending {
        return None;
    }
    let remaining: Duration = deadline(order) - now;
    if remaining >= Duration::zero() && remaining < Duration::hours(CRITICAL_WINDOW_HOURS) {
        return Some(OrderStatus::Urgent);
    }
    None
}
