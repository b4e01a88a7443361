// Copyright (C) 2026 Order Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The grouped, sorted display projection.
//!
//! A pure transform over an immutable ledger snapshot: sort by status
//! and age, then bucket by the calendar month of creation. The ledger
//! itself is never reordered.

use chrono::{DateTime, Utc};
use order_desk_domain::Order;
use std::cmp::Ordering;

/// One display group: the orders of a single calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGroup {
    /// "Month Year" label, e.g. `"March 2026"`.
    pub label: String,
    /// The month's orders, in display order.
    pub orders: Vec<Order>,
}

/// Total display ordering over two orders.
///
/// Finished orders sink below everything else. Unfinished orders rise by
/// age (oldest first, so the order closest to breaching its deadline is
/// at the top); finished orders list most-recently-created first. Ties
/// fall back to id so the ordering is total and stable across refreshes.
#[must_use]
pub fn display_ordering(a: &Order, b: &Order) -> Ordering {
    match (a.status.is_done(), b.status.is_done()) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)),
        (true, true) => b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)),
    }
}

/// Sorts a ledger snapshot and groups it by calendar month of creation.
///
/// Groups appear in first-appearance order of the sorted sequence, and
/// each group preserves the sorted order of its members. A month can
/// therefore appear once even when its orders are split between the
/// unfinished and finished halves of the sequence.
#[must_use]
pub fn organize(orders: &[Order]) -> Vec<MonthGroup> {
    let mut sorted: Vec<Order> = orders.to_vec();
    sorted.sort_by(display_ordering);

    let mut groups: Vec<MonthGroup> = Vec::new();
    for order in sorted {
        let label: String = month_label(order.created_at);
        if let Some(group) = groups.iter_mut().find(|group| group.label == label) {
            group.orders.push(order);
        } else {
            groups.push(MonthGroup {
                label,
                orders: vec![order],
            });
        }
    }
    groups
}

/// Formats the month-year group label for an instant.
fn month_label(instant: DateTime<Utc>) -> String {
    instant.format("%B %Y").to_string()
}
