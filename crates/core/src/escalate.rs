// Copyright (C) 2026 Order Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::Ledger;
use chrono::{DateTime, Utc};
use order_desk_domain::{OrderId, evaluate_escalation};
use order_desk_notices::Notice;

/// The result of one escalation sweep over the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscalationResult {
    /// The ledger after the sweep.
    pub new_ledger: Ledger,
    /// Ids of the orders escalated in this sweep, in ledger order.
    pub escalated: Vec<OrderId>,
    /// One notice per escalated order.
    pub notices: Vec<Notice>,
}

/// Runs the automatic escalation rule over the whole ledger.
///
/// Every order is evaluated against the same `now` snapshot, never a
/// per-order timestamp. The sweep is idempotent: applying it twice at
/// the same instant leaves the ledger unchanged the second time, and a
/// later sweep never reverts an earlier escalation.
#[must_use]
pub fn run_escalation(ledger: &Ledger, now: DateTime<Utc>) -> EscalationResult {
    let mut new_ledger: Ledger = ledger.clone();
    let mut escalated: Vec<OrderId> = Vec::new();
    let mut notices: Vec<Notice> = Vec::new();

    for order in &mut new_ledger.orders {
        if let Some(status) = evaluate_escalation(order, now) {
            *order = order.with_status(status, now);
            escalated.push(order.id);
            notices.push(Notice::order_escalated(order.id.value(), &order.customer_name));
        }
    }

    EscalationResult {
        new_ledger,
        escalated,
        notices,
    }
}
