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
    clippy::all
)]

use serde::{Deserialize, Serialize};

/// Where a notice originated.
///
/// The presentation layer renders scheduler notices differently from
/// direct user feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeSource {
    /// A direct user action (form submission, status control).
    UserAction,
    /// The periodic clock/escalation tick.
    Scheduler,
}

/// What a notice reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// A new order entered the ledger.
    OrderCreated,
    /// An order's status was replaced by the user.
    StatusChanged,
    /// The escalation rule raised an order to urgent.
    OrderEscalated,
}

/// A user-facing notification produced by a state transition.
///
/// Every successful transition produces exactly one notice. Notices are
/// immutable facts about what changed; they are informational only and
/// never authoritative. The ledger remains the source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// What happened.
    pub kind: NoticeKind,
    /// Who triggered it.
    pub source: NoticeSource,
    /// Short headline for the notification.
    pub title: String,
    /// Longer human-readable detail line.
    pub body: String,
}

impl Notice {
    /// Builds the notice for a newly created order.
    #[must_use]
    pub fn order_created(customer_name: &str) -> Self {
        Self {
            kind: NoticeKind::OrderCreated,
            source: NoticeSource::UserAction,
            title: String::from("Order created"),
            body: format!("Order for {customer_name} was added to the ledger."),
        }
    }

    /// Builds the notice for a user-driven status change.
    #[must_use]
    pub fn status_changed(order_id: u64, status: &str) -> Self {
        Self {
            kind: NoticeKind::StatusChanged,
            source: NoticeSource::UserAction,
            title: String::from("Status updated"),
            body: format!("Order {order_id} is now {status}."),
        }
    }

    /// Builds the notice for an automatic escalation.
    #[must_use]
    pub fn order_escalated(order_id: u64, customer_name: &str) -> Self {
        Self {
            kind: NoticeKind::OrderEscalated,
            source: NoticeSource::Scheduler,
            title: String::from("Order escalated"),
            body: format!("Order {order_id} for {customer_name} is close to its deadline."),
        }
    }
}
