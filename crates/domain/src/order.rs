// Copyright (C) 2026 Order Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::contact::Contact;
use crate::error::DomainError;
use crate::types::{OrderId, OrderStatus, Price};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A customer order tracked by the ledger.
///
/// Orders are created only through the validated create command, mutated
/// only by status changes, and never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Ledger-assigned unique identifier.
    pub id: OrderId,
    /// The customer's display name.
    pub customer_name: String,
    /// Optional contact number for the customer.
    pub contact: Option<Contact>,
    /// Free text, or an offering name from the catalog.
    pub description: String,
    /// The agreed price.
    pub price: Price,
    /// Current lifecycle status.
    pub status: OrderStatus,
    /// Creation instant. Never changes after creation.
    pub created_at: DateTime<Utc>,
    /// Set exactly while `status` is `Done`.
    pub completed_at: Option<DateTime<Utc>>,
    /// Optional promised delivery date. Informational only; the
    /// escalation rule never reads it.
    pub delivery_date: Option<NaiveDate>,
}

impl Order {
    /// Creates a new `Order`.
    ///
    /// If the initial status is `Done`, the completion stamp is set to
    /// the creation instant.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: OrderId,
        customer_name: String,
        contact: Option<Contact>,
        description: String,
        price: Price,
        status: OrderStatus,
        created_at: DateTime<Utc>,
        delivery_date: Option<NaiveDate>,
    ) -> Self {
        let completed_at: Option<DateTime<Utc>> = if status.is_done() {
            Some(created_at)
        } else {
            None
        };
        Self {
            id,
            customer_name,
            contact,
            description,
            price,
            status,
            created_at,
            completed_at,
            delivery_date,
        }
    }

    /// Returns a copy of this order with `new_status` applied and the
    /// completion stamp maintained.
    ///
    /// Entering `Done` stamps `completed_at` with `now` unless a stamp is
    /// already present; leaving `Done` clears it.
    #[must_use]
    pub fn with_status(&self, new_status: OrderStatus, now: DateTime<Utc>) -> Self {
        let completed_at: Option<DateTime<Utc>> = if new_status.is_done() {
            self.completed_at.or(Some(now))
        } else {
            None
        };
        Self {
            status: new_status,
            completed_at,
            ..self.clone()
        }
    }

    /// Validates the completion stamp invariant.
    ///
    /// # Invariant
    ///
    /// `completed_at` is present if and only if `status == Done`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CompletionStampViolation` if the stamp and
    /// the status disagree.
    pub fn validate_completion_stamp(&self) -> Result<(), DomainError> {
        match (self.status.is_done(), self.completed_at.is_some()) {
            (true, false) => Err(DomainError::CompletionStampViolation {
                order_id: self.id.value(),
                reason: String::from("Done order has no completion stamp"),
            }),
            (false, true) => Err(DomainError::CompletionStampViolation {
                order_id: self.id.value(),
                reason: String::from("Unfinished order carries a completion stamp"),
            }),
            _ => Ok(()),
        }
    }
}
