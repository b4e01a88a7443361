// Copyright (C) 2026 Order Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Ledger, TransitionResult};
use chrono::{DateTime, Utc};
use order_desk_domain::{DomainError, Order, OrderId, validate_order_fields};
use order_desk_notices::Notice;

/// Applies a command to the current ledger, producing a new ledger, the
/// affected order, and the notice for the presentation layer.
///
/// The caller supplies `now` so that transitions are deterministic and a
/// whole tick shares one time snapshot.
///
/// # Arguments
///
/// * `ledger` - The current ledger (immutable)
/// * `command` - The command to apply
/// * `now` - The instant the transition happens at
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new ledger, order, and notice
/// * `Err(CoreError)` if the command violates a domain rule
///
/// # Errors
///
/// Returns an error if:
/// - A required order field is empty
/// - The completion stamp invariant would be violated
/// - `SetStatus` names an id that does not exist
pub fn apply(
    ledger: &Ledger,
    command: Command,
    now: DateTime<Utc>,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::CreateOrder {
            customer_name,
            contact,
            description,
            price,
            delivery_date,
            status,
        } => {
            let mut new_ledger: Ledger = ledger.clone();
            let id: OrderId = new_ledger.allocate_id();

            let order: Order = Order::new(
                id,
                customer_name,
                contact,
                description,
                price,
                status,
                now,
                delivery_date,
            );

            // Validate field constraints before the order enters the ledger
            validate_order_fields(&order)?;
            order.validate_completion_stamp()?;

            let notice: Notice = Notice::order_created(&order.customer_name);
            new_ledger.orders.push(order.clone());

            Ok(TransitionResult {
                new_ledger,
                order,
                notice,
            })
        }
        Command::SetStatus { id, status } => {
            let Some(position) = ledger.orders.iter().position(|order| order.id == id) else {
                return Err(CoreError::DomainViolation(DomainError::OrderNotFound(
                    id.value(),
                )));
            };

            let updated: Order = ledger.orders[position].with_status(status, now);
            updated.validate_completion_stamp()?;

            let mut new_ledger: Ledger = ledger.clone();
            new_ledger.orders[position] = updated.clone();

            let notice: Notice = Notice::status_changed(id.value(), status.as_str());

            Ok(TransitionResult {
                new_ledger,
                order: updated,
                notice,
            })
        }
    }
}
