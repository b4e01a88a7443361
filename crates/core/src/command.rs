// Copyright (C) 2026 Order Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;
use order_desk_domain::{Contact, OrderId, OrderStatus, Price};

/// A command represents user intent as data only.
///
/// Commands are the only way to request ledger changes. Field values are
/// already typed and parsed; raw form input is the API layer's problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a new order.
    CreateOrder {
        /// The customer's display name.
        customer_name: String,
        /// Optional contact number.
        contact: Option<Contact>,
        /// Free text or a catalog offering name.
        description: String,
        /// The agreed price.
        price: Price,
        /// Optional promised delivery date.
        delivery_date: Option<NaiveDate>,
        /// Initial status. Defaults to `Pending` at the API boundary.
        status: OrderStatus,
    },
    /// Replace an existing order's status.
    SetStatus {
        /// The order to update.
        id: OrderId,
        /// The new status.
        status: OrderStatus,
    },
}
