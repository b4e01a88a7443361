// Copyright (C) 2026 Order Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use order_desk_domain::{Order, OrderId};
use order_desk_notices::Notice;
use serde::{Deserialize, Serialize};

/// The in-memory collection of all orders for one session.
///
/// The ledger starts empty, is mutated only through [`crate::apply`] and
/// [`crate::run_escalation`], and is discarded at session end. Orders
/// are kept in creation order; display ordering is a separate
/// projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    /// All orders, in creation order.
    pub orders: Vec<Order>,
    /// Next id to assign. Monotonic for the session lifetime.
    next_id: u64,
}

impl Ledger {
    /// Creates a new empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            orders: Vec::new(),
            next_id: 1,
        }
    }

    /// Looks up an order by id.
    #[must_use]
    pub fn find(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// Checks whether an order with this id exists.
    #[must_use]
    pub fn has_order(&self, id: OrderId) -> bool {
        self.find(id).is_some()
    }

    /// Hands out the next order id.
    ///
    /// Ids are never reused, even across failed transitions on clones of
    /// this ledger.
    pub(crate) const fn allocate_id(&mut self) -> OrderId {
        let id: OrderId = OrderId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

/// The result of a successful ledger transition.
///
/// Transitions are atomic: they either succeed completely or fail
/// without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The ledger after the transition.
    pub new_ledger: Ledger,
    /// The order created or updated by the transition.
    pub order: Order,
    /// The notice describing the transition for the presentation layer.
    pub notice: Notice,
}
