// Copyright (C) 2026 Order Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, Ledger, TransitionResult, apply};
use chrono::{DateTime, TimeZone, Utc};
use order_desk_domain::{OrderStatus, Price};

/// A fixed session start: Monday 2026-03-02, 08:00 UTC.
pub fn session_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap()
}

pub fn create_command(customer_name: &str, price_cents: u64, status: OrderStatus) -> Command {
    Command::CreateOrder {
        customer_name: customer_name.to_string(),
        contact: None,
        description: String::from("Standard order"),
        price: Price::from_cents(price_cents),
        delivery_date: None,
        status,
    }
}

/// Creates an order at `created_at` and returns the grown ledger.
pub fn ledger_with_order(
    ledger: &Ledger,
    customer_name: &str,
    status: OrderStatus,
    created_at: DateTime<Utc>,
) -> Ledger {
    let result: TransitionResult = apply(
        ledger,
        create_command(customer_name, 10_000, status),
        created_at,
    )
    .unwrap();
    result.new_ledger
}
