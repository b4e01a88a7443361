// Copyright (C) 2026 Order Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, Duration, Utc};
use order_desk::{Command, Ledger, apply};
use order_desk_api::CreateOrderRequest;
use order_desk_domain::{OrderStatus, Price};

pub fn create_request(customer_name: &str) -> CreateOrderRequest {
    CreateOrderRequest {
        customer_name: customer_name.to_string(),
        description: String::from("Standard order"),
        price: String::from("100.00"),
        contact: None,
        delivery_date: None,
        status: None,
    }
}

/// Builds a ledger holding one pending order created `hours_ago` before
/// the current wall clock.
pub fn ledger_with_backdated_order(customer_name: &str, hours_ago: i64) -> Ledger {
    let created_at: DateTime<Utc> = Utc::now() - Duration::hours(hours_ago);
    let result = apply(
        &Ledger::new(),
        Command::CreateOrder {
            customer_name: customer_name.to_string(),
            contact: None,
            description: String::from("Standard order"),
            price: Price::from_cents(10_000),
            delivery_date: None,
            status: OrderStatus::Pending,
        },
        created_at,
    )
    .unwrap();
    result.new_ledger
}
