// Copyright (C) 2026 Order Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::request_response::CreateOrderRequest;
use chrono::{DateTime, TimeZone, Utc};
use order_desk::Ledger;

/// A fixed session start: Monday 2026-03-02, 08:00 UTC.
pub fn session_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap()
}

pub fn create_request(customer_name: &str, description: &str, price: &str) -> CreateOrderRequest {
    CreateOrderRequest {
        customer_name: customer_name.to_string(),
        description: description.to_string(),
        price: price.to_string(),
        contact: None,
        delivery_date: None,
        status: None,
    }
}

/// Creates one order at `session_start()` and returns the grown ledger
/// with the new order's id.
pub fn ledger_with_one_order(customer_name: &str) -> (Ledger, u64) {
    let result = crate::create_order(
        &Ledger::new(),
        create_request(customer_name, "Standard order", "100.00"),
        session_start(),
    )
    .unwrap();
    let id = result.response.order_id;
    (result.new_ledger, id)
}
