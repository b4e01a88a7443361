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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod catalog;
mod contact;
mod countdown;
mod error;
mod order;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{OFFERINGS, Offering, suggested_price_for};
pub use contact::Contact;
pub use countdown::{
    CRITICAL_WINDOW_HOURS, Countdown, SLA_HOURS, deadline, evaluate_escalation, remaining_time,
};
pub use error::DomainError;
pub use order::Order;
pub use types::{OrderId, OrderStatus, Price};
pub use validation::{validate_order_fields, validate_required_fields};
