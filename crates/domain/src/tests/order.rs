// Copyright (C) 2026 Order Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::order::Order;
use crate::types::{OrderId, OrderStatus, Price};
use chrono::{DateTime, TimeZone, Utc};

fn creation_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap()
}

fn pending_order() -> Order {
    Order::new(
        OrderId::new(1),
        String::from("Alice"),
        None,
        String::from("Standard order"),
        Price::from_cents(10_000),
        OrderStatus::Pending,
        creation_instant(),
        None,
    )
}

#[test]
fn test_new_pending_order_has_no_completion_stamp() {
    let order = pending_order();

    assert_eq!(order.completed_at, None);
    assert!(order.validate_completion_stamp().is_ok());
}

#[test]
fn test_new_done_order_is_stamped_at_creation() {
    let order = Order::new(
        OrderId::new(2),
        String::from("Bob"),
        None,
        String::from("Repair"),
        Price::from_cents(4_500),
        OrderStatus::Done,
        creation_instant(),
        None,
    );

    assert_eq!(order.completed_at, Some(creation_instant()));
    assert!(order.validate_completion_stamp().is_ok());
}

#[test]
fn test_entering_done_stamps_completion() {
    let order = pending_order();
    let later = creation_instant() + chrono::Duration::hours(5);

    let done = order.with_status(OrderStatus::Done, later);

    assert_eq!(done.status, OrderStatus::Done);
    assert_eq!(done.completed_at, Some(later));
    assert!(done.validate_completion_stamp().is_ok());
}

#[test]
fn test_entering_done_keeps_existing_stamp() {
    let order = pending_order();
    let first = creation_instant() + chrono::Duration::hours(5);
    let second = creation_instant() + chrono::Duration::hours(9);

    let done = order.with_status(OrderStatus::Done, first);
    let still_done = done.with_status(OrderStatus::Done, second);

    assert_eq!(still_done.completed_at, Some(first));
}

#[test]
fn test_leaving_done_clears_completion_stamp() {
    let order = pending_order();
    let later = creation_instant() + chrono::Duration::hours(5);

    let done = order.with_status(OrderStatus::Done, later);
    let reopened = done.with_status(OrderStatus::Pending, later + chrono::Duration::hours(1));

    assert_eq!(reopened.status, OrderStatus::Pending);
    assert_eq!(reopened.completed_at, None);
    assert!(reopened.validate_completion_stamp().is_ok());
}

#[test]
fn test_status_change_preserves_creation_instant() {
    let order = pending_order();
    let later = creation_instant() + chrono::Duration::hours(5);

    let urgent = order.with_status(OrderStatus::Urgent, later);

    assert_eq!(urgent.created_at, order.created_at);
    assert_eq!(urgent.id, order.id);
    assert_eq!(urgent.price, order.price);
}
