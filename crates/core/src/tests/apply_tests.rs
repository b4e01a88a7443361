// Copyright (C) 2026 Order Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, CoreError, Ledger, apply};
use chrono::Duration;
use order_desk_domain::{DomainError, OrderId, OrderStatus, Price};
use order_desk_notices::{NoticeKind, NoticeSource};

use super::helpers::{create_command, session_start};

// ============================================================================
// CreateOrder
// ============================================================================

#[test]
fn test_create_order_appends_and_notifies() {
    let ledger = Ledger::new();

    let result = apply(
        &ledger,
        create_command("Alice", 10_000, OrderStatus::Pending),
        session_start(),
    )
    .unwrap();

    assert_eq!(result.new_ledger.orders.len(), 1);
    assert_eq!(result.order.customer_name, "Alice");
    assert_eq!(result.order.created_at, session_start());
    assert_eq!(result.notice.kind, NoticeKind::OrderCreated);
    assert_eq!(result.notice.source, NoticeSource::UserAction);
    // The input ledger is untouched
    assert!(ledger.orders.is_empty());
}

#[test]
fn test_create_order_assigns_unique_monotonic_ids() {
    let mut ledger = Ledger::new();
    let mut seen: Vec<OrderId> = Vec::new();

    for i in 0..5 {
        let result = apply(
            &ledger,
            create_command("Alice", 1_000, OrderStatus::Pending),
            session_start() + Duration::minutes(i),
        )
        .unwrap();
        assert!(!seen.contains(&result.order.id));
        seen.push(result.order.id);
        ledger = result.new_ledger;
    }
}

#[test]
fn test_create_order_rejects_empty_customer_name() {
    let ledger = Ledger::new();
    let command = Command::CreateOrder {
        customer_name: String::new(),
        contact: None,
        description: String::from("Standard order"),
        price: Price::from_cents(1_000),
        delivery_date: None,
        status: OrderStatus::Pending,
    };

    let result = apply(&ledger, command, session_start());

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidCustomerName(_))
    ));
}

#[test]
fn test_failed_create_leaves_no_partial_order() {
    let ledger = Ledger::new();
    let command = Command::CreateOrder {
        customer_name: String::from("Alice"),
        contact: None,
        description: String::new(),
        price: Price::from_cents(1_000),
        delivery_date: None,
        status: OrderStatus::Pending,
    };

    let result = apply(&ledger, command, session_start());

    assert!(result.is_err());
    assert!(ledger.orders.is_empty());
}

#[test]
fn test_create_order_with_done_status_is_stamped() {
    let ledger = Ledger::new();

    let result = apply(
        &ledger,
        create_command("Alice", 10_000, OrderStatus::Done),
        session_start(),
    )
    .unwrap();

    assert_eq!(result.order.completed_at, Some(session_start()));
}

// ============================================================================
// SetStatus
// ============================================================================

#[test]
fn test_set_status_replaces_status_and_notifies() {
    let ledger = Ledger::new();
    let created = apply(
        &ledger,
        create_command("Alice", 10_000, OrderStatus::Pending),
        session_start(),
    )
    .unwrap();

    let later = session_start() + Duration::hours(2);
    let result = apply(
        &created.new_ledger,
        Command::SetStatus {
            id: created.order.id,
            status: OrderStatus::Urgent,
        },
        later,
    )
    .unwrap();

    assert_eq!(result.order.status, OrderStatus::Urgent);
    assert_eq!(result.notice.kind, NoticeKind::StatusChanged);
    assert_eq!(result.new_ledger.orders.len(), 1);
}

#[test]
fn test_set_status_done_stamps_completion() {
    let ledger = Ledger::new();
    let created = apply(
        &ledger,
        create_command("Alice", 10_000, OrderStatus::Pending),
        session_start(),
    )
    .unwrap();

    let later = session_start() + Duration::hours(2);
    let result = apply(
        &created.new_ledger,
        Command::SetStatus {
            id: created.order.id,
            status: OrderStatus::Done,
        },
        later,
    )
    .unwrap();

    assert_eq!(result.order.completed_at, Some(later));
}

#[test]
fn test_set_status_unknown_id_is_not_found() {
    let ledger = Ledger::new();

    let result = apply(
        &ledger,
        Command::SetStatus {
            id: OrderId::new(99),
            status: OrderStatus::Done,
        },
        session_start(),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::OrderNotFound(99))
    ));
}

#[test]
fn test_set_status_preserves_creation_instant() {
    let ledger = Ledger::new();
    let created = apply(
        &ledger,
        create_command("Alice", 10_000, OrderStatus::Pending),
        session_start(),
    )
    .unwrap();

    let later = session_start() + Duration::hours(30);
    let result = apply(
        &created.new_ledger,
        Command::SetStatus {
            id: created.order.id,
            status: OrderStatus::Done,
        },
        later,
    )
    .unwrap();

    assert_eq!(result.order.created_at, session_start());
}
