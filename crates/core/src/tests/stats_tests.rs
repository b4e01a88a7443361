// Copyright (C) 2026 Order Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, Ledger, apply, compute_stats, daily_counts};
use chrono::Duration;
use order_desk_domain::{OrderStatus, Price};

use super::helpers::{create_command, ledger_with_order, session_start};

#[test]
fn test_stats_on_empty_ledger() {
    let stats = compute_stats(&Ledger::new()).unwrap();

    assert_eq!(stats.total_count, 0);
    assert_eq!(stats.pending_count, 0);
    assert_eq!(stats.urgent_count, 0);
    assert_eq!(stats.done_count, 0);
    assert_eq!(stats.total_value, Price::from_cents(0));
}

#[test]
fn test_status_counts_sum_to_total() {
    let mut ledger = Ledger::new();
    ledger = ledger_with_order(&ledger, "A", OrderStatus::Pending, session_start());
    ledger = ledger_with_order(&ledger, "B", OrderStatus::Urgent, session_start());
    ledger = ledger_with_order(&ledger, "C", OrderStatus::Done, session_start());
    ledger = ledger_with_order(&ledger, "D", OrderStatus::Pending, session_start());

    let stats = compute_stats(&ledger).unwrap();

    assert_eq!(stats.total_count, 4);
    assert_eq!(
        stats.pending_count + stats.urgent_count + stats.done_count,
        stats.total_count
    );
    assert_eq!(stats.pending_count, 2);
    assert_eq!(stats.urgent_count, 1);
    assert_eq!(stats.done_count, 1);
}

#[test]
fn test_total_value_includes_done_orders() {
    let mut ledger = Ledger::new();
    let first = apply(
        &ledger,
        create_command("A", 10_050, OrderStatus::Done),
        session_start(),
    )
    .unwrap();
    ledger = first.new_ledger;
    let second = apply(
        &ledger,
        create_command("B", 4_950, OrderStatus::Pending),
        session_start(),
    )
    .unwrap();
    ledger = second.new_ledger;

    let stats = compute_stats(&ledger).unwrap();

    assert_eq!(stats.total_value, Price::from_cents(15_000));
    assert_eq!(stats.total_value.to_string(), "150.00");
}

#[test]
fn test_daily_counts_reports_zero_days() {
    let now = session_start();
    let mut ledger = Ledger::new();
    // Orders on three distinct days within the last seven
    ledger = ledger_with_order(&ledger, "A", OrderStatus::Pending, now - Duration::days(6));
    ledger = ledger_with_order(&ledger, "B", OrderStatus::Pending, now - Duration::days(3));
    ledger = ledger_with_order(&ledger, "C", OrderStatus::Pending, now - Duration::days(3));
    ledger = ledger_with_order(&ledger, "D", OrderStatus::Pending, now);

    let counts = daily_counts(&ledger, now, 7);

    assert_eq!(counts.len(), 7);
    assert_eq!(counts[0].count, 1);
    assert_eq!(counts[1].count, 0);
    assert_eq!(counts[2].count, 0);
    assert_eq!(counts[3].count, 2);
    assert_eq!(counts[4].count, 0);
    assert_eq!(counts[5].count, 0);
    assert_eq!(counts[6].count, 1);
}

#[test]
fn test_daily_counts_runs_oldest_to_newest_and_ends_today() {
    let now = session_start();
    let counts = daily_counts(&Ledger::new(), now, 7);

    assert_eq!(counts.len(), 7);
    assert_eq!(counts[6].day, now.date_naive());
    assert_eq!(counts[0].day, (now - Duration::days(6)).date_naive());
    for pair in counts.windows(2) {
        assert!(pair[0].day < pair[1].day);
    }
}

#[test]
fn test_daily_counts_excludes_orders_outside_range() {
    let now = session_start();
    let ledger = ledger_with_order(
        &Ledger::new(),
        "Old",
        OrderStatus::Done,
        now - Duration::days(10),
    );

    let counts = daily_counts(&ledger, now, 7);

    assert!(counts.iter().all(|entry| entry.count == 0));
}

#[test]
fn test_status_change_does_not_alter_total_value() {
    let ledger = Ledger::new();
    let created = apply(
        &ledger,
        create_command("A", 9_999, OrderStatus::Pending),
        session_start(),
    )
    .unwrap();

    let updated = apply(
        &created.new_ledger,
        Command::SetStatus {
            id: created.order.id,
            status: OrderStatus::Done,
        },
        session_start() + Duration::hours(1),
    )
    .unwrap();

    let stats = compute_stats(&updated.new_ledger).unwrap();
    assert_eq!(stats.total_value, Price::from_cents(9_999));
}
