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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

//! Text dashboard driver for Order Desk.
//!
//! Stands in for the presentation layer: seeds a demo session, runs the
//! clock/escalation ticker for a few periods, then renders the grouped
//! order list and statistics as text or JSON and shuts down cleanly.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use clap::Parser;
use order_desk::{Command, Ledger, apply};
use order_desk_api::{CreateOrderRequest, ListOrdersResponse, StatsResponse};
use order_desk_domain::{Contact, OrderStatus, Price};
use order_desk_engine::{Engine, TickerHandle};
use std::time::Duration;
use tracing::info;

/// Order Desk console - dashboard driver for the order ledger
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Milliseconds between clock/escalation ticks
    #[arg(short, long, default_value_t = 1000)]
    tick_millis: u64,

    /// Number of tick periods to observe before rendering
    #[arg(short = 'n', long, default_value_t = 3)]
    ticks: u64,

    /// Emit the dashboard as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Start with monetary values hidden
    #[arg(long)]
    hide_values: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Order Desk console");

    let engine: Engine = Engine::with_ledger(seed_demo_ledger()?);
    if args.hide_values {
        engine.toggle_value_visibility();
    }

    // Relay notices to the log the way a UI would raise toasts
    let mut notices = engine.subscribe();
    let notice_task = tokio::spawn(async move {
        while let Ok(notice) = notices.recv().await {
            info!(kind = ?notice.kind, source = ?notice.source, "{}: {}", notice.title, notice.body);
        }
    });

    // One order arrives through the form boundary while the session runs
    let created = engine
        .create_order(CreateOrderRequest {
            customer_name: String::from("Walk-in customer"),
            description: String::from("Consultation"),
            price: String::from("25.00"),
            contact: None,
            delivery_date: None,
            status: None,
        })
        .await?;
    info!(order_id = created.order_id, "Created order via form boundary");

    let period: Duration = Duration::from_millis(args.tick_millis);
    let ticker: TickerHandle = engine.start_ticker(period);
    info!(
        tick_millis = args.tick_millis,
        ticks = args.ticks,
        "Ticker running"
    );

    tokio::time::sleep(period * u32::try_from(args.ticks)?).await;

    let stats: StatsResponse = engine.stats().await?;
    let view: ListOrdersResponse = engine.list_orders().await;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "stats": stats,
                "orders": view,
            }))?
        );
    } else {
        render_text(&stats, &view);
    }

    ticker.shutdown().await?;
    drop(engine);
    notice_task.await?;
    info!("Session closed");

    Ok(())
}

/// Seeds a ledger with two backdated demo orders: one close to its
/// deadline, one already past it.
fn seed_demo_ledger() -> Result<Ledger, Box<dyn std::error::Error>> {
    let now: DateTime<Utc> = Utc::now();
    let mut ledger: Ledger = Ledger::new();

    let seeds: Vec<(Command, DateTime<Utc>)> = vec![
        (
            Command::CreateOrder {
                customer_name: String::from("Marina Duarte"),
                contact: Some(Contact::new("+55 11 98765-4321")?),
                description: String::from("Custom commission"),
                price: Price::parse("350.00")?,
                delivery_date: Some((now + ChronoDuration::days(3)).date_naive()),
                status: OrderStatus::Pending,
            },
            now - ChronoDuration::hours(47),
        ),
        (
            Command::CreateOrder {
                customer_name: String::from("Otto Keller"),
                contact: None,
                description: String::from("Repair"),
                price: Price::from_cents(4_500),
                delivery_date: None,
                status: OrderStatus::Pending,
            },
            now - ChronoDuration::hours(50),
        ),
    ];

    for (command, created_at) in seeds {
        ledger = apply(&ledger, command, created_at)?.new_ledger;
    }

    Ok(ledger)
}

/// Renders the dashboard as plain text.
fn render_text(stats: &StatsResponse, view: &ListOrdersResponse) {
    println!(
        "Orders: {} total | {} pending | {} urgent | {} done",
        stats.total_count, stats.pending_count, stats.urgent_count, stats.done_count
    );
    println!("Total value: {}", stats.total_value_display);

    print!("Last 7 days:");
    for entry in &stats.daily_counts {
        print!(" {}", entry.count);
    }
    println!();

    for group in &view.groups {
        println!("\n== {} ==", group.label);
        for order in &group.orders {
            println!(
                "  #{} {} [{}] {} | {}",
                order.order_id,
                order.customer_name,
                order.status,
                order.price_display,
                order.countdown_text
            );
            if let Some(link) = &order.message_link {
                println!("      contact: {link}");
            }
        }
    }

    if view.groups.is_empty() {
        println!("\nNo orders recorded yet");
    }
}
