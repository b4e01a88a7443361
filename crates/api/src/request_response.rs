// Copyright (C) 2026 Order Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests carry the raw form field strings; responses carry
//! display-ready values. Both are distinct from domain types and
//! represent the boundary contract.

use chrono::{DateTime, NaiveDate, Utc};

/// API request to create a new order from form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOrderRequest {
    /// The customer's name, as typed.
    pub customer_name: String,
    /// The description, as typed or picked from the offering catalog.
    pub description: String,
    /// The price field, as typed (e.g. `"100.00"`).
    pub price: String,
    /// Optional contact number, as typed.
    pub contact: Option<String>,
    /// Optional promised delivery date (ISO 8601 date).
    pub delivery_date: Option<String>,
    /// Optional initial status. Empty or absent means `Pending`.
    pub status: Option<String>,
}

/// API response for a successful order creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateOrderResponse {
    /// The ledger-assigned order id.
    pub order_id: u64,
    /// The customer's name.
    pub customer_name: String,
    /// The initial status.
    pub status: String,
    /// The creation instant.
    pub created_at: DateTime<Utc>,
    /// A success message for the notification collaborator.
    pub message: String,
}

/// API request to replace an order's status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetOrderStatusRequest {
    /// The order to update.
    pub order_id: u64,
    /// The new status value.
    pub status: String,
}

/// API response for a successful status change.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SetOrderStatusResponse {
    /// The updated order's id.
    pub order_id: u64,
    /// The new status.
    pub status: String,
    /// The completion stamp, present exactly while the order is `Done`.
    pub completed_at: Option<DateTime<Utc>>,
    /// A success message for the notification collaborator.
    pub message: String,
}

/// One order, rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OrderInfo {
    /// The order id.
    pub order_id: u64,
    /// The customer's name.
    pub customer_name: String,
    /// The contact in display form (`+<digits>`), when present.
    pub contact: Option<String>,
    /// Deep link to the external messaging service, when a contact
    /// exists.
    pub message_link: Option<String>,
    /// The order description.
    pub description: String,
    /// The price, formatted, or the mask when values are hidden.
    pub price_display: String,
    /// The current status.
    pub status: String,
    /// The creation instant.
    pub created_at: DateTime<Utc>,
    /// The promised delivery date, when one was given.
    pub delivery_date: Option<NaiveDate>,
    /// The completion stamp, when the order is `Done`.
    pub completed_at: Option<DateTime<Utc>>,
    /// Human-readable time remaining before the service deadline.
    pub countdown_text: String,
    /// The service deadline has passed.
    pub expired: bool,
    /// The order is inside the critical window before its deadline.
    pub critical: bool,
}

/// One display group of orders sharing a calendar month.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MonthGroupInfo {
    /// "Month Year" group label.
    pub label: String,
    /// The group's orders, in display order.
    pub orders: Vec<OrderInfo>,
}

/// API response for the grouped order list.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListOrdersResponse {
    /// Display groups in first-appearance order.
    pub groups: Vec<MonthGroupInfo>,
}

/// Order count for one calendar day of the trend window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DailyCountInfo {
    /// The calendar day.
    pub day: NaiveDate,
    /// Orders created that day.
    pub count: usize,
}

/// API response for the dashboard statistics.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatsResponse {
    /// Number of orders in the ledger.
    pub total_count: usize,
    /// Orders currently `Pending`.
    pub pending_count: usize,
    /// Orders currently `Urgent`.
    pub urgent_count: usize,
    /// Orders currently `Done`.
    pub done_count: usize,
    /// The ledger's total value, formatted, or the mask when values are
    /// hidden.
    pub total_value_display: String,
    /// Trend counts for the last [`crate::TREND_DAYS`] days, oldest
    /// first.
    pub daily_counts: Vec<DailyCountInfo>,
}
