// Copyright (C) 2026 Order Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use order_desk::{
    Command, Ledger, LedgerStats, TransitionResult, apply, compute_stats, daily_counts, organize,
};
use order_desk_domain::{
    Contact, Countdown, DomainError, Order, OrderId, OrderStatus, Price, remaining_time,
    validate_required_fields,
};
use order_desk_notices::Notice;

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    CreateOrderRequest, CreateOrderResponse, DailyCountInfo, ListOrdersResponse, MonthGroupInfo,
    OrderInfo, SetOrderStatusRequest, SetOrderStatusResponse, StatsResponse,
};

/// Number of trailing calendar days in the statistics trend.
pub const TREND_DAYS: u32 = 7;

/// Mask shown in place of monetary values when visibility is off.
pub const VALUE_MASK: &str = "••••••";

/// The result of a state-changing API operation.
///
/// Successful operations always carry the notice for the presentation
/// layer alongside the new ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The notice generated by this operation.
    pub notice: Notice,
    /// The new ledger after the operation.
    pub new_ledger: Ledger,
}

/// Creates a new order from raw form input.
///
/// This function:
/// - Checks every required field and reports all empty ones at once
/// - Parses the typed field values (price, contact, status, delivery
///   date)
/// - Applies the create command to the ledger
/// - Translates any errors to API errors
///
/// # Arguments
///
/// * `ledger` - The current ledger
/// * `request` - The form input
/// * `now` - The instant the submission happens at
///
/// # Returns
///
/// * `Ok(ApiResult<CreateOrderResponse>)` on success
/// * `Err(ApiError)` if any field is missing or invalid
///
/// # Errors
///
/// Returns an error if:
/// - Any required field is empty
/// - The price is not a non-negative two-decimal amount
/// - The contact, status, or delivery date fails to parse
pub fn create_order(
    ledger: &Ledger,
    request: CreateOrderRequest,
    now: DateTime<Utc>,
) -> Result<ApiResult<CreateOrderResponse>, ApiError> {
    validate_required_fields(&request.customer_name, &request.description, &request.price)
        .map_err(translate_domain_error)?;

    let price: Price = Price::parse(&request.price).map_err(translate_domain_error)?;

    let contact: Option<Contact> = match normalized(request.contact.as_deref()) {
        Some(raw) => Some(Contact::new(raw).map_err(translate_domain_error)?),
        None => None,
    };

    let status: OrderStatus = match normalized(request.status.as_deref()) {
        Some(raw) => OrderStatus::from_str(raw).map_err(translate_domain_error)?,
        None => OrderStatus::default(),
    };

    let delivery_date: Option<NaiveDate> = match normalized(request.delivery_date.as_deref()) {
        Some(raw) => Some(parse_delivery_date(raw)?),
        None => None,
    };

    let command: Command = Command::CreateOrder {
        customer_name: request.customer_name.trim().to_string(),
        contact,
        description: request.description.trim().to_string(),
        price,
        delivery_date,
        status,
    };

    let result: TransitionResult = apply(ledger, command, now).map_err(translate_core_error)?;

    let response: CreateOrderResponse = CreateOrderResponse {
        order_id: result.order.id.value(),
        customer_name: result.order.customer_name.clone(),
        status: result.order.status.to_string(),
        created_at: result.order.created_at,
        message: format!(
            "Order for {} was added to the ledger.",
            result.order.customer_name
        ),
    };

    Ok(ApiResult {
        response,
        notice: result.notice,
        new_ledger: result.new_ledger,
    })
}

/// Replaces an order's status.
///
/// # Arguments
///
/// * `ledger` - The current ledger
/// * `request` - The status-change control input
/// * `now` - The instant the change happens at
///
/// # Returns
///
/// * `Ok(ApiResult<SetOrderStatusResponse>)` on success
/// * `Err(ApiError)` if the status is invalid or the order is unknown
///
/// # Errors
///
/// Returns an error if:
/// - The status string is not one of the three lifecycle values
/// - No order with the given id exists
pub fn set_order_status(
    ledger: &Ledger,
    request: SetOrderStatusRequest,
    now: DateTime<Utc>,
) -> Result<ApiResult<SetOrderStatusResponse>, ApiError> {
    let status: OrderStatus =
        OrderStatus::from_str(&request.status).map_err(translate_domain_error)?;

    let command: Command = Command::SetStatus {
        id: OrderId::new(request.order_id),
        status,
    };

    let result: TransitionResult = apply(ledger, command, now).map_err(translate_core_error)?;

    let response: SetOrderStatusResponse = SetOrderStatusResponse {
        order_id: result.order.id.value(),
        status: result.order.status.to_string(),
        completed_at: result.order.completed_at,
        message: format!("Status changed to {}.", result.order.status),
    };

    Ok(ApiResult {
        response,
        notice: result.notice,
        new_ledger: result.new_ledger,
    })
}

/// Produces the grouped, sorted order list with countdown values.
///
/// Read-only; the ledger is never modified.
#[must_use]
pub fn list_orders(ledger: &Ledger, now: DateTime<Utc>, show_values: bool) -> ListOrdersResponse {
    let groups: Vec<MonthGroupInfo> = organize(&ledger.orders)
        .into_iter()
        .map(|group| MonthGroupInfo {
            label: group.label,
            orders: group
                .orders
                .iter()
                .map(|order| describe_order(order, now, show_values))
                .collect(),
        })
        .collect();

    ListOrdersResponse { groups }
}

/// Produces the dashboard statistics including the daily trend.
///
/// # Errors
///
/// Returns an error if summing the ledger value overflows.
pub fn get_stats(
    ledger: &Ledger,
    now: DateTime<Utc>,
    show_values: bool,
) -> Result<StatsResponse, ApiError> {
    let stats: LedgerStats = compute_stats(ledger).map_err(translate_core_error)?;
    let trend: Vec<DailyCountInfo> = daily_counts(ledger, now, TREND_DAYS)
        .into_iter()
        .map(|entry| DailyCountInfo {
            day: entry.day,
            count: entry.count,
        })
        .collect();

    Ok(StatsResponse {
        total_count: stats.total_count,
        pending_count: stats.pending_count,
        urgent_count: stats.urgent_count,
        done_count: stats.done_count,
        total_value_display: format_price(stats.total_value, show_values),
        daily_counts: trend,
    })
}

/// Formats a price for display, masking it when values are hidden.
#[must_use]
pub fn format_price(price: Price, show_values: bool) -> String {
    if show_values {
        format!("$ {price}")
    } else {
        String::from(VALUE_MASK)
    }
}

/// Renders one order as its display DTO.
fn describe_order(order: &Order, now: DateTime<Utc>, show_values: bool) -> OrderInfo {
    let countdown: Countdown = remaining_time(order, now);

    OrderInfo {
        order_id: order.id.value(),
        customer_name: order.customer_name.clone(),
        contact: order.contact.as_ref().map(ToString::to_string),
        message_link: order.contact.as_ref().map(Contact::message_link),
        description: order.description.clone(),
        price_display: format_price(order.price, show_values),
        status: order.status.to_string(),
        created_at: order.created_at,
        delivery_date: order.delivery_date,
        completed_at: order.completed_at,
        countdown_text: countdown.text,
        expired: countdown.expired,
        critical: countdown.critical,
    }
}

/// Trims optional form input, mapping empty strings to `None`.
fn normalized(input: Option<&str>) -> Option<&str> {
    input.map(str::trim).filter(|value| !value.is_empty())
}

/// Parses the delivery date form field (ISO 8601 date).
fn parse_delivery_date(raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|err| {
        translate_domain_error(DomainError::InvalidDeliveryDate {
            date_string: raw.to_string(),
            error: err.to_string(),
        })
    })
}
