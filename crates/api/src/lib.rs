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

//! The form-submission boundary of Order Desk.
//!
//! Requests carry raw form strings; handlers parse them into domain
//! types, run ledger commands, and translate every lower-layer error
//! into an [`ApiError`] the presentation layer can surface directly.

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    ApiResult, TREND_DAYS, VALUE_MASK, create_order, format_price, get_stats, list_orders,
    set_order_status,
};
pub use request_response::{
    CreateOrderRequest, CreateOrderResponse, DailyCountInfo, ListOrdersResponse, MonthGroupInfo,
    OrderInfo, SetOrderStatusRequest, SetOrderStatusResponse, StatsResponse,
};
