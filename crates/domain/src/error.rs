// Copyright (C) 2026 Order Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more required intake fields are empty.
    MissingFields {
        /// The names of the empty fields, in form order.
        fields: Vec<String>,
    },
    /// Customer name is empty or invalid.
    InvalidCustomerName(String),
    /// Description is empty or invalid.
    InvalidDescription(String),
    /// Price input did not parse to a non-negative amount.
    InvalidPrice(String),
    /// Contact number is invalid after normalization.
    InvalidContact(String),
    /// Status string is not one of the three lifecycle values.
    InvalidStatus(String),
    /// Delivery date string did not parse.
    InvalidDeliveryDate {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// No order with this id exists in the ledger.
    OrderNotFound(u64),
    /// `completed_at` does not agree with the order's status.
    CompletionStampViolation {
        /// The offending order.
        order_id: u64,
        /// Description of the disagreement.
        reason: String,
    },
    /// Price arithmetic overflowed.
    PriceOverflow {
        /// Description of the operation that overflowed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields { fields } => {
                write!(f, "Required fields are missing: {}", fields.join(", "))
            }
            Self::InvalidCustomerName(msg) => write!(f, "Invalid customer name: {msg}"),
            Self::InvalidDescription(msg) => write!(f, "Invalid description: {msg}"),
            Self::InvalidPrice(msg) => write!(f, "Invalid price: {msg}"),
            Self::InvalidContact(msg) => write!(f, "Invalid contact: {msg}"),
            Self::InvalidStatus(s) => {
                write!(f, "Invalid status '{s}': expected Pending, Urgent or Done")
            }
            Self::InvalidDeliveryDate { date_string, error } => {
                write!(f, "Failed to parse delivery date '{date_string}': {error}")
            }
            Self::OrderNotFound(id) => write!(f, "Order {id} not found"),
            Self::CompletionStampViolation { order_id, reason } => {
                write!(f, "Completion stamp violation on order {order_id}: {reason}")
            }
            Self::PriceOverflow { operation } => {
                write!(f, "Price arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
