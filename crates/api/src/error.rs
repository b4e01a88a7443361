// Copyright (C) 2026 Order Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use order_desk::CoreError;
use order_desk_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract: everything here is safe to show to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field (or comma-separated fields) that were invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The kind of resource.
        resource_type: String,
        /// A human-readable description.
        message: String,
    },
    /// An internal invariant failed.
    Internal {
        /// A human-readable description.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::MissingFields { fields } => ApiError::InvalidInput {
            field: fields.join(", "),
            message: String::from("Required fields are missing"),
        },
        DomainError::InvalidCustomerName(msg) => ApiError::InvalidInput {
            field: String::from("customer_name"),
            message: msg,
        },
        DomainError::InvalidDescription(msg) => ApiError::InvalidInput {
            field: String::from("description"),
            message: msg,
        },
        DomainError::InvalidPrice(msg) => ApiError::InvalidInput {
            field: String::from("price"),
            message: msg,
        },
        DomainError::InvalidContact(msg) => ApiError::InvalidInput {
            field: String::from("contact"),
            message: msg,
        },
        DomainError::InvalidStatus(value) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("'{value}' is not one of Pending, Urgent, Done"),
        },
        DomainError::InvalidDeliveryDate { date_string, error } => ApiError::InvalidInput {
            field: String::from("delivery_date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::OrderNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Order"),
            message: format!("Order {id} does not exist"),
        },
        DomainError::CompletionStampViolation { .. } | DomainError::PriceOverflow { .. } => {
            ApiError::Internal {
                message: err.to_string(),
            }
        }
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}
