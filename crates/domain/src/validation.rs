// Copyright (C) 2026 Order Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::order::Order;

/// Validates the required intake fields for a new order.
///
/// Presence only: every violation is collected so the user sees all
/// empty fields at once. Type-level parsing (price format, contact
/// digits, status value) reports its own errors.
///
/// # Errors
///
/// Returns `DomainError::MissingFields` naming every empty required
/// field, in form order.
pub fn validate_required_fields(
    customer_name: &str,
    description: &str,
    price_input: &str,
) -> Result<(), DomainError> {
    let mut missing: Vec<String> = Vec::new();
    if customer_name.trim().is_empty() {
        missing.push(String::from("customer_name"));
    }
    if description.trim().is_empty() {
        missing.push(String::from("description"));
    }
    if price_input.trim().is_empty() {
        missing.push(String::from("price"));
    }
    if missing.is_empty() {
        Ok(())
    } else {
        Err(DomainError::MissingFields { fields: missing })
    }
}

/// Validates a constructed order's field constraints.
///
/// This runs at the transition boundary regardless of where the order
/// came from. Price non-negativity is structural (the type holds
/// unsigned cents), so only the text fields are checked here.
///
/// # Errors
///
/// Returns an error if:
/// - The customer name is empty
/// - The description is empty
pub fn validate_order_fields(order: &Order) -> Result<(), DomainError> {
    // Rule: customer name must not be empty
    if order.customer_name.trim().is_empty() {
        return Err(DomainError::InvalidCustomerName(String::from(
            "Customer name cannot be empty",
        )));
    }

    // Rule: description must not be empty
    if order.description.trim().is_empty() {
        return Err(DomainError::InvalidDescription(String::from(
            "Description cannot be empty",
        )));
    }

    Ok(())
}
