// Copyright (C) 2026 Order Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents the lifecycle status of an order.
///
/// The three statuses are mutually exclusive; there are no sub-states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Waiting to be worked. Subject to automatic escalation.
    #[default]
    Pending,
    /// Inside the critical window before the service deadline, or
    /// manually flagged by the user.
    Urgent,
    /// Work finished. Never touched by the escalation rule.
    Done,
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Urgent" => Ok(Self::Urgent),
            "Done" => Ok(Self::Done),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl OrderStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Urgent => "Urgent",
            Self::Done => "Done",
        }
    }

    /// Returns whether this status marks finished work.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Unique identifier for an order within a session ledger.
///
/// Ids are assigned monotonically by the ledger and are never reused
/// for the lifetime of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(u64);

impl OrderId {
    /// Creates an `OrderId` from its numeric value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An exact, non-negative monetary amount in a two-decimal currency unit.
///
/// Stored as integer cents so sums over the ledger never lose precision.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct Price {
    cents: u64,
}

impl Price {
    /// Creates a `Price` from integer cents.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Returns the amount in integer cents.
    #[must_use]
    pub const fn cents(&self) -> u64 {
        self.cents
    }

    /// Parses a price from form input.
    ///
    /// Accepts whole amounts (`"100"`) and up to two decimal places
    /// (`"100.5"`, `"100.50"`).
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, negative, has more than
    /// two decimal places, is not numeric, or overflows.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed: &str = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidPrice(String::from(
                "Price cannot be empty",
            )));
        }
        if trimmed.starts_with('-') {
            return Err(DomainError::InvalidPrice(String::from(
                "Price cannot be negative",
            )));
        }

        let (whole, frac): (&str, &str) = match trimmed.split_once('.') {
            Some((w, f)) => (w, f),
            None => (trimmed, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(DomainError::InvalidPrice(format!(
                "Not a valid amount: '{trimmed}'"
            )));
        }

        let whole_value: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| {
                DomainError::InvalidPrice(format!("Not a valid amount: '{trimmed}'"))
            })?
        };

        let frac_cents: u64 = match frac.len() {
            0 => 0,
            1 => {
                frac.parse::<u64>().map_err(|_| {
                    DomainError::InvalidPrice(format!("Not a valid amount: '{trimmed}'"))
                })? * 10
            }
            2 => frac.parse::<u64>().map_err(|_| {
                DomainError::InvalidPrice(format!("Not a valid amount: '{trimmed}'"))
            })?,
            _ => {
                return Err(DomainError::InvalidPrice(String::from(
                    "Price supports at most two decimal places",
                )));
            }
        };

        let cents: u64 = whole_value
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .ok_or_else(|| {
                DomainError::PriceOverflow {
                    operation: format!("parsing '{trimmed}'"),
                }
            })?;

        Ok(Self { cents })
    }

    /// Adds two prices, reporting overflow instead of wrapping.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.cents.checked_add(other.cents) {
            Some(cents) => Some(Self { cents }),
            None => None,
        }
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}
