// Copyright (C) 2026 Order Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// A customer contact number, normalized to bare digits.
///
/// Normalization strips every non-digit character, so `"+1 (555) 010-2345"`
/// and `"15550102345"` are the same contact. The digit form feeds the
/// messaging deep link; the display form prefixes a `+`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contact {
    digits: String,
}

impl Contact {
    /// Creates a new `Contact` from raw form input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input does not contain between 8 and 15
    /// digits after normalization.
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if !(8..=15).contains(&digits.len()) {
            return Err(DomainError::InvalidContact(format!(
                "Expected 8 to 15 digits, got {}",
                digits.len()
            )));
        }
        Ok(Self { digits })
    }

    /// Returns the normalized digits.
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Builds the deep link to the external messaging service for this
    /// contact.
    ///
    /// This is pure string construction; nothing is sent anywhere.
    #[must_use]
    pub fn message_link(&self) -> String {
        format!("https://wa.me/{}", self.digits)
    }
}

impl std::fmt::Display for Contact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "+{}", self.digits)
    }
}
