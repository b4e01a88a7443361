// Copyright (C) 2026 Order Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::Price;

/// A fixed offering the intake form can pre-select as the description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offering {
    /// Display name, exactly as it appears in the description field.
    pub name: &'static str,
    /// Suggested price, when the offering has a standard rate.
    pub suggested_price: Option<Price>,
}

/// The fixed catalog of offerings.
///
/// Descriptions are free text; these entries exist so the form can offer
/// a pick list and pre-fill the price field.
pub const OFFERINGS: &[Offering] = &[
    Offering {
        name: "Standard order",
        suggested_price: Some(Price::from_cents(8_000)),
    },
    Offering {
        name: "Express order",
        suggested_price: Some(Price::from_cents(12_000)),
    },
    Offering {
        name: "Custom commission",
        suggested_price: None,
    },
    Offering {
        name: "Repair",
        suggested_price: Some(Price::from_cents(4_500)),
    },
    Offering {
        name: "Consultation",
        suggested_price: Some(Price::from_cents(2_500)),
    },
];

/// Looks up the suggested price for a catalog offering name.
///
/// The lookup is case-insensitive. Free-text descriptions resolve to
/// `None`.
#[must_use]
pub fn suggested_price_for(name: &str) -> Option<Price> {
    OFFERINGS
        .iter()
        .find(|offering| offering.name.eq_ignore_ascii_case(name))
        .and_then(|offering| offering.suggested_price)
}
