// Copyright (C) 2026 Order Desk contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Runtime errors for the session engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The clock ticker terminated abnormally instead of being
    /// cancelled.
    #[error("Clock ticker task failed: {reason}")]
    TickerFailed {
        /// Description of the failure.
        reason: String,
    },
}
