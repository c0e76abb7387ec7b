// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Error type for the checked random helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RandomError {
    /// The half-open range `[min, max)` contains no values.
    #[error("empty range: [{min}, {max})")]
    EmptyRange {
        /// Requested lower bound (inclusive).
        min: i32,
        /// Requested upper bound (exclusive).
        max: i32,
    },
}
