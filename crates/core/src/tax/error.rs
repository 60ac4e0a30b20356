//! Tax error types.

use thiserror::Error;

/// Tax-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxError {
    /// Tax code is not in the static rate table.
    #[error("Unknown tax code: {0}")]
    UnknownCode(String),
}
