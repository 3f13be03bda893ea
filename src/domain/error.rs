//! Domain errors

use std::convert::Infallible;

use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons a bill cannot be computed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillingError {
    /// Category text is not domestic, commercial or industrial
    #[error("Invalid customer type: {0}")]
    InvalidCategory(String),

    /// Current reading is below the previous one
    #[error("Current reading {current} is less than previous reading {previous}")]
    InvalidReadingOrder { previous: Decimal, current: Decimal },

    /// A charge for this consumption does not fit in a `Decimal`
    #[error("Charges for {consumption} units exceed the largest representable amount")]
    AmountOverflow { consumption: Decimal },
}

// An already-typed `CustomerCategory` converts with `Infallible`; this lets it
// share the generic category parameter with string input.
impl From<Infallible> for BillingError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Result type for billing operations
pub type BillingResult<T> = Result<T, BillingError>;
