//! Meter readings

use rust_decimal::Decimal;
use serde::Serialize;

use super::error::{BillingError, BillingResult};

/// Previous/current register values for one billing period.
///
/// Construction enforces `current >= previous`, so [`consumption`] is never
/// negative.
///
/// [`consumption`]: MeterReadings::consumption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MeterReadings {
    previous: Decimal,
    current: Decimal,
}

impl MeterReadings {
    pub fn new(previous: Decimal, current: Decimal) -> BillingResult<Self> {
        if current < previous {
            return Err(BillingError::InvalidReadingOrder { previous, current });
        }
        Ok(Self { previous, current })
    }

    pub fn previous(&self) -> Decimal {
        self.previous
    }

    pub fn current(&self) -> Decimal {
        self.current
    }

    /// Billed units
    pub fn consumption(&self) -> Decimal {
        self.current - self.previous
    }
}
