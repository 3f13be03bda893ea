//! Charge breakdown

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Line items of a computed bill.
///
/// `total` is the exact sum of the four charges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeBreakdown {
    pub energy_charge: Decimal,
    pub fixed_charge: Decimal,
    pub customer_charge: Decimal,
    pub electricity_duty: Decimal,
    pub total: Decimal,
}

impl ChargeBreakdown {
    /// Build a breakdown, deriving `total` from the parts. `None` when the
    /// sum overflows.
    pub fn new(
        energy_charge: Decimal,
        fixed_charge: Decimal,
        customer_charge: Decimal,
        electricity_duty: Decimal,
    ) -> Option<Self> {
        let total = energy_charge
            .checked_add(fixed_charge)?
            .checked_add(customer_charge)?
            .checked_add(electricity_duty)?;

        Some(Self {
            energy_charge,
            fixed_charge,
            customer_charge,
            electricity_duty,
            total,
        })
    }
}
