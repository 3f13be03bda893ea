//! Bill calculation
//!
//! Turns a reading pair and a customer category into a [`ChargeBreakdown`].
//! Pure and synchronous: no I/O, no shared state.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::domain::{
    BillingError, BillingResult, ChargeBreakdown, CustomerCategory, MeterReadings, RateTable,
    StandardRates,
};

/// Electricity duty as a fraction of the energy charge (1.55%)
pub const ELECTRICITY_DUTY_RATE: Decimal = Decimal::from_parts(155, 0, 0, false, 4);

/// Decimal places money amounts are rounded to
pub const MONEY_DP: u32 = 2;

/// Half-way cases round away from zero (16.275 → 16.28).
pub const MONEY_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Electricity duty on an energy charge, rounded to paise. `None` on
/// overflow.
pub fn electricity_duty(energy_charge: Decimal) -> Option<Decimal> {
    ELECTRICITY_DUTY_RATE
        .checked_mul(energy_charge)
        .map(|duty| duty.round_dp_with_strategy(MONEY_DP, MONEY_ROUNDING))
}

/// Tiered bill calculator.
///
/// Category arguments accept either a [`CustomerCategory`] or category text;
/// text that names no category fails with [`BillingError::InvalidCategory`].
/// Consumption too large for any charge to be represented fails with
/// [`BillingError::AmountOverflow`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BillCalculator<R = StandardRates> {
    rates: R,
}

impl BillCalculator {
    /// Calculator over the built-in tariff
    pub fn standard() -> Self {
        Self::new(StandardRates)
    }
}

impl<R: RateTable> BillCalculator<R> {
    pub fn new(rates: R) -> Self {
        Self { rates }
    }

    /// Progressive energy charge for `consumption` units.
    pub fn compute_energy_charge<C>(
        &self,
        consumption: Decimal,
        category: C,
    ) -> BillingResult<Decimal>
    where
        C: TryInto<CustomerCategory>,
        BillingError: From<C::Error>,
    {
        let category: CustomerCategory = category.try_into()?;
        debug_assert!(consumption >= Decimal::ZERO);
        self.rates
            .schedule(category)
            .energy_charge(consumption)
            .ok_or(BillingError::AmountOverflow { consumption })
    }

    /// `(fixed_charge, customer_charge)` for a category.
    pub fn fixed_charges<C>(&self, category: C) -> BillingResult<(Decimal, Decimal)>
    where
        C: TryInto<CustomerCategory>,
        BillingError: From<C::Error>,
    {
        let category: CustomerCategory = category.try_into()?;
        Ok(self.rates.schedule(category).flat_charges())
    }

    /// Full bill for a reading pair.
    ///
    /// The reading order is checked before the category or any rate is
    /// looked at.
    pub fn compute_bill<C>(
        &self,
        previous: Decimal,
        current: Decimal,
        category: C,
    ) -> BillingResult<ChargeBreakdown>
    where
        C: TryInto<CustomerCategory>,
        BillingError: From<C::Error>,
    {
        let readings = MeterReadings::new(previous, current)?;
        let category: CustomerCategory = category.try_into()?;
        self.bill(&readings, category)
    }

    /// Bill for already-validated inputs.
    pub fn bill(
        &self,
        readings: &MeterReadings,
        category: CustomerCategory,
    ) -> BillingResult<ChargeBreakdown> {
        let consumption = readings.consumption();
        let overflow = || BillingError::AmountOverflow { consumption };
        let schedule = self.rates.schedule(category);

        let energy_charge = schedule.energy_charge(consumption).ok_or_else(overflow)?;
        let (fixed_charge, customer_charge) = schedule.flat_charges();
        let duty = electricity_duty(energy_charge).ok_or_else(overflow)?;

        let breakdown = ChargeBreakdown::new(energy_charge, fixed_charge, customer_charge, duty)
            .ok_or_else(overflow)?;
        debug!(
            %category,
            %consumption,
            energy_charge = %breakdown.energy_charge,
            electricity_duty = %breakdown.electricity_duty,
            total = %breakdown.total,
            "bill computed"
        );
        Ok(breakdown)
    }
}

// ── Tests ──────────────────────────────────────────────────────
