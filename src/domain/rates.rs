//! Rate schedules
//!
//! A single constant table per category holds both the tiered energy rates
//! and the flat charges, so the two lookups always read the same source.

use rust_decimal::Decimal;

use super::category::CustomerCategory;

/// Upper bound (inclusive) of tier 1, in units
pub const TIER_1_LIMIT: Decimal = Decimal::from_parts(100, 0, 0, false, 0);
/// Upper bound (inclusive) of tier 2, in units
pub const TIER_2_LIMIT: Decimal = Decimal::from_parts(200, 0, 0, false, 0);

/// Per-category tariff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateSchedule {
    /// Price per unit for tiers 1, 2 and 3
    pub tier_rates: [Decimal; 3],
    /// Flat charge per bill
    pub fixed_charge: Decimal,
    /// Flat customer charge per bill
    pub customer_charge: Decimal,
}

const fn money(minor: u32) -> Decimal {
    Decimal::from_parts(minor, 0, 0, false, 2)
}

static DOMESTIC: RateSchedule = RateSchedule {
    tier_rates: [money(145), money(260), money(360)],
    fixed_charge: money(3000),
    customer_charge: money(9000),
};

static COMMERCIAL: RateSchedule = RateSchedule {
    tier_rates: [money(300), money(450), money(600)],
    fixed_charge: money(10000),
    customer_charge: money(5000),
};

static INDUSTRIAL: RateSchedule = RateSchedule {
    tier_rates: [money(500), money(650), money(750)],
    fixed_charge: money(20000),
    customer_charge: money(10000),
};

impl RateSchedule {
    /// Built-in schedule for a category.
    pub fn standard(category: CustomerCategory) -> &'static RateSchedule {
        match category {
            CustomerCategory::Domestic => &DOMESTIC,
            CustomerCategory::Commercial => &COMMERCIAL,
            CustomerCategory::Industrial => &INDUSTRIAL,
        }
    }

    /// Progressive energy charge for `units` of consumption, or `None` when
    /// the amount does not fit in a [`Decimal`].
    ///
    /// Each tier is billed in full at its own rate up to its boundary; only
    /// the excess above a boundary moves to the next rate.
    pub fn energy_charge(&self, units: Decimal) -> Option<Decimal> {
        let [r1, r2, r3] = self.tier_rates;

        if units <= TIER_1_LIMIT {
            units.checked_mul(r1)
        } else if units <= TIER_2_LIMIT {
            (units - TIER_1_LIMIT).checked_mul(r2)?.checked_add(TIER_1_LIMIT * r1)
        } else {
            let lower_tiers = TIER_1_LIMIT * r1 + (TIER_2_LIMIT - TIER_1_LIMIT) * r2;
            (units - TIER_2_LIMIT).checked_mul(r3)?.checked_add(lower_tiers)
        }
    }

    /// `(fixed_charge, customer_charge)`
    pub fn flat_charges(&self) -> (Decimal, Decimal) {
        (self.fixed_charge, self.customer_charge)
    }
}

/// Source of rate schedules
pub trait RateTable {
    fn schedule(&self, category: CustomerCategory) -> &RateSchedule;
}

/// The hardcoded tariff
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRates;

impl RateTable for StandardRates {
    fn schedule(&self, category: CustomerCategory) -> &RateSchedule {
        RateSchedule::standard(category)
    }
}

// ── Tests ──────────────────────────────────────────────────────
