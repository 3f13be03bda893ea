//! Billing domain
//!
//! Categories, rate schedules, readings and the charge breakdown. Everything
//! here is plain data plus pure functions.

pub mod bill;
pub mod category;
pub mod error;
pub mod rates;
pub mod reading;

pub use bill::ChargeBreakdown;
pub use category::CustomerCategory;
pub use error::{BillingError, BillingResult};
pub use rates::{RateSchedule, RateTable, StandardRates, TIER_1_LIMIT, TIER_2_LIMIT};
pub use reading::MeterReadings;
