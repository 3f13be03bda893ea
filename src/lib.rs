//! # Power Bill
//!
//! Tiered electricity bill calculation for domestic, commercial and
//! industrial connections.
//!
//! ## Architecture
//!
//! - **domain**: categories, rate schedules, readings, charge breakdown, errors
//! - **application**: the bill calculator
//! - **interfaces**: text and JSON rendering of a bill
//! - **support**: logging setup
//!
//! ```
//! use power_bill::{BillCalculator, CustomerCategory};
//! use rust_decimal::Decimal;
//!
//! let bill = BillCalculator::standard()
//!     .compute_bill(Decimal::from(100), Decimal::from(150), CustomerCategory::Domestic)
//!     .unwrap();
//! assert_eq!(bill.total, Decimal::new(19362, 2));
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod interfaces;
pub mod support;

pub use config::{default_config_path, AppConfig, ConfigError, LedgerConfig, LoggingConfig};

pub use application::{electricity_duty, BillCalculator, ELECTRICITY_DUTY_RATE};
pub use domain::{
    BillingError, BillingResult, ChargeBreakdown, CustomerCategory, MeterReadings, RateSchedule,
    RateTable, StandardRates,
};
pub use interfaces::{format_money, BillStatement};
pub use support::telemetry::init_tracing;
