//! Application services

pub mod billing;

pub use billing::{electricity_duty, BillCalculator, ELECTRICITY_DUTY_RATE};
