pub mod services;

// Re-export key types for convenience
pub use services::{electricity_duty, BillCalculator, ELECTRICITY_DUTY_RATE};
