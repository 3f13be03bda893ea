//! Presentation of computed bills

pub mod ledger;

pub use ledger::{format_money, BillStatement};
