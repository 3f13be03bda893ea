//! Printed bill
//!
//! Renders a computed bill as the fixed-width text ledger shown to the
//! customer, or as JSON.

use std::fmt::Display;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::application::services::billing::{MONEY_DP, MONEY_ROUNDING};
use crate::config::LedgerConfig;
use crate::domain::{ChargeBreakdown, CustomerCategory, MeterReadings};

/// Width of the label column, colon excluded
const LABEL_WIDTH: usize = 21;

/// Everything printed on one bill
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillStatement {
    pub customer_name: String,
    pub category: CustomerCategory,
    pub readings: MeterReadings,
    pub charges: ChargeBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_date: Option<NaiveDate>,
}

impl BillStatement {
    pub fn new(
        customer_name: impl Into<String>,
        category: CustomerCategory,
        readings: MeterReadings,
        charges: ChargeBreakdown,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            category,
            readings,
            charges,
            bill_date: None,
        }
    }

    pub fn with_bill_date(mut self, date: NaiveDate) -> Self {
        self.bill_date = Some(date);
        self
    }

    /// Plain-text ledger.
    pub fn render_text(&self, style: &LedgerConfig) -> String {
        let header = format!("---------- {} ELECTRICITY BILL ----------", style.provider);
        let rule = "-".repeat(header.chars().count());
        let money = |amount: Decimal| format!("{}{}", style.currency_symbol, format_money(amount));
        let charges = &self.charges;

        let mut lines = vec![
            header,
            field("Customer Name", &self.customer_name),
            field("Customer Type", self.category.label()),
        ];
        if let Some(date) = self.bill_date {
            lines.push(field("Bill Date", date));
        }
        lines.extend([
            field("Previous Reading", self.readings.previous()),
            field("Current Reading", self.readings.current()),
            field("Units Consumed", self.readings.consumption()),
            rule.clone(),
            field("Energy Charges", money(charges.energy_charge)),
            field("Fixed Charges", money(charges.fixed_charge)),
            field("Customer Charges", money(charges.customer_charge)),
            field("Electricity Duty", money(charges.electricity_duty)),
            rule.clone(),
            field("Total Bill Amount", money(charges.total)),
            rule,
        ]);

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    /// Pretty-printed JSON.
    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn field(label: &str, value: impl Display) -> String {
    format!("{:<width$}: {}", label, value, width = LABEL_WIDTH)
}

/// Amount rounded and padded to two decimals, without a symbol.
pub fn format_money(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(MONEY_DP, MONEY_ROUNDING);
    rounded.rescale(MONEY_DP);
    rounded.to_string()
}
