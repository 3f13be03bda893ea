//! Customer category
//!
//! Every rate lookup is keyed by this closed set. Free-form text only enters
//! through [`FromStr`], which is where an unknown category is rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::BillingError;

/// Tariff category of a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerCategory {
    Domestic,
    Commercial,
    Industrial,
}

impl CustomerCategory {
    /// All categories, in tariff order.
    pub const ALL: &'static [CustomerCategory] =
        &[Self::Domestic, Self::Commercial, Self::Industrial];

    /// Canonical lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Domestic => "domestic",
            Self::Commercial => "commercial",
            Self::Industrial => "industrial",
        }
    }

    /// Capitalised form used on printed bills.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Domestic => "Domestic",
            Self::Commercial => "Commercial",
            Self::Industrial => "Industrial",
        }
    }
}

impl fmt::Display for CustomerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CustomerCategory {
    type Err = BillingError;

    /// Case-insensitive, ignores surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| BillingError::InvalidCategory(wanted.to_string()))
    }
}

impl TryFrom<&str> for CustomerCategory {
    type Error = BillingError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for CustomerCategory {
    type Error = BillingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ── Tests ──────────────────────────────────────────────────────
