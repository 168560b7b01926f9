//! Supported currencies and their display symbols

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

/// A currency the ledger can be displayed in
///
/// Amounts are never converted; the currency only controls the symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Inr,
    Jpy,
    Cny,
    Aud,
    Cad,
}

impl Currency {
    /// Every supported currency, in display order
    pub const ALL: [Currency; 8] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Inr,
        Currency::Jpy,
        Currency::Cny,
        Currency::Aud,
        Currency::Cad,
    ];

    /// ISO 4217 code
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Inr => "INR",
            Currency::Jpy => "JPY",
            Currency::Cny => "CNY",
            Currency::Aud => "AUD",
            Currency::Cad => "CAD",
        }
    }

    pub const fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Inr => "₹",
            Currency::Jpy | Currency::Cny => "¥",
            Currency::Aud => "A$",
            Currency::Cad => "C$",
        }
    }

    /// Badge shown next to totals, e.g. "€ EUR"
    pub fn badge(&self) -> String {
        format!("{} {}", self.symbol(), self.code())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Currency::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| {
                TrackerError::Validation(format!(
                    "Unknown currency code '{}'. Supported: {}",
                    s.trim(),
                    Currency::ALL.map(|c| c.code()).join(", ")
                ))
            })
    }
}
