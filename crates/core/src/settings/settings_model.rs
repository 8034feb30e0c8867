//! Rate settings models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CONVERSION_RATE, DEFAULT_SURCHARGE_RATE};

/// The two rates the totals depend on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RateSettings {
    /// Target-currency units per source-currency unit
    pub conversion_rate: Decimal,
    /// Percentage added on top of converted card purchases
    pub surcharge_rate: Decimal,
}

impl RateSettings {
    pub fn new(conversion_rate: Decimal, surcharge_rate: Decimal) -> Self {
        Self {
            conversion_rate,
            surcharge_rate,
        }
    }

    /// True when neither rate has been configured.
    pub fn is_unset(&self) -> bool {
        self.conversion_rate.is_zero() && self.surcharge_rate.is_zero()
    }

    /// Falls back to the built-in rates when both are zero.
    ///
    /// A single zero is kept as an explicit value.
    pub fn or_defaults(self) -> Self {
        if self.is_unset() {
            Self::default()
        } else {
            self
        }
    }
}

impl Default for RateSettings {
    fn default() -> Self {
        Self {
            conversion_rate: DEFAULT_CONVERSION_RATE,
            surcharge_rate: DEFAULT_SURCHARGE_RATE,
        }
    }
}

/// Partial update of the rate settings; `None` leaves a rate untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateSettingsUpdate {
    pub conversion_rate: Option<Decimal>,
    pub surcharge_rate: Option<Decimal>,
}
