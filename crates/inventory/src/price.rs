use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// A non-negative amount in cents, stored like a `DECIMAL(10, 2)` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Largest value a `DECIMAL(10, 2)` column holds.
    pub const MAX: Self = Self(9_999_999_999);

    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn whole(self) -> u64 {
        self.0 / 100
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Price {
    type Err = InventoryError;

    /// Accepts `450`, `450.5` and `450.00`; rejects signs, exponents and a
    /// third decimal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| InventoryError::InvalidPrice {
            value: s.to_owned(),
            reason,
        };

        let text = s.trim();
        if text.starts_with('-') {
            return Err(invalid("must not be negative"));
        }

        let (whole, frac) = text.split_once('.').unwrap_or((text, ""));
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected a decimal amount"));
        }
        if !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected a decimal amount"));
        }
        if frac.len() > 2 {
            return Err(invalid("at most two decimal places"));
        }

        let whole: u64 = whole.parse().map_err(|_| invalid("amount is too large"))?;
        let frac: u64 = match frac.len() {
            0 => 0,
            1 => u64::from(frac.as_bytes()[0] - b'0') * 10,
            _ => u64::from(frac.as_bytes()[0] - b'0') * 10 + u64::from(frac.as_bytes()[1] - b'0'),
        };

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac))
            .filter(|c| *c <= Self::MAX.0)
            .ok_or_else(|| invalid("amount is too large"))?;
        Ok(Self(cents))
    }
}
