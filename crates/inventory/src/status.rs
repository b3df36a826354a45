use std::fmt;

use serde::{Deserialize, Serialize};

/// Stock level band shown as a badge next to each product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Critical,
    Low,
    #[default]
    Ok,
}

impl StockStatus {
    /// Below this many units stock is critical.
    pub const CRITICAL_BELOW: u32 = 5;
    /// Below this many units stock is low.
    pub const LOW_BELOW: u32 = 15;

    #[must_use]
    pub const fn from_stock(stock: u32) -> Self {
        if stock < Self::CRITICAL_BELOW {
            Self::Critical
        } else if stock < Self::LOW_BELOW {
            Self::Low
        } else {
            Self::Ok
        }
    }

    /// Parses a status code. Unknown codes read as [`StockStatus::Ok`].
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "critical" => Self::Critical,
            "low" => Self::Low,
            _ => Self::Ok,
        }
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Low => "low",
            Self::Ok => "ok",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical Stock",
            Self::Low => "Low Stock",
            Self::Ok => "Normal Stock",
        }
    }

    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Critical => "status-critical",
            Self::Low => "status-low",
            Self::Ok => "status-ok",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
