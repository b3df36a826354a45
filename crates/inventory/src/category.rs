use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Office,
    Accessories,
    Furniture,
    Software,
}

impl Category {
    pub const ALL: [Self; 5] = [
        Self::Electronics,
        Self::Office,
        Self::Accessories,
        Self::Furniture,
        Self::Software,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Office => "Office",
            Self::Accessories => "Accessories",
            Self::Furniture => "Furniture",
            Self::Software => "Software",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = InventoryError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| InventoryError::UnknownCategory(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("electronics".parse::<Category>(), Ok(Category::Electronics));
        assert_eq!(" OFFICE ".parse::<Category>(), Ok(Category::Office));
        assert_eq!(
            "Generic".parse::<Category>(),
            Err(InventoryError::UnknownCategory("Generic".into()))
        );
    }

    #[test]
    fn test_display_round_trips() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }
    }
}
