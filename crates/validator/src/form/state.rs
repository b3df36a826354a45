use std::fmt;

use serde::{Deserialize, Serialize};

/// Interaction state of one field.
///
/// `Untouched -> Touched -> (Valid | Invalid)`. Once touched a field only
/// returns to `Untouched` through a full form reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldState {
    #[default]
    Untouched,
    Touched,
    Valid,
    Invalid,
}

impl FieldState {
    /// State after an evaluation with the given outcome.
    #[must_use]
    pub const fn evaluated(valid: bool) -> Self {
        if valid { Self::Valid } else { Self::Invalid }
    }

    #[must_use]
    pub const fn is_touched(self) -> bool {
        !matches!(self, Self::Untouched)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Untouched => "untouched",
            Self::Touched => "touched",
            Self::Valid => "valid",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for FieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states() {
        assert_eq!(FieldState::default(), FieldState::Untouched);
        assert!(!FieldState::Untouched.is_touched());
        assert!(FieldState::evaluated(false).is_touched());
        assert_eq!(FieldState::evaluated(true).to_string(), "valid");
    }
}
