use std::fmt;

use regex::Regex;

use crate::config::ConfigError;

/// A compiled custom pattern plus the message shown when it does not match.
///
/// The pattern must match the whole value: `[A-Z]{3}` accepts `"ABC"` but
/// not `"ABCD"`, whether or not the source carries its own `^`/`$` anchors.
/// Cloning is cheap; the compiled program is shared.
#[derive(Clone)]
pub struct FieldPattern {
    source: String,
    regex: Regex,
    message: Option<String>,
}

impl FieldPattern {
    /// Compiles `source`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidPattern`] if the pattern does not compile.
    pub fn new(source: impl Into<String>) -> Result<Self, ConfigError> {
        let source = source.into();
        let regex = Regex::new(&format!("^(?:{source})$")).map_err(|e| {
            ConfigError::InvalidPattern {
                pattern: source.clone(),
                source: Box::new(e),
            }
        })?;
        Ok(Self {
            source,
            regex,
            message: None,
        })
    }

    /// Sets the message reported on mismatch.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// The pattern as configured.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns `true` if the whole of `value` matches.
    #[must_use]
    pub fn is_full_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

impl fmt::Debug for FieldPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldPattern")
            .field("source", &self.source)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl PartialEq for FieldPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.message == other.message
    }
}

impl Eq for FieldPattern {}
