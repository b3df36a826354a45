use std::fmt;

use serde::{Deserialize, Serialize};

/// Input type of a form field.
///
/// Only [`FieldKind::Email`] changes evaluation; the other kinds are carried
/// so hosts can round-trip their form definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Number,
    Password,
    Tel,
    Url,
    Textarea,
    Select,
}

impl FieldKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Number => "number",
            Self::Password => "password",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Textarea => "textarea",
            Self::Select => "select",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
