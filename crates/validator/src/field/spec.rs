//! Serializable field and form definitions.
//!
//! This is the configuration-file shape of a form: plain strings and
//! numbers, turned into [`FieldDescriptor`]s once every pattern compiles.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, ValidationConfig};
use crate::field::{FieldDescriptor, FieldKind, FieldPattern, check_ids};

/// Minimum length as written in configuration: a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MinLengthBound {
    Count(usize),
    Text(String),
}

impl MinLengthBound {
    /// Resolves the bound to an integer.
    pub fn resolve(&self, field: &str) -> Result<usize, ConfigError> {
        match self {
            Self::Count(n) => Ok(*n),
            Self::Text(text) => {
                text.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidMinLength {
                        field: field.to_owned(),
                        value: text.clone(),
                    })
            }
        }
    }
}

impl From<usize> for MinLengthBound {
    fn from(n: usize) -> Self {
        Self::Count(n)
    }
}

/// One field in a form definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSpec {
    pub id: String,
    /// Name used in messages. Falls back to `id`, then to `"Field"`.
    pub label: Option<String>,
    pub kind: FieldKind,
    pub required: bool,
    pub pattern: Option<String>,
    pub pattern_message: Option<String>,
    pub min_length: Option<MinLengthBound>,
    pub value: String,
}

impl FieldSpec {
    /// Label shown in messages.
    #[must_use]
    pub fn display_label(&self) -> &str {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ if !self.id.is_empty() => &self.id,
            _ => "Field",
        }
    }

    /// Compiles the spec into a descriptor.
    ///
    /// # Errors
    ///
    /// Fails on an invalid pattern or a non-numeric `min_length`.
    pub fn to_descriptor(&self) -> Result<FieldDescriptor, ConfigError> {
        let pattern = self
            .pattern
            .as_deref()
            .map(|source| {
                FieldPattern::new(source).map(|p| match &self.pattern_message {
                    Some(message) => p.with_message(message.clone()),
                    None => p,
                })
            })
            .transpose()?;
        let min_length = self
            .min_length
            .as_ref()
            .map(|bound| bound.resolve(&self.id))
            .transpose()?;

        Ok(FieldDescriptor::builder(self.id.clone(), self.display_label())
            .kind(self.kind)
            .required(self.required)
            .maybe_pattern(pattern)
            .maybe_min_length(min_length)
            .value(self.value.clone())
            .build())
    }
}

/// A whole form: ordered fields plus attachment behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSpec {
    pub fields: Vec<FieldSpec>,
    pub validation: ValidationConfig,
}

impl FormSpec {
    /// Compiles every field, in declaration order.
    ///
    /// # Errors
    ///
    /// Fails on a blank or repeated field id, or on any field
    /// [`FieldSpec::to_descriptor`] rejects.
    pub fn descriptors(&self) -> Result<Vec<FieldDescriptor>, ConfigError> {
        check_ids(self.fields.iter().map(|f| f.id.as_str()))?;
        self.fields.iter().map(FieldSpec::to_descriptor).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length_accepts_text() {
        let bound = MinLengthBound::Text(" 3 ".into());
        assert_eq!(bound.resolve("name").unwrap(), 3);
    }

    #[test]
    fn test_min_length_rejects_garbage() {
        let err = MinLengthBound::Text("three".into()).resolve("name").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMinLength { ref field, .. } if field == "name"));
    }

    #[test]
    fn test_label_fallbacks() {
        let mut spec = FieldSpec {
            id: "sku".into(),
            ..FieldSpec::default()
        };
        assert_eq!(spec.display_label(), "sku");

        spec.label = Some("SKU".into());
        assert_eq!(spec.display_label(), "SKU");

        spec.id.clear();
        spec.label = None;
        assert_eq!(spec.display_label(), "Field");
    }

    #[test]
    fn test_form_from_toml() {
        let form: FormSpec = toml::from_str(
            r#"
            [validation]
            validate_on_blur = false

            [[fields]]
            id = "sku"
            label = "SKU"
            required = true
            pattern = '^[A-Z]{3}-\d{3}-\d{3}$'
            pattern_message = "Format: AAA-000-000"

            [[fields]]
            id = "name"
            label = "Name"
            min_length = "3"
            value = "Hi"
            "#,
        )
        .unwrap();

        assert!(!form.validation.validate_on_blur);
        let fields = form.descriptors().unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].pattern().and_then(FieldPattern::message), Some("Format: AAA-000-000"));
        assert_eq!(fields[1].min_length(), Some(3));
        assert_eq!(fields[1].value(), "Hi");
    }

    #[test]
    fn test_bad_pattern_fails_loudly() {
        let form = FormSpec {
            fields: vec![FieldSpec {
                id: "sku".into(),
                pattern: Some("(".into()),
                ..FieldSpec::default()
            }],
            ..FormSpec::default()
        };
        assert!(matches!(form.descriptors(), Err(ConfigError::InvalidPattern { .. })));
    }

    #[test]
    fn test_field_without_id_is_rejected() {
        let form: FormSpec = toml::from_str(
            r#"
            [[fields]]
            label = "SKU"
            required = true
            value = "ABC-123-000"

            [[fields]]
            label = "Name"
            required = true
            "#,
        )
        .unwrap();
        assert!(matches!(
            form.descriptors(),
            Err(ConfigError::MissingFieldId { position: 1 })
        ));
    }

    #[test]
    fn test_repeated_id_is_rejected() {
        let field = |label: &str| FieldSpec {
            id: "sku".into(),
            label: Some(label.into()),
            ..FieldSpec::default()
        };
        let form = FormSpec {
            fields: vec![field("SKU"), field("Code")],
            ..FormSpec::default()
        };
        let err = form.descriptors().unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateFieldId { ref id } if id == "sku"));
        assert_eq!(err.to_string(), "duplicate field id `sku`");
    }
}
