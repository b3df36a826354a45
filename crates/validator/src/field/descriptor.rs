use crate::field::{FieldKind, FieldPattern};

/// Immutable snapshot of one form field for a single validation pass.
///
/// Hosts build a fresh descriptor every pass from the field's current value
/// and its declared constraints; nothing is cached between passes.
///
/// # Examples
///
/// ```rust,ignore
/// use stockroom_validator::field::{FieldDescriptor, FieldPattern};
///
/// let sku = FieldDescriptor::builder("sku", "SKU")
///     .required(true)
///     .pattern(FieldPattern::new(r"^[A-Z]{3}-\d{3}-\d{3}$")?.with_message("Format: AAA-000-000"))
///     .value("ABC-123-000")
///     .build();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    id: String,
    label: String,
    value: String,
    required: bool,
    kind: FieldKind,
    pattern: Option<FieldPattern>,
    min_length: Option<usize>,
}

impl FieldDescriptor {
    /// Starts a descriptor for field `id`, displayed as `label` in messages.
    pub fn builder(id: impl Into<String>, label: impl Into<String>) -> FieldDescriptorBuilder {
        FieldDescriptorBuilder {
            inner: Self {
                id: id.into(),
                label: label.into(),
                value: String::new(),
                required: false,
                kind: FieldKind::Text,
                pattern: None,
                min_length: None,
            },
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Raw, untrimmed value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    #[must_use]
    pub fn pattern(&self) -> Option<&FieldPattern> {
        self.pattern.as_ref()
    }

    #[must_use]
    pub fn min_length(&self) -> Option<usize> {
        self.min_length
    }

    /// The same constraints with a new value: the next pass's snapshot.
    #[must_use]
    pub fn with_value(&self, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..self.clone()
        }
    }
}

/// Builder for [`FieldDescriptor`].
#[derive(Debug, Clone)]
pub struct FieldDescriptorBuilder {
    inner: FieldDescriptor,
}

impl FieldDescriptorBuilder {
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.inner.value = value.into();
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.inner.required = required;
        self
    }

    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.inner.kind = kind;
        self
    }

    pub fn pattern(mut self, pattern: FieldPattern) -> Self {
        self.inner.pattern = Some(pattern);
        self
    }

    pub fn maybe_pattern(mut self, pattern: Option<FieldPattern>) -> Self {
        self.inner.pattern = pattern;
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.inner.min_length = Some(min_length);
        self
    }

    pub fn maybe_min_length(mut self, min_length: Option<usize>) -> Self {
        self.inner.min_length = min_length;
        self
    }

    #[must_use]
    pub fn build(self) -> FieldDescriptor {
        self.inner
    }
}
