use crate::config::ConfigError;
use crate::field::{FieldDescriptor, FormSpec, check_ids};

use super::attach::FormHandle;

/// A plain in-memory form: an ordered list of descriptors whose values can
/// be edited between passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    fields: Vec<FieldDescriptor>,
}

impl FieldSet {
    /// Builds a form from descriptors in declaration order.
    ///
    /// # Errors
    ///
    /// Fails when a field id is blank or repeated, since every field must
    /// be addressable on its own.
    pub fn new(fields: Vec<FieldDescriptor>) -> Result<Self, ConfigError> {
        check_ids(fields.iter().map(FieldDescriptor::id))?;
        Ok(Self { fields })
    }

    /// Builds a form from a parsed form file.
    pub fn from_spec(spec: &FormSpec) -> Result<Self, ConfigError> {
        spec.descriptors().and_then(Self::new)
    }

    #[must_use]
    pub fn get(&self, field_id: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.id() == field_id)
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Replaces a field's value. Returns `false` for unknown ids.
    pub fn set_value(&mut self, field_id: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|f| f.id() == field_id) {
            Some(field) => {
                *field = field.with_value(value);
                true
            }
            None => false,
        }
    }
}

impl FormHandle for FieldSet {
    fn field_ids(&self) -> Vec<&str> {
        self.fields.iter().map(FieldDescriptor::id).collect()
    }

    fn snapshot(&self, field_id: &str) -> Option<FieldDescriptor> {
        self.get(field_id).cloned()
    }

    fn snapshot_all(&self) -> Vec<FieldDescriptor> {
        self.fields.clone()
    }

    fn clear_values(&mut self) {
        for field in &mut self.fields {
            *field = field.with_value("");
        }
    }
}
