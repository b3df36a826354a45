//! Field descriptors: what a host tells the engine about one form field.

mod descriptor;
mod kind;
mod pattern;
pub mod spec;

pub use descriptor::{FieldDescriptor, FieldDescriptorBuilder};
pub use kind::FieldKind;
pub use pattern::FieldPattern;
pub use spec::{FieldSpec, FormSpec, MinLengthBound};

use std::collections::HashSet;

use crate::config::ConfigError;

/// Checks that every field id is non-blank and unique, in declaration order.
pub(crate) fn check_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for (index, id) in ids.into_iter().enumerate() {
        if id.trim().is_empty() {
            return Err(ConfigError::MissingFieldId { position: index + 1 });
        }
        if !seen.insert(id) {
            return Err(ConfigError::DuplicateFieldId { id: id.to_owned() });
        }
    }
    Ok(())
}
