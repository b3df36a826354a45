//! Presentation side-effects for field results.

use indexmap::IndexMap;

/// Receives one call per evaluated field.
///
/// Implementations must be idempotent: repeating a call with the same
/// message leaves the display unchanged.
pub trait FieldResultSink {
    /// `message` is `None` when the field is valid and any shown message
    /// must be cleared.
    fn on_field_result(&mut self, field_id: &str, message: Option<&str>);
}

impl<F> FieldResultSink for F
where
    F: FnMut(&str, Option<&str>),
{
    fn on_field_result(&mut self, field_id: &str, message: Option<&str>) {
        self(field_id, message);
    }
}

/// A sink that discards every result.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl FieldResultSink for NoopSink {
    fn on_field_result(&mut self, _field_id: &str, _message: Option<&str>) {}
}

/// In-memory inline error display.
///
/// Models one message slot per field, created on first use and reused
/// afterwards, plus the field's invalid marker. Hosts render from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineMessages {
    slots: IndexMap<String, Option<String>>,
}

impl InlineMessages {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Message currently shown for a field.
    #[must_use]
    pub fn message(&self, field_id: &str) -> Option<&str> {
        self.slots.get(field_id).and_then(Option::as_deref)
    }

    /// Whether the field is currently marked invalid.
    #[must_use]
    pub fn is_invalid(&self, field_id: &str) -> bool {
        self.message(field_id).is_some()
    }

    /// Fields currently marked invalid, in first-seen order.
    pub fn invalid_fields(&self) -> impl Iterator<Item = &str> {
        self.slots
            .iter()
            .filter(|(_, message)| message.is_some())
            .map(|(id, _)| id.as_str())
    }

    /// Number of message slots created so far.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

impl FieldResultSink for InlineMessages {
    fn on_field_result(&mut self, field_id: &str, message: Option<&str>) {
        let text = message.map(str::to_owned);
        match self.slots.get_mut(field_id) {
            Some(slot) => *slot = text,
            None => {
                self.slots.insert(field_id.to_owned(), text);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_messages_idempotent() {
        let mut display = InlineMessages::new();
        display.on_field_result("name", Some("Name is required."));
        let once = display.clone();
        display.on_field_result("name", Some("Name is required."));

        assert_eq!(display, once);
        assert_eq!(display.slot_count(), 1);
        assert!(display.is_invalid("name"));
    }

    #[test]
    fn test_inline_messages_clear() {
        let mut display = InlineMessages::new();
        display.on_field_result("name", Some("Name is required."));
        display.on_field_result("name", None);

        assert_eq!(display.message("name"), None);
        assert!(!display.is_invalid("name"));
        assert_eq!(display.slot_count(), 1);
    }

    #[test]
    fn test_invalid_fields_order() {
        let mut display = InlineMessages::new();
        display.on_field_result("sku", Some("SKU is invalid."));
        display.on_field_result("name", None);
        display.on_field_result("price", Some("Price is required."));

        assert_eq!(display.invalid_fields().collect::<Vec<_>>(), ["sku", "price"]);
    }

    #[test]
    fn test_closure_sink() {
        let mut calls = Vec::new();
        let mut sink = |id: &str, message: Option<&str>| {
            calls.push((id.to_owned(), message.map(str::to_owned)));
        };
        sink.on_field_result("stock", None);
        assert_eq!(calls, [("stock".to_owned(), None)]);
    }
}
