use stockroom_validator::prelude::*;

pub const SKU_PATTERN: &str = r"^[A-Z]{3}-\d{3}-\d{3}$";

pub fn sku(value: &str, message: Option<&str>) -> FieldDescriptor {
    let mut pattern = FieldPattern::new(SKU_PATTERN).unwrap();
    if let Some(message) = message {
        pattern = pattern.with_message(message);
    }
    FieldDescriptor::builder("sku", "SKU")
        .required(true)
        .pattern(pattern)
        .value(value)
        .build()
}

pub fn name(value: &str) -> FieldDescriptor {
    FieldDescriptor::builder("name", "Name")
        .required(true)
        .min_length(3)
        .value(value)
        .build()
}

pub fn number(id: &str, label: &str, value: &str) -> FieldDescriptor {
    FieldDescriptor::builder(id, label)
        .kind(FieldKind::Number)
        .required(true)
        .value(value)
        .build()
}

/// The new-product form with the given values.
pub fn product_form(sku_value: &str, name_value: &str, price: &str, stock: &str) -> Vec<FieldDescriptor> {
    vec![
        sku(sku_value, Some("Format: AAA-000-000")),
        name(name_value),
        number("price", "Price", price),
        number("stock", "Stock", stock),
    ]
}
