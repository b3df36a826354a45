//! The "new product" form.

use std::sync::LazyLock;

use stockroom_validator::field::{FieldDescriptor, FieldKind, FieldPattern};
use stockroom_validator::form::FormHandle;

use crate::category::Category;
use crate::error::InventoryResult;
use crate::product::{Product, ProductDraft};

pub const SKU: &str = "sku";
pub const NAME: &str = "name";
pub const PRICE: &str = "price";
pub const STOCK: &str = "stock";

/// Field ids in declaration order.
pub const FIELD_IDS: [&str; 4] = [SKU, NAME, PRICE, STOCK];

/// SKU shape: three capitals, then two groups of three digits.
pub const SKU_PATTERN: &str = r"^[A-Z]{3}-\d{3}-\d{3}$";

static SKU_FORMAT: LazyLock<FieldPattern> = LazyLock::new(|| {
    FieldPattern::new(SKU_PATTERN)
        .expect("SKU pattern is valid")
        .with_message("Format: AAA-000-000")
});

/// Values typed into the new-product form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    sku: String,
    name: String,
    price: String,
    stock: String,
    category: Option<Category>,
}

impl ProductForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Types `value` into a field. Returns `false` for unknown ids.
    pub fn set(&mut self, field_id: &str, value: impl Into<String>) -> bool {
        match self.slot_mut(field_id) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Builder form of [`set`](Self::set); unknown ids are ignored.
    #[must_use]
    pub fn with(mut self, field_id: &str, value: impl Into<String>) -> Self {
        self.set(field_id, value);
        self
    }

    #[must_use]
    pub fn value(&self, field_id: &str) -> Option<&str> {
        match field_id {
            SKU => Some(&self.sku),
            NAME => Some(&self.name),
            PRICE => Some(&self.price),
            STOCK => Some(&self.stock),
            _ => None,
        }
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.category = category;
    }

    #[must_use]
    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// Current values, unparsed.
    #[must_use]
    pub fn draft(&self) -> ProductDraft {
        ProductDraft {
            sku: self.sku.clone(),
            name: self.name.clone(),
            price: self.price.clone(),
            stock: self.stock.clone(),
            category: self.category,
        }
    }

    /// Parses the current values into a product.
    pub fn into_product(&self) -> InventoryResult<Product> {
        self.draft().into_product()
    }

    fn slot_mut(&mut self, field_id: &str) -> Option<&mut String> {
        match field_id {
            SKU => Some(&mut self.sku),
            NAME => Some(&mut self.name),
            PRICE => Some(&mut self.price),
            STOCK => Some(&mut self.stock),
            _ => None,
        }
    }
}

impl FormHandle for ProductForm {
    fn field_ids(&self) -> Vec<&str> {
        FIELD_IDS.to_vec()
    }

    fn snapshot(&self, field_id: &str) -> Option<FieldDescriptor> {
        let value = self.value(field_id)?;
        let descriptor = match field_id {
            SKU => FieldDescriptor::builder(SKU, "SKU").pattern(SKU_FORMAT.clone()),
            NAME => FieldDescriptor::builder(NAME, "Name").min_length(3),
            PRICE => FieldDescriptor::builder(PRICE, "Price").kind(FieldKind::Number),
            _ => FieldDescriptor::builder(STOCK, "Stock").kind(FieldKind::Number),
        };
        Some(descriptor.required(true).value(value).build())
    }

    fn clear_values(&mut self) {
        *self = Self::default();
    }
}
