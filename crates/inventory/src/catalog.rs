//! In-memory product catalog.

use chrono::Utc;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::{InventoryError, InventoryResult};
use crate::price::Price;
use crate::product::Product;
use crate::status::StockStatus;

/// Filters applied to the catalog listing. Empty filters match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryFilter {
    /// Matched case-insensitively against name or SKU.
    pub search: Option<String>,
    pub category: Option<Category>,
    pub status: Option<StockStatus>,
}

impl InventoryFilter {
    #[must_use]
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn status(mut self, status: StockStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let search_ok = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(text) => {
                let needle = text.to_lowercase();
                product.name.to_lowercase().contains(&needle)
                    || product.sku.to_lowercase().contains(&needle)
            }
        };
        search_ok
            && self.category.is_none_or(|c| product.category == Some(c))
            && self.status.is_none_or(|s| product.status == s)
    }
}

/// Products keyed by SKU, in insertion order.
#[derive(Debug, Clone)]
pub struct Inventory {
    products: IndexMap<String, Product>,
    next_id: u64,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            products: IndexMap::new(),
            next_id: 1,
        }
    }

    /// The two demo products the admin page starts with.
    #[must_use]
    pub fn sample() -> Self {
        let mut inventory = Self::new();
        let seed = [
            Product::new("MON-LG-27-004", "Monitor LG 27\" 4K", Price::from_cents(45_000), 3)
                .with_category(Category::Electronics),
            Product::new("KEY-MEC-001", "Mechanical Keyboard RGB", Price::from_cents(8_500), 120)
                .with_category(Category::Accessories),
        ];
        for product in seed {
            let sku = product.sku.clone();
            inventory.insert(sku, product);
        }
        inventory
    }

    /// Adds a product, assigning its id and timestamps. SKUs must be unique.
    pub fn add(&mut self, product: Product) -> InventoryResult<&Product> {
        product.check_lengths()?;
        if self.products.contains_key(&product.sku) {
            tracing::debug!(sku = %product.sku, "duplicate SKU rejected");
            return Err(InventoryError::DuplicateSku { sku: product.sku });
        }
        let sku = product.sku.clone();
        tracing::debug!(sku = %sku, stock = product.stock, status = product.status.code(), "product added");
        Ok(self.insert(sku, product))
    }

    #[must_use]
    pub fn get(&self, sku: &str) -> Option<&Product> {
        self.products.get(sku)
    }

    pub fn remove(&mut self, sku: &str) -> Option<Product> {
        self.products.shift_remove(sku)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Products matching `filter`, in insertion order.
    pub fn query<'a, 'f>(&'a self, filter: &'f InventoryFilter) -> impl Iterator<Item = &'a Product> + use<'a, 'f> {
        self.products.values().filter(move |p| filter.matches(p))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn insert(&mut self, sku: String, mut product: Product) -> &Product {
        product.id = Some(self.next_id);
        product.stamp_created(Utc::now());
        self.next_id += 1;
        let (index, _) = self.products.insert_full(sku, product);
        &self.products[index]
    }
}
