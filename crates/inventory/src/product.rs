//! Product records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::{InventoryError, InventoryResult};
use crate::price::Price;
use crate::status::StockStatus;

/// Storage width of `sku`.
pub const SKU_MAX_LEN: usize = 50;
/// Storage width of `name`.
pub const NAME_MAX_LEN: usize = 100;
/// Storage width of `image_url`.
pub const IMAGE_URL_MAX_LEN: usize = 255;

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Assigned by the catalog on insert.
    pub id: Option<u64>,
    pub sku: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: Option<Category>,
    pub price: Price,
    #[serde(default)]
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub status: StockStatus,
    /// Set by the catalog on insert.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Set on insert and on every stock change of a stored product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// A product whose status is derived from `stock`.
    pub fn new(sku: impl Into<String>, name: impl Into<String>, price: Price, stock: u32) -> Self {
        Self {
            id: None,
            sku: sku.into(),
            name: name.into(),
            description: None,
            category: None,
            price,
            stock,
            image_url: None,
            status: StockStatus::from_stock(stock),
            created_at: None,
            updated_at: None,
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Updates stock and re-derives the status.
    pub fn set_stock(&mut self, stock: u32) {
        self.stock = stock;
        self.status = StockStatus::from_stock(stock);
        if self.created_at.is_some() {
            self.updated_at = Some(Utc::now());
        }
    }

    /// Stamps both timestamps with `now`.
    pub(crate) fn stamp_created(&mut self, now: DateTime<Utc>) {
        self.created_at = Some(now);
        self.updated_at = Some(now);
    }

    /// Checks the storage widths.
    pub fn check_lengths(&self) -> InventoryResult<()> {
        check_len("sku", &self.sku, SKU_MAX_LEN)?;
        check_len("name", &self.name, NAME_MAX_LEN)?;
        if let Some(url) = &self.image_url {
            check_len("image_url", url, IMAGE_URL_MAX_LEN)?;
        }
        Ok(())
    }
}

fn check_len(field: &'static str, value: &str, max: usize) -> InventoryResult<()> {
    if value.chars().count() > max {
        return Err(InventoryError::TooLong { field, max });
    }
    Ok(())
}

/// Parses stock text as a non-negative whole number.
pub fn parse_stock(text: &str) -> InventoryResult<u32> {
    text.trim()
        .parse::<u32>()
        .map_err(|_| InventoryError::InvalidStock {
            value: text.to_owned(),
        })
}

/// Raw values of the new-product form, before parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductDraft {
    pub sku: String,
    pub name: String,
    pub price: String,
    pub stock: String,
    pub category: Option<Category>,
}

impl ProductDraft {
    /// Parses price and stock and derives the stock status.
    pub fn into_product(self) -> InventoryResult<Product> {
        let price: Price = self.price.parse()?;
        let stock = parse_stock(&self.stock)?;

        let mut product = Product::new(self.sku.trim(), self.name.trim(), price, stock);
        product.category = self.category;
        product.check_lengths()?;
        Ok(product)
    }
}
