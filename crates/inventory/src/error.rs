//! Inventory errors.

/// Errors raised while turning form input into products or storing them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    /// Price text is not a non-negative amount with at most two decimals.
    #[error("invalid price `{value}`: {reason}")]
    InvalidPrice { value: String, reason: &'static str },

    /// Stock text is not a non-negative whole number.
    #[error("invalid stock `{value}`: expected a non-negative whole number")]
    InvalidStock { value: String },

    #[error("unknown category `{0}`")]
    UnknownCategory(String),

    /// SKUs are unique across the catalog.
    #[error("a product with SKU `{sku}` already exists")]
    DuplicateSku { sku: String },

    /// A column exceeds its storage width.
    #[error("{field} is longer than {max} characters")]
    TooLong { field: &'static str, max: usize },
}

/// Result alias for inventory operations.
pub type InventoryResult<T> = Result<T, InventoryError>;
