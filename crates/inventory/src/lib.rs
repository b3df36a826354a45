//! # stockroom-inventory
//!
//! Product records for the stockroom admin page and the "new product" form
//! that feeds them.
//!
//! ```rust,ignore
//! use stockroom_inventory::{Inventory, ProductForm, save_product};
//! use stockroom_validator::{ValidationConfig, form::{InlineMessages, attach}};
//!
//! let mut inventory = Inventory::sample();
//! let form = ProductForm::new()
//!     .with("sku", "DSK-320-001")
//!     .with("name", "Standing desk")
//!     .with("price", "320.00")
//!     .with("stock", "8");
//! let mut attached = attach(form, InlineMessages::new(), ValidationConfig::default());
//! save_product(&mut attached, &mut inventory)?;
//! ```

pub mod catalog;
pub mod category;
pub mod error;
pub mod form;
pub mod price;
pub mod product;
pub mod save;
pub mod status;

pub use catalog::{Inventory, InventoryFilter};
pub use category::Category;
pub use error::{InventoryError, InventoryResult};
pub use form::ProductForm;
pub use price::Price;
pub use product::{Product, ProductDraft, parse_stock};
pub use save::{SaveOutcome, save_product};
pub use status::StockStatus;
