pub mod product;
pub mod validate;
