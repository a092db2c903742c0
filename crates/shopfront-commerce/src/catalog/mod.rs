//! Product catalog module.
//!
//! Contains the product listing type and the category filter.

mod filter;
mod product;

pub use filter::CategoryFilter;
pub use product::Product;
