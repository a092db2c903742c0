//! Commerce domain types for the Shopfront storefront.
//!
//! This crate provides the state the storefront keeps in the browser:
//!
//! - **Money**: cents-based amounts with currency-aware formatting
//! - **Cart**: ordered line items keyed by product name, with totals
//! - **Snapshot**: the persisted JSON form of a cart
//! - **Catalog**: products and the category filter used on listing pages
//!
//! # Example
//!
//! ```
//! use shopfront_commerce::prelude::*;
//!
//! let mut cart = Cart::new(Currency::USD);
//! cart.add("Widget", Money::from_decimal(9.99, Currency::USD)).unwrap();
//! cart.add("Widget", Money::from_decimal(9.99, Currency::USD)).unwrap();
//! cart.add("Gadget", Money::from_decimal(4.50, Currency::USD)).unwrap();
//!
//! assert_eq!(cart.total_quantity(), 3);
//! assert_eq!(cart.total_price().unwrap().display_amount(), "24.48");
//! ```

pub mod error;
pub mod money;

pub mod cart;
pub mod catalog;

pub use error::CommerceError;
pub use money::{Currency, Money};

pub use cart::{Cart, CartItem, SnapshotItem, MAX_QUANTITY_PER_ITEM};
pub use catalog::{CategoryFilter, Product};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::money::{Currency, Money};

    // Cart
    pub use crate::cart::{Cart, CartItem, SnapshotItem, MAX_QUANTITY_PER_ITEM};

    // Catalog
    pub use crate::catalog::{CategoryFilter, Product};
}
