//! Shopping cart module.
//!
//! Contains the cart, its line items and the persisted snapshot form.

mod cart;
mod snapshot;

pub use cart::{Cart, CartItem, MAX_QUANTITY_PER_ITEM};
pub use snapshot::SnapshotItem;
