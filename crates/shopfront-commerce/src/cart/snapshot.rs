//! Persisted cart snapshot.
//!
//! The snapshot is a JSON array of `{name, price, quantity}` objects where
//! `price` is a decimal number. Hydration validates every entry, so a
//! tampered or truncated snapshot is reported instead of corrupting totals.

use crate::cart::{Cart, CartItem, MAX_QUANTITY_PER_ITEM};
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// One entry of a persisted cart snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnapshotItem {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl Cart {
    /// Full snapshot of the cart contents.
    pub fn snapshot(&self) -> Vec<SnapshotItem> {
        self.items()
            .iter()
            .map(|item| SnapshotItem {
                name: item.name.clone(),
                price: item.unit_price.to_decimal(),
                quantity: item.quantity,
            })
            .collect()
    }

    /// Rebuild a cart from a snapshot.
    ///
    /// Entries with the same name are merged; any entry with an empty name,
    /// an invalid price or a quantity outside `1..=MAX_QUANTITY_PER_ITEM`
    /// rejects the whole snapshot, as does a cart total that overflows.
    pub fn from_snapshot(
        items: Vec<SnapshotItem>,
        currency: Currency,
    ) -> Result<Cart, CommerceError> {
        let mut cart = Cart::new(currency);
        for entry in items {
            if entry.name.trim().is_empty() {
                return Err(CommerceError::EmptyName);
            }
            if entry.quantity < 1 {
                return Err(CommerceError::InvalidQuantity(entry.quantity));
            }
            if entry.quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    entry.quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }
            let unit_price = Money::try_from_decimal(entry.price, currency)?;
            cart.merge_item(CartItem {
                name: entry.name,
                unit_price,
                quantity: entry.quantity,
            });
        }
        cart.total_price()?;
        Ok(cart)
    }

    /// Serialize the snapshot to JSON text.
    pub fn to_json(&self) -> Result<String, CommerceError> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    /// Parse and validate a JSON snapshot.
    pub fn from_json(json: &str, currency: Currency) -> Result<Cart, CommerceError> {
        let items: Vec<SnapshotItem> = serde_json::from_str(json)?;
        Cart::from_snapshot(items, currency)
    }
}
