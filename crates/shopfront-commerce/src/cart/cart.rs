//! Cart and line item types.

use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// A shopping cart.
///
/// Items keep first-added order and are keyed by product name: there is at
/// most one item per name and every item has a quantity of at least one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    items: Vec<CartItem>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart priced in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Add one unit of a product.
    ///
    /// An existing item with the same name has its quantity incremented and
    /// keeps its original unit price; otherwise a new item is appended.
    ///
    /// Returns an error if:
    /// - The name is empty
    /// - The price is negative or in another currency
    /// - The item is already at MAX_QUANTITY_PER_ITEM
    /// - The line total or the cart total would overflow
    pub fn add(
        &mut self,
        name: impl Into<String>,
        unit_price: Money,
    ) -> Result<&CartItem, CommerceError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CommerceError::EmptyName);
        }
        if unit_price.is_negative() {
            return Err(CommerceError::InvalidPrice(unit_price.display_amount()));
        }
        if unit_price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: unit_price.currency.code().to_string(),
            });
        }

        match self.position_of(&name) {
            Some(index) => {
                let item = &self.items[index];
                let new_quantity = item.quantity + 1;
                if new_quantity > MAX_QUANTITY_PER_ITEM {
                    return Err(CommerceError::QuantityExceedsLimit(
                        new_quantity,
                        MAX_QUANTITY_PER_ITEM,
                    ));
                }
                let kept_price = item.unit_price;
                self.ensure_headroom(kept_price, new_quantity)?;
                self.items[index].quantity = new_quantity;
                Ok(&self.items[index])
            }
            None => {
                self.ensure_headroom(unit_price, 1)?;
                self.items.push(CartItem {
                    name,
                    unit_price,
                    quantity: 1,
                });
                Ok(&self.items[self.items.len() - 1])
            }
        }
    }

    /// Remove the item at `position`.
    ///
    /// Out-of-range positions are ignored and return `None`.
    pub fn remove_at(&mut self, position: usize) -> Option<CartItem> {
        if position < self.items.len() {
            Some(self.items.remove(position))
        } else {
            None
        }
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of all quantities (the badge count).
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of unit price times quantity over all items.
    pub fn total_price(&self) -> Result<Money, CommerceError> {
        let line_totals = self
            .items
            .iter()
            .map(CartItem::line_total)
            .collect::<Result<Vec<_>, _>>()?;
        Money::try_sum(line_totals.iter(), self.currency).ok_or(CommerceError::Overflow)
    }

    /// Items in first-added order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The currency prices are held in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Get an item by product name.
    pub fn get(&self, name: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.name == name)
    }

    /// Adding one more `unit_price` to a line that ends at `new_quantity` must
    /// leave both the line total and the cart total representable.
    fn ensure_headroom(&self, unit_price: Money, new_quantity: i64) -> Result<(), CommerceError> {
        unit_price
            .try_multiply(new_quantity)
            .ok_or(CommerceError::Overflow)?;
        self.total_price()?
            .try_add(&unit_price)
            .ok_or(CommerceError::Overflow)?;
        Ok(())
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|i| i.name == name)
    }

    /// Fold a validated item into the cart, merging by name.
    ///
    /// Used when hydrating; quantities are capped at MAX_QUANTITY_PER_ITEM.
    pub(crate) fn merge_item(&mut self, item: CartItem) {
        match self.position_of(&item.name) {
            Some(index) => {
                let existing = &mut self.items[index];
                existing.quantity = existing
                    .quantity
                    .saturating_add(item.quantity)
                    .min(MAX_QUANTITY_PER_ITEM);
            }
            None => self.items.push(item),
        }
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product name, unique within the cart.
    pub name: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity, always at least one.
    pub quantity: i64,
}

impl CartItem {
    /// Unit price times quantity.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.unit_price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(amount: f64) -> Money {
        Money::from_decimal(amount, Currency::USD)
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new(Currency::USD);
        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
        assert_eq!(cart.total_price().unwrap().display_amount(), "0.00");
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::new(Currency::USD);
        cart.add("Widget", usd(9.99)).unwrap();
        let item = cart.add("Widget", usd(9.99)).unwrap();
        assert_eq!(item.quantity, 2);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_widget_gadget_totals() {
        let mut cart = Cart::new(Currency::USD);
        cart.add("Widget", usd(9.99)).unwrap();
        cart.add("Widget", usd(9.99)).unwrap();
        cart.add("Gadget", usd(4.50)).unwrap();

        let names: Vec<_> = cart.items().iter().map(|i| (i.name.as_str(), i.quantity)).collect();
        assert_eq!(names, vec![("Widget", 2), ("Gadget", 1)]);
        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.total_price().unwrap().amount_cents, 2448);
        assert_eq!(cart.total_price().unwrap().display_amount(), "24.48");
    }

    #[test]
    fn test_repeat_add_keeps_first_price() {
        let mut cart = Cart::new(Currency::USD);
        cart.add("Widget", usd(9.99)).unwrap();
        cart.add("Widget", usd(1.00)).unwrap();
        assert_eq!(cart.get("Widget").unwrap().unit_price, usd(9.99));
    }

    #[test]
    fn test_remove_at() {
        let mut cart = Cart::new(Currency::USD);
        cart.add("Widget", usd(9.99)).unwrap();
        cart.add("Gadget", usd(4.50)).unwrap();

        let removed = cart.remove_at(0).unwrap();
        assert_eq!(removed.name, "Widget");
        assert_eq!(cart.items()[0].name, "Gadget");

        assert!(cart.remove_at(5).is_none());
        assert_eq!(cart.len(), 1);

        cart.remove_at(0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_rejects_invalid_input() {
        let mut cart = Cart::new(Currency::USD);
        assert_eq!(cart.add("  ", usd(1.0)).unwrap_err(), CommerceError::EmptyName);
        assert!(matches!(
            cart.add("Widget", Money::new(-1, Currency::USD)),
            Err(CommerceError::InvalidPrice(_))
        ));
        assert!(matches!(
            cart.add("Widget", Money::new(100, Currency::EUR)),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_limit() {
        let mut cart = Cart::new(Currency::USD);
        cart.merge_item(CartItem {
            name: "Widget".into(),
            unit_price: usd(1.0),
            quantity: MAX_QUANTITY_PER_ITEM,
        });
        let result = cart.add("Widget", usd(1.0));
        assert!(matches!(result, Err(CommerceError::QuantityExceedsLimit(_, _))));
        assert_eq!(cart.total_quantity(), MAX_QUANTITY_PER_ITEM);
    }

    #[test]
    fn test_add_rejects_overflowing_totals() {
        let huge = Money::new(i64::MAX / 2 + 1, Currency::USD);
        let mut cart = Cart::new(Currency::USD);
        cart.add("Big", huge).unwrap();

        assert_eq!(cart.add("Big", huge).unwrap_err(), CommerceError::Overflow);
        assert_eq!(cart.add("Other", huge).unwrap_err(), CommerceError::Overflow);
        assert_eq!(cart.total_quantity(), 1);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_price().unwrap(), huge);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new(Currency::USD);
        cart.add("Widget", usd(9.99)).unwrap();
        cart.clear();
        assert!(cart.is_empty());
    }
}
