//! Cart sidebar projection.

use shopfront_commerce::{Cart, CommerceError, Money};

/// One rendered cart row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    /// Ordinal carried by the row's remove control.
    pub position: usize,
    pub name: String,
    pub image_url: String,
    pub image_alt: String,
    /// Unit price and quantity, such as `"$9.99 × 2"`.
    pub price_line: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartBody {
    /// The empty placeholder.
    Empty,
    Rows(Vec<CartRow>),
}

/// Everything the sidebar and the header badge show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub badge: i64,
    pub body: CartBody,
    /// Formatted total, such as `"$24.48"`.
    pub total: String,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        matches!(self.body, CartBody::Empty)
    }

    pub fn rows(&self) -> &[CartRow] {
        match &self.body {
            CartBody::Empty => &[],
            CartBody::Rows(rows) => rows,
        }
    }
}

/// Project a cart into its view. Holds no state between calls.
pub fn render(cart: &Cart, image_url: &str) -> Result<CartView, CommerceError> {
    let total = cart.total_price()?;
    let body = if cart.is_empty() {
        CartBody::Empty
    } else {
        CartBody::Rows(
            cart.items()
                .iter()
                .enumerate()
                .map(|(position, item)| CartRow {
                    position,
                    name: item.name.clone(),
                    image_url: image_url.to_string(),
                    image_alt: item.name.clone(),
                    price_line: format!("{} × {}", item.unit_price.display(), item.quantity),
                })
                .collect(),
        )
    };
    Ok(CartView {
        badge: cart.total_quantity(),
        body,
        total: total.display(),
    })
}

/// View of an empty cart, used when a total cannot be computed.
pub fn empty(cart: &Cart) -> CartView {
    CartView {
        badge: 0,
        body: CartBody::Empty,
        total: Money::zero(cart.currency()).display(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_commerce::Currency;

    const IMG: &str = "https://example.com/item.jpg";

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    #[test]
    fn test_empty_cart() {
        let view = render(&Cart::new(Currency::USD), IMG).unwrap();
        assert!(view.is_empty());
        assert_eq!(view.badge, 0);
        assert_eq!(view.total, "$0.00");
        assert!(view.rows().is_empty());
    }

    #[test]
    fn test_rows_and_total() {
        let mut cart = Cart::new(Currency::USD);
        cart.add("Widget", usd(999)).unwrap();
        cart.add("Widget", usd(999)).unwrap();
        cart.add("Gadget", usd(450)).unwrap();

        let view = render(&cart, IMG).unwrap();
        assert_eq!(view.badge, 3);
        assert_eq!(view.total, "$24.48");
        let rows = view.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].price_line, "$9.99 × 2");
        assert_eq!(rows[1].price_line, "$4.50 × 1");
        assert_eq!(rows[1].position, 1);
        assert_eq!(rows[1].image_alt, "Gadget");
        assert_eq!(rows[0].image_url, IMG);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut cart = Cart::new(Currency::USD);
        cart.add("Lamp", usd(2500)).unwrap();
        assert_eq!(render(&cart, IMG).unwrap(), render(&cart, IMG).unwrap());
    }
}
