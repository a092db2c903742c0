//! Product listing type.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product shown on a listing page.
///
/// Its name and price are what the add-to-cart control carries; its
/// category is what the listing filter compares against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Display name, also the cart key.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Category slug used by the listing filter.
    pub category: Option<String>,
    /// Unit price.
    pub price: Money,
    /// Short description.
    pub description: Option<String>,
    /// Product image URL.
    pub image_url: Option<String>,
}

impl Product {
    /// Create a product with no category, description or image.
    pub fn new(name: impl Into<String>, slug: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            category: None,
            price,
            description: None,
            image_url: None,
        }
    }

    /// Set the category slug.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// The value of the add-to-cart control's `data-price` attribute.
    pub fn price_attribute(&self) -> String {
        self.price.display_amount()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_builder_and_attribute() {
        let product = Product::new("Cold Brew", "cold-brew", Money::new(1250, Currency::USD))
            .with_category("coffee")
            .with_image("/img/cold-brew.jpg");
        assert_eq!(product.category.as_deref(), Some("coffee"));
        assert_eq!(product.price_attribute(), "12.50");
    }
}
