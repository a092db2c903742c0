//! Category filter for product listings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The value carried by a filter button's `data-filter` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// Show every product.
    #[default]
    All,
    /// Show products whose category equals the given slug.
    Category(String),
}

impl CategoryFilter {
    /// The filter value meaning "no filtering".
    pub const ALL: &'static str = "all";

    /// Parse a filter attribute value. Blank values and `"all"` mean every product.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == Self::ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }

    /// Check whether a card with `category` passes this filter.
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(wanted) => category == Some(wanted.as_str()),
        }
    }

    /// The attribute value for this filter.
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL,
            CategoryFilter::Category(slug) => slug,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
