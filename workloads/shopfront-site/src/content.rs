//! Static site content and per-page registration.

use shopfront_cache::KeyValueStore;
use shopfront_commerce::{Currency, Money, Product};
use shopfront_interact::command::RevealId;
use shopfront_interact::reveal::RevealSpec;
use shopfront_interact::Storefront;

/// Navigation links: href and label.
pub const NAV_LINKS: [(&str, &str); 3] = [
    ("index.html", "Home"),
    ("products.html", "Products"),
    ("contact.html", "Contact"),
];

/// Filter buttons on the products page: `data-filter` value and label.
pub const FILTERS: [(&str, &str); 4] = [
    ("all", "All"),
    ("kitchen", "Kitchen"),
    ("living", "Living"),
    ("outdoor", "Outdoor"),
];

pub const FLOATING_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1556228453-efd6c1ff04f6?auto=format&fit=crop&w=400&q=80",
    "https://images.unsplash.com/photo-1505693416388-ac5ce068fe85?auto=format&fit=crop&w=400&q=80",
    "https://images.unsplash.com/photo-1493663284031-b7e3aefcae8e?auto=format&fit=crop&w=400&q=80",
];

/// A statistic on the home page. `value` is the counter's authored text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat {
        label: "Happy Customers",
        value: "15,000+",
    },
    Stat {
        label: "Satisfaction",
        value: "98%",
    },
    Stat {
        label: "Products",
        value: "250",
    },
    Stat {
        label: "Typical Price",
        value: "$10-20",
    },
];

/// A progress bar on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub label: &'static str,
    pub width: &'static str,
}

pub const HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        label: "Sustainably sourced",
        width: "92%",
    },
    Highlight {
        label: "Handmade",
        width: "75%",
    },
    Highlight {
        label: "Ships in 48h",
        width: "88%",
    },
];

/// The storefront catalog.
pub fn products(currency: Currency) -> Vec<Product> {
    let item = |name: &str, slug: &str, cents: i64, category: &str, description: &str| {
        Product::new(name, slug, Money::new(cents, currency))
            .with_category(category)
            .with_description(description)
            .with_image(format!("/img/{}.jpg", slug))
    };
    vec![
        item("Ceramic Mug", "ceramic-mug", 1800, "kitchen", "Stoneware, glazed by hand."),
        item("Oak Cutting Board", "oak-board", 4450, "kitchen", "End-grain oak, oiled."),
        item("Linen Cushion", "linen-cushion", 3200, "living", "Washed linen, feather fill."),
        item("Wool Throw", "wool-throw", 8900, "living", "Merino blend, 130 x 170 cm."),
        item("Garden Lantern", "garden-lantern", 2750, "outdoor", "Powder-coated steel."),
        item("Herb Planter", "herb-planter", 1999, "outdoor", "Terracotta, set of three."),
    ]
}

/// Pages the site serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Products,
    Contact,
    Other,
}

impl Page {
    /// Page for a file name as returned by `nav::current_page`.
    pub fn from_file(file: &str) -> Self {
        match file {
            "index.html" => Page::Home,
            "products.html" => Page::Products,
            "contact.html" => Page::Contact,
            _ => Page::Other,
        }
    }
}

/// Ids the page components need after registration.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub page: Page,
    pub stats: Option<RevealId>,
    pub highlights: Vec<RevealId>,
    /// Products shown, with their filter card index on the products page.
    pub products: Vec<(Option<usize>, Product)>,
}

/// Register what `page` shows with the storefront.
pub fn register<S: KeyValueStore>(shop: &mut Storefront<S>, page: Page) -> PageLayout {
    let currency = shop.config().currency;
    let mut layout = PageLayout {
        page,
        ..PageLayout::default()
    };

    match page {
        Page::Home => {
            shop.set_floating_images(FLOATING_IMAGES.len());
            let stats = STATS
                .iter()
                .fold(RevealSpec::new(), |spec, stat| spec.with_counter(stat.value));
            layout.stats = Some(shop.register_reveal(stats));
            layout.highlights = HIGHLIGHTS
                .iter()
                .enumerate()
                .map(|(index, h)| {
                    shop.register_reveal(
                        RevealSpec::new()
                            .with_progress(h.width)
                            .with_delay(index as u64 * 100),
                    )
                })
                .collect();
            layout.products = products(currency)
                .into_iter()
                .take(3)
                .map(|p| (None, p))
                .collect();
        }
        Page::Products => {
            for (value, _) in FILTERS {
                shop.add_filter_button(value);
            }
            layout.products = products(currency)
                .into_iter()
                .map(|p| {
                    let card = shop.add_product_card(p.category.as_deref());
                    (Some(card), p)
                })
                .collect();
        }
        Page::Contact | Page::Other => {}
    }
    layout
}
