//! Property tests for counters and cart dispatch.

use proptest::prelude::*;
use shopfront_cache::MemoryStore;
use shopfront_interact::counter::{format_grouped, Counter};
use shopfront_interact::prelude::*;
use shopfront_observability::{LogLevel, SessionId, StructuredLogger};

fn quiet_logger() -> StructuredLogger {
    StructuredLogger::new(SessionId::from_string("prop")).with_min_level(LogLevel::Error)
}

fn price_text(cents: u32) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

proptest! {
    #[test]
    fn counter_never_overshoots(target in 1u64..10_000_000, steps in 1u32..100) {
        let authored = format!("{}+", format_grouped(target, ','));
        let mut counter = Counter::new(CounterId(0), authored.clone(), ',');
        prop_assert!(counter.start(steps));

        let mut ticks = 0u32;
        while !counter.tick() {
            ticks += 1;
            let digits: String = counter.text().chars().filter(char::is_ascii_digit).collect();
            let shown: u64 = digits.parse().unwrap();
            prop_assert!(shown < target);
            prop_assert!(ticks <= steps + 1);
        }
        prop_assert_eq!(counter.text(), authored.as_str());
    }

    #[test]
    fn dispatched_adds_count_and_reload(
        adds in prop::collection::vec((0usize..4, 0u32..20_000), 0..40)
    ) {
        let names = ["Widget", "Gadget", "Lamp", "Mug"];
        let store = MemoryStore::new();
        let mut shop =
            Storefront::load(SiteConfig::default(), store.clone(), quiet_logger()).unwrap();

        for (name, cents) in &adds {
            shop.dispatch(Command::add_to_cart(names[*name], price_text(*cents)));
        }

        prop_assert_eq!(shop.view().badge, adds.len() as i64);
        prop_assert!(shop.cart().len() <= names.len());

        let reloaded = Storefront::load(SiteConfig::default(), store, quiet_logger()).unwrap();
        prop_assert_eq!(reloaded.cart(), shop.cart());
    }
}
