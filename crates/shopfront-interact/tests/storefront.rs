//! End-to-end behavior of the storefront controller on a virtual clock.

use std::time::Duration;

use shopfront_cache::{KeyValueStore, LocalStore, MemoryStore};
use shopfront_interact::prelude::*;
use shopfront_interact::forms::{CONTACT_INCOMPLETE, CONTACT_SENT, NEWSLETTER_THANKS};
use shopfront_interact::storefront::{CART_EMPTY, CHECKOUT_STARTED, ITEM_REMOVED};
use shopfront_observability::{LogLevel, LogSink, MemorySink, SessionId, StructuredLogger};

struct Harness {
    shop: Storefront<MemoryStore>,
    queue: TaskQueue,
    logs: MemorySink,
}

impl Harness {
    fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }

    fn with_store(store: MemoryStore) -> Self {
        let logs = MemorySink::new();
        let logger = StructuredLogger::new(SessionId::from_string("it"))
            .with_page("index.html")
            .with_min_level(LogLevel::Debug)
            .with_sink(LogSink::Memory(logs.clone()));
        let config = SiteConfig::default().with_log_level(LogLevel::Debug);
        Self {
            shop: Storefront::load(config, store, logger).unwrap(),
            queue: TaskQueue::new(),
            logs,
        }
    }

    fn send(&mut self, command: Command) {
        let tasks = self.shop.dispatch(command);
        self.queue.push_all(tasks);
    }

    fn advance(&mut self, ms: u64) {
        let shop = &mut self.shop;
        self.queue
            .advance(Duration::from_millis(ms), |command| shop.dispatch(command));
    }

    fn toast_message(&self) -> Option<String> {
        self.shop.toast().map(|t| t.message.clone())
    }
}

#[test]
fn widget_gadget_totals() {
    let mut h = Harness::new();
    h.send(Command::add_to_cart("Widget", "9.99"));
    h.send(Command::add_to_cart("Widget", "9.99"));
    h.send(Command::add_to_cart("Gadget", "4.50"));

    let snapshot = h.shop.cart().snapshot();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].name, "Widget");
    assert_eq!(snapshot[0].quantity, 2);
    assert!((snapshot[0].price - 9.99).abs() < 1e-9);
    assert_eq!(snapshot[1].name, "Gadget");
    assert_eq!(snapshot[1].quantity, 1);

    assert_eq!(h.shop.total_quantity(), 3);
    let view = h.shop.view();
    assert_eq!(view.badge, 3);
    assert_eq!(view.total, "$24.48");
    assert_eq!(view.rows()[0].price_line, "$9.99 × 2");
    assert_eq!(h.toast_message().as_deref(), Some("Gadget added to cart!"));
}

#[test]
fn removing_last_item_shows_placeholder() {
    let mut h = Harness::new();
    h.send(Command::add_to_cart("Lamp", "25.00"));
    assert!(!h.shop.view().is_empty());

    h.send(Command::RemoveFromCart { position: 0 });
    assert!(h.shop.cart().is_empty());
    assert!(h.shop.view().is_empty());
    assert_eq!(h.shop.view().body, CartBody::Empty);
    assert_eq!(h.shop.view().total, "$0.00");
    assert_eq!(h.toast_message().as_deref(), Some(ITEM_REMOVED));
    assert_eq!(h.shop.store().get("cart").unwrap().as_deref(), Some("[]"));
}

#[test]
fn cart_survives_reload() {
    let store = MemoryStore::new();
    let mut first = Harness::with_store(store.clone());
    first.send(Command::add_to_cart("Widget", "9.99"));
    first.send(Command::add_to_cart("Gadget", "4.50"));
    first.send(Command::add_to_cart("Widget", "9.99"));
    first.send(Command::RemoveFromCart { position: 1 });

    let second = Harness::with_store(store);
    assert_eq!(second.shop.cart(), first.shop.cart());
    assert_eq!(second.shop.view(), first.shop.view());
    assert!(second.logs.contains("cart restored"));
}

#[test]
fn malformed_snapshot_starts_empty() {
    let store = MemoryStore::with_entry("cart", "{not json");
    let h = Harness::with_store(store);
    assert!(h.shop.cart().is_empty());
    assert!(h.shop.view().is_empty());

    let warnings = h.logs.at_level(LogLevel::Warn);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("malformed cart snapshot"));
    assert_eq!(warnings[0].component.as_deref(), Some("storefront"));
}

#[test]
fn negative_price_in_snapshot_starts_empty() {
    let store = MemoryStore::with_entry("cart", r#"[{"name":"Widget","price":-1,"quantity":1}]"#);
    let h = Harness::with_store(store);
    assert!(h.shop.cart().is_empty());
    assert!(h.logs.contains("malformed cart snapshot"));
}

#[test]
fn invalid_price_is_rejected() {
    let mut h = Harness::new();
    for price in ["abc", "-5", "NaN"] {
        h.send(Command::add_to_cart("Widget", price));
        let toast = h.shop.toast().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
    }
    assert!(h.shop.cart().is_empty());
    assert!(!h.shop.is_added("Widget"));
    assert_eq!(h.logs.at_level(LogLevel::Warn).len(), 3);
    assert_eq!(h.shop.store().get("cart").unwrap(), None);
}

#[test]
fn overflowing_total_is_rejected() {
    let mut h = Harness::new();
    h.send(Command::add_to_cart("Big", "5e16"));
    h.send(Command::add_to_cart("Big", "5e16"));

    assert_eq!(h.shop.total_quantity(), 1);
    let view = h.shop.view();
    assert_eq!(view.badge, h.shop.total_quantity());
    assert_eq!(view.rows().len(), 1);
    assert_eq!(view.total, "$50000000000000000.00");
    assert_eq!(h.toast_message().as_deref(), Some("Big could not be added to cart"));
    assert!(h.logs.at_level(LogLevel::Error).is_empty());

    let raw = h.shop.store().get("cart").unwrap().unwrap();
    assert!(raw.contains(r#""quantity":1"#));
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn unavailable_storage_keeps_cart_in_memory() {
    let logs = MemorySink::new();
    let logger = StructuredLogger::new(SessionId::from_string("it"))
        .with_sink(LogSink::Memory(logs.clone()));
    let mut shop = Storefront::load(SiteConfig::default(), LocalStore::new(), logger).unwrap();
    assert!(shop.cart().is_empty());

    shop.dispatch(Command::add_to_cart("Widget", "9.99"));
    assert_eq!(shop.total_quantity(), 1);
    assert_eq!(shop.view().badge, 1);
    assert_eq!(shop.view().total, "$9.99");
    assert_eq!(shop.toast().map(|t| t.kind), Some(ToastKind::Success));

    let errors = logs.at_level(LogLevel::Error);
    assert!(errors.iter().any(|e| e.message == "failed to persist cart"));
}

#[test]
fn config_level_does_not_lower_caller_level() {
    let logs = MemorySink::new();
    let logger = StructuredLogger::new(SessionId::from_string("it"))
        .with_min_level(LogLevel::Error)
        .with_sink(LogSink::Memory(logs.clone()));
    let config = SiteConfig::default().with_log_level(LogLevel::Debug);
    let mut shop = Storefront::load(config, MemoryStore::new(), logger).unwrap();

    shop.dispatch(Command::add_to_cart("Widget", "9.99"));
    assert_eq!(shop.total_quantity(), 1);
    assert!(logs.entries().is_empty());
}

#[test]
fn added_feedback_reverts() {
    let mut h = Harness::new();
    h.send(Command::add_to_cart("Widget", "9.99"));
    assert!(h.shop.is_added("Widget"));
    h.advance(1999);
    assert!(h.shop.is_added("Widget"));
    h.advance(1);
    assert!(!h.shop.is_added("Widget"));
}

#[test]
fn toast_lifecycle_through_dispatch() {
    let mut h = Harness::new();
    h.send(Command::add_to_cart("Widget", "9.99"));
    assert_eq!(h.shop.toast().unwrap().phase, ToastPhase::Entering);
    h.advance(10);
    assert!(h.shop.toast().unwrap().is_active());

    let id = h.shop.toast().unwrap().id;
    h.send(Command::DismissToast(id));
    assert_eq!(h.shop.toast().unwrap().phase, ToastPhase::Leaving);
    h.advance(300);
    assert!(h.shop.toast().is_none());

    // The auto-expiry still fires and changes nothing.
    h.advance(5000);
    assert!(h.shop.toast().is_none());
}

#[test]
fn counter_reaches_exact_target() {
    let mut h = Harness::new();
    let target = h
        .shop
        .register_reveal(RevealSpec::new().with_progress("75%").with_counter("1000"));
    let counter = h.shop.reveal().target(target).unwrap().counters()[0];

    h.send(Command::Intersect { target, ratio: 0.05 });
    assert_eq!(
        h.shop.reveal().target(target).unwrap().state(),
        RevealState::Pending
    );

    h.send(Command::Intersect { target, ratio: 0.1 });
    assert_eq!(h.shop.reveal().counter_text(counter), Some("0"));

    let mut seen = Vec::new();
    for _ in 0..60 {
        h.advance(30);
        seen.push(h.shop.reveal().counter_text(counter).unwrap().to_string());
    }
    for text in &seen {
        let value: u64 = text.replace(',', "").parse().unwrap();
        assert!(value <= 1000);
    }
    assert_eq!(seen.last().map(String::as_str), Some("1000"));
    assert!(h.queue.is_idle());
    assert_eq!(h.queue.cancelled_timers().len(), 1);

    let fill = h.shop.reveal().target(target).unwrap().progress().unwrap();
    assert_eq!(fill.width(), "75%");
    assert!(h.logs.contains("target revealed"));
}

#[test]
fn currency_range_stays_verbatim() {
    let mut h = Harness::new();
    let target = h
        .shop
        .register_reveal(RevealSpec::new().with_counter("$10-20"));
    let counter = h.shop.reveal().target(target).unwrap().counters()[0];

    h.send(Command::Intersect { target, ratio: 0.5 });
    assert!(h.queue.is_idle());
    let counter = h.shop.reveal().counter(counter).unwrap();
    assert!(counter.is_counted());
    assert_eq!(counter.text(), "$10-20");
}

#[test]
fn filter_all_and_category() {
    let mut h = Harness::new();
    for value in ["all", "kitchen", "garden"] {
        h.shop.add_filter_button(value);
    }
    for category in ["kitchen", "garden", "kitchen"] {
        h.shop.add_product_card(Some(category));
    }

    h.send(Command::SelectFilter("kitchen".into()));
    h.advance(10);
    assert!(h.shop.filter().card(0).unwrap().is_visible());
    assert!(h.shop.filter().card(1).unwrap().is_displayed());
    h.advance(290);
    assert!(!h.shop.filter().card(1).unwrap().is_displayed());
    assert!(h.shop.filter().card(2).unwrap().is_visible());
    assert!(h.shop.filter().is_button_active(1));

    h.send(Command::SelectFilter("all".into()));
    h.advance(10);
    assert!(h.shop.filter().cards().iter().all(CardState::is_visible));
    assert!(h.shop.filter().is_button_active(0));
    assert!(!h.shop.filter().is_button_active(1));
}

#[test]
fn checkout_empty_cart() {
    let mut h = Harness::new();
    h.send(Command::Checkout);
    let toast = h.shop.toast().unwrap();
    assert_eq!(toast.message, CART_EMPTY);
    assert_eq!(toast.kind, ToastKind::Error);
}

#[test]
fn checkout_clears_after_delay() {
    let mut h = Harness::new();
    h.send(Command::add_to_cart("Widget", "9.99"));
    h.send(Command::OpenCart);
    h.send(Command::Checkout);
    assert_eq!(h.toast_message().as_deref(), Some(CHECKOUT_STARTED));

    h.advance(1499);
    assert_eq!(h.shop.total_quantity(), 1);
    assert!(h.shop.is_cart_open());

    h.advance(1);
    assert!(h.shop.cart().is_empty());
    assert!(h.shop.view().is_empty());
    assert!(!h.shop.is_cart_open());
    assert_eq!(h.shop.store().get("cart").unwrap(), None);
}

#[test]
fn newsletter_resets_form() {
    let mut h = Harness::new();
    h.send(Command::SubmitNewsletter {
        email: "ada@example.com".into(),
    });
    assert_eq!(h.toast_message().as_deref(), Some(NEWSLETTER_THANKS));
    assert_eq!(h.queue.form_resets(), &[FormKind::Newsletter]);
}

#[test]
fn contact_form_validation() {
    let mut h = Harness::new();
    h.send(Command::SubmitContact {
        fields: vec![
            FieldInput::required("name", "Ada"),
            FieldInput::required("email", ""),
            FieldInput::optional("subject", ""),
        ],
    });
    assert_eq!(h.toast_message().as_deref(), Some(CONTACT_INCOMPLETE));
    assert!(h.shop.contact().is_flagged("email"));
    assert!(!h.shop.contact().is_flagged("subject"));
    assert!(h.queue.form_resets().is_empty());

    h.send(Command::SubmitContact {
        fields: vec![
            FieldInput::required("name", "Ada"),
            FieldInput::required("email", "ada@example.com"),
        ],
    });
    assert_eq!(h.toast_message().as_deref(), Some(CONTACT_SENT));
    assert!(!h.shop.contact().is_flagged("email"));
    assert_eq!(h.queue.form_resets(), &[FormKind::Contact]);
}

#[test]
fn mobile_menu_icon() {
    let mut h = Harness::new();
    h.send(Command::ToggleMenu);
    assert_eq!(h.shop.menu().icon().class(), "fa-times");
    h.send(Command::ToggleMenu);
    assert_eq!(h.shop.menu().icon().class(), "fa-bars");
    h.send(Command::ToggleMenu);
    h.send(Command::DocumentClick { on_menu: false });
    assert!(!h.shop.menu().is_open());
}
