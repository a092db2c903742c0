//! The storefront controller.
//!
//! [`Storefront`] owns all page state: the cart and its rendered view, the
//! notification slot, reveal targets, filter cards, form flags, the menu and
//! the last scroll position. Gestures and timer callbacks arrive as
//! [`Command`]s; follow-up work goes back to the host as [`Task`]s.

use std::collections::BTreeSet;

use shopfront_cache::{Cache, KeyValueStore};
use shopfront_commerce::{Cart, CartItem, Money, SnapshotItem};
use shopfront_observability::StructuredLogger;

use crate::cart_view::{self, CartView};
use crate::command::{Command, FieldInput, FormKind, RevealId, Task};
use crate::config::SiteConfig;
use crate::error::InteractError;
use crate::filter::FilterHandler;
use crate::forms::{self, ContactForm, Submission};
use crate::nav::{self, MenuState};
use crate::notification::{NotificationCenter, Toast, ToastKind, ToastTimings};
use crate::reveal::{RevealEngine, RevealSpec};

pub const ITEM_REMOVED: &str = "Item removed from cart";
pub const CART_EMPTY: &str = "Your cart is empty!";
pub const CHECKOUT_STARTED: &str = "Proceeding to checkout...";

/// Page controller over a persistent store `S`.
#[derive(Debug)]
pub struct Storefront<S> {
    config: SiteConfig,
    cache: Cache<S>,
    cart: Cart,
    view: CartView,
    notifications: NotificationCenter,
    reveal: RevealEngine,
    filter: FilterHandler,
    contact: ContactForm,
    menu: MenuState,
    cart_open: bool,
    added: BTreeSet<String>,
    scroll_offset: f64,
    floating_images: usize,
    logger: StructuredLogger,
}

impl<S: KeyValueStore> Storefront<S> {
    /// Build the controller and hydrate the cart from `store`.
    ///
    /// Only an invalid config fails. A malformed snapshot is logged and
    /// replaced by an empty cart; an unavailable store is logged and the
    /// cart lives in memory for the session.
    ///
    /// `config.log_level` only raises the logger's threshold; a stricter level
    /// set by the caller wins.
    pub fn load(
        config: SiteConfig,
        store: S,
        logger: StructuredLogger,
    ) -> Result<Self, InteractError> {
        config.validate()?;
        let logger = logger.at_least(config.log_level).for_component("storefront");
        let cache = Cache::new(store);
        let cart = hydrate(&cache, &config, &logger);
        let view = project(&cart, &config, &logger);

        let timings = ToastTimings {
            enter_delay: config.toast_enter_delay(),
            duration: config.toast_duration(),
            exit: config.toast_exit(),
        };

        Ok(Self {
            notifications: NotificationCenter::new(timings),
            reveal: RevealEngine::new(&config),
            filter: FilterHandler::new(&config),
            contact: ContactForm::new(),
            menu: MenuState::default(),
            cart_open: false,
            added: BTreeSet::new(),
            scroll_offset: 0.0,
            floating_images: 0,
            config,
            cache,
            cart,
            view,
            logger,
        })
    }

    /// Register a reveal target.
    pub fn register_reveal(&mut self, spec: RevealSpec) -> RevealId {
        self.reveal.register(spec)
    }

    /// Register a filter button by its `data-filter` value.
    pub fn add_filter_button(&mut self, value: &str) -> usize {
        self.filter.add_button(value)
    }

    /// Register a product card by its `data-category` value.
    pub fn add_product_card(&mut self, category: Option<&str>) -> usize {
        self.filter.add_card(category)
    }

    /// Declare how many floating hero images the page has.
    pub fn set_floating_images(&mut self, count: usize) {
        self.floating_images = count;
    }

    /// Add one unit of `name`, persist and re-render.
    ///
    /// Returns the item's new quantity.
    pub fn add(&mut self, name: &str, unit_price: Money) -> Result<i64, InteractError> {
        let quantity = self.cart.add(name, unit_price)?.quantity;
        self.persist();
        self.refresh();
        self.logger
            .info_builder("item added to cart")
            .field("product", name)
            .field("quantity", quantity)
            .field("total", self.view.total.clone())
            .emit();
        Ok(quantity)
    }

    /// Remove the item at `position`, persist and re-render. Out-of-range
    /// positions change nothing.
    pub fn remove_at(&mut self, position: usize) -> Option<CartItem> {
        let removed = self.cart.remove_at(position)?;
        self.persist();
        self.refresh();
        self.logger
            .info_builder("item removed from cart")
            .field("product", removed.name.clone())
            .field("position", position)
            .field("total", self.view.total.clone())
            .emit();
        Some(removed)
    }

    /// Empty the cart and drop the persisted snapshot.
    pub fn clear(&mut self) {
        self.cart.clear();
        if let Err(e) = self.cache.delete(&self.config.storage_key) {
            self.logger
                .error_builder("failed to remove cart snapshot")
                .field("error", e.to_string())
                .emit();
        }
        self.refresh();
        self.logger.info("cart cleared");
    }

    pub fn total_quantity(&self) -> i64 {
        self.cart.total_quantity()
    }

    fn persist(&self) {
        let snapshot: Vec<SnapshotItem> = self.cart.snapshot();
        if let Err(e) = self.cache.set(&self.config.storage_key, &snapshot) {
            self.logger
                .error_builder("failed to persist cart")
                .field("key", self.config.storage_key.clone())
                .field("error", e.to_string())
                .emit();
        }
    }

    fn refresh(&mut self) {
        self.view = project(&self.cart, &self.config, &self.logger);
    }

    /// Apply a command and return the tasks the host must run.
    pub fn dispatch(&mut self, command: Command) -> Vec<Task> {
        match command {
            Command::ToggleMenu => {
                self.menu.toggle();
                Vec::new()
            }
            Command::DocumentClick { on_menu } => {
                self.menu.document_click(on_menu);
                Vec::new()
            }
            Command::OpenCart => {
                self.cart_open = true;
                Vec::new()
            }
            Command::CloseCart => {
                self.cart_open = false;
                Vec::new()
            }
            Command::AddToCart { name, price } => self.add_from_control(name, &price),
            Command::RemoveFromCart { position } => match self.remove_at(position) {
                Some(_) => self.notifications.notify(ITEM_REMOVED, ToastKind::Success),
                None => Vec::new(),
            },
            Command::Checkout => self.checkout(),
            Command::CompleteCheckout => {
                self.clear();
                self.cart_open = false;
                Vec::new()
            }
            Command::ResetAddButton { name } => {
                self.added.remove(&name);
                Vec::new()
            }
            Command::ActivateToast(id) => {
                self.notifications.activate(id);
                Vec::new()
            }
            Command::DismissToast(id) => self.notifications.dismiss(id),
            Command::ExpireToast(id) => self.notifications.expire(id),
            Command::RemoveToast(id) => {
                self.notifications.remove(id);
                Vec::new()
            }
            Command::SelectFilter(value) => {
                self.logger
                    .debug_builder("filter selected")
                    .field("filter", value.clone())
                    .emit();
                self.filter.select(&value)
            }
            Command::FadeInCard(index) => {
                self.filter.fade_in(index);
                Vec::new()
            }
            Command::HideCard(index) => {
                self.filter.hide(index);
                Vec::new()
            }
            Command::Intersect { target, ratio } => self.intersect(target, ratio),
            Command::RestoreProgress(id) => {
                self.reveal.restore_progress(id);
                Vec::new()
            }
            Command::CounterTick(id) => self.reveal.counter_tick(id),
            Command::SubmitNewsletter { email } => {
                let submission = forms::submit_newsletter(&email);
                self.logger.debug("newsletter form submitted");
                self.submitted(FormKind::Newsletter, submission)
            }
            Command::SubmitContact { fields } => self.submit_contact(&fields),
            Command::Scroll { offset } => {
                self.scroll_offset = offset;
                Vec::new()
            }
        }
    }

    fn add_from_control(&mut self, name: String, price: &str) -> Vec<Task> {
        let added = Money::parse(price, self.config.currency)
            .map_err(InteractError::from)
            .and_then(|unit_price| self.add(&name, unit_price));
        if let Err(e) = added {
            self.logger
                .warn_builder("add to cart rejected")
                .field("product", name.clone())
                .field("price", price)
                .field("error", e.to_string())
                .emit();
            return self
                .notifications
                .notify(format!("{} could not be added to cart", name), ToastKind::Error);
        }

        let mut tasks = self
            .notifications
            .notify(format!("{} added to cart!", name), ToastKind::Success);
        tasks.push(Task::schedule(
            self.config.added_feedback(),
            Command::ResetAddButton { name: name.clone() },
        ));
        self.added.insert(name);
        tasks
    }

    fn checkout(&mut self) -> Vec<Task> {
        if self.cart.is_empty() {
            return self.notifications.notify(CART_EMPTY, ToastKind::Error);
        }
        self.logger
            .info_builder("checkout started")
            .field("quantity", self.cart.total_quantity())
            .field("total", self.view.total.clone())
            .emit();
        let mut tasks = self
            .notifications
            .notify(CHECKOUT_STARTED, ToastKind::Success);
        tasks.push(Task::schedule(
            self.config.checkout_delay(),
            Command::CompleteCheckout,
        ));
        tasks
    }

    fn intersect(&mut self, target: RevealId, ratio: f64) -> Vec<Task> {
        let was_revealed = self
            .reveal
            .target(target)
            .map_or(true, |t| t.is_revealed());
        let tasks = self.reveal.intersect(target, ratio);
        if !was_revealed && self.reveal.target(target).is_some_and(|t| t.is_revealed()) {
            self.logger
                .debug_builder("target revealed")
                .field("target", target.to_string())
                .field("ratio", ratio)
                .emit();
        }
        tasks
    }

    fn submit_contact(&mut self, fields: &[FieldInput]) -> Vec<Task> {
        let submission = self.contact.submit(fields);
        if !submission.reset {
            self.logger
                .debug_builder("contact form incomplete")
                .field("missing", forms::missing_required(fields).join(","))
                .emit();
        }
        self.submitted(FormKind::Contact, submission)
    }

    fn submitted(&mut self, form: FormKind, submission: Submission) -> Vec<Task> {
        let mut tasks = Vec::new();
        if submission.reset {
            tasks.push(Task::ResetForm(form));
        }
        tasks.extend(
            self.notifications
                .notify(submission.message, submission.kind),
        );
        tasks
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The rendered cart.
    pub fn view(&self) -> &CartView {
        &self.view
    }

    /// The notification on screen.
    pub fn toast(&self) -> Option<&Toast> {
        self.notifications.current()
    }

    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    /// Whether the add-to-cart control for `name` shows its "Added" state.
    pub fn is_added(&self, name: &str) -> bool {
        self.added.contains(name)
    }

    pub fn reveal(&self) -> &RevealEngine {
        &self.reveal
    }

    pub fn filter(&self) -> &FilterHandler {
        &self.filter
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Parallax shift of every floating image at the last scroll position.
    pub fn parallax_offsets(&self) -> Vec<f64> {
        (0..self.floating_images)
            .map(|index| nav::parallax_offset(self.scroll_offset, index))
            .collect()
    }

    pub fn logger(&self) -> &StructuredLogger {
        &self.logger
    }

    pub fn store(&self) -> &S {
        self.cache.store()
    }
}

fn hydrate<S: KeyValueStore>(
    cache: &Cache<S>,
    config: &SiteConfig,
    logger: &StructuredLogger,
) -> Cart {
    let items = match cache.get::<Vec<SnapshotItem>>(&config.storage_key) {
        Ok(Some(items)) => items,
        Ok(None) => return Cart::new(config.currency),
        Err(e) if e.is_malformed() => {
            discard_snapshot(logger, config, &e.to_string());
            return Cart::new(config.currency);
        }
        Err(e) => {
            logger
                .error_builder("cart storage unavailable")
                .field("error", e.to_string())
                .emit();
            return Cart::new(config.currency);
        }
    };

    match Cart::from_snapshot(items, config.currency) {
        Ok(cart) => {
            logger
                .info_builder("cart restored")
                .field("items", cart.len())
                .field("quantity", cart.total_quantity())
                .emit();
            cart
        }
        Err(e) => {
            discard_snapshot(logger, config, &e.to_string());
            Cart::new(config.currency)
        }
    }
}

fn discard_snapshot(logger: &StructuredLogger, config: &SiteConfig, error: &str) {
    logger
        .warn_builder("malformed cart snapshot, starting empty")
        .field("key", config.storage_key.clone())
        .field("error", error)
        .emit();
}

fn project(cart: &Cart, config: &SiteConfig, logger: &StructuredLogger) -> CartView {
    cart_view::render(cart, &config.placeholder_image).unwrap_or_else(|e| {
        logger
            .error_builder("cart total unavailable")
            .field("error", e.to_string())
            .emit();
        cart_view::empty(cart)
    })
}
