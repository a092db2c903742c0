//! Product category filtering.

use std::time::Duration;

use shopfront_commerce::CategoryFilter;

use crate::command::{Command, Task};
use crate::config::SiteConfig;

/// Display state of one product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardState {
    category: Option<String>,
    displayed: bool,
    opaque: bool,
}

impl CardState {
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Whether the card takes part in layout.
    pub fn is_displayed(&self) -> bool {
        self.displayed
    }

    /// Whether the card is fully faded in.
    pub fn is_opaque(&self) -> bool {
        self.opaque
    }

    /// Displayed and faded in.
    pub fn is_visible(&self) -> bool {
        self.displayed && self.opaque
    }
}

/// Filter buttons and the cards they control.
///
/// A page without filter buttons keeps the handler inert.
#[derive(Debug, Clone)]
pub struct FilterHandler {
    active: CategoryFilter,
    buttons: Vec<CategoryFilter>,
    cards: Vec<CardState>,
    fade_in_delay: Duration,
    fade_out: Duration,
}

impl FilterHandler {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            active: CategoryFilter::All,
            buttons: Vec::new(),
            cards: Vec::new(),
            fade_in_delay: config.filter_fade_in_delay(),
            fade_out: config.filter_fade(),
        }
    }

    /// Register a filter button by its `data-filter` value.
    pub fn add_button(&mut self, value: &str) -> usize {
        self.buttons.push(CategoryFilter::parse(value));
        self.buttons.len() - 1
    }

    /// Register a product card by its `data-category` value.
    pub fn add_card(&mut self, category: Option<&str>) -> usize {
        self.cards.push(CardState {
            category: category.map(str::to_string),
            displayed: true,
            opaque: true,
        });
        self.cards.len() - 1
    }

    pub fn active(&self) -> &CategoryFilter {
        &self.active
    }

    pub fn buttons(&self) -> &[CategoryFilter] {
        &self.buttons
    }

    pub fn cards(&self) -> &[CardState] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&CardState> {
        self.cards.get(index)
    }

    /// Whether the button at `index` carries the active class.
    pub fn is_button_active(&self, index: usize) -> bool {
        self.buttons.get(index) == Some(&self.active)
    }

    /// Activate a filter. Matching cards are displayed and fade in; the rest
    /// fade out and are hidden once the fade is over.
    pub fn select(&mut self, value: &str) -> Vec<Task> {
        if self.buttons.is_empty() {
            return Vec::new();
        }
        self.active = CategoryFilter::parse(value);

        let mut tasks = Vec::with_capacity(self.cards.len());
        for (index, card) in self.cards.iter_mut().enumerate() {
            if self.active.matches(card.category.as_deref()) {
                card.displayed = true;
                tasks.push(Task::schedule(self.fade_in_delay, Command::FadeInCard(index)));
            } else {
                card.opaque = false;
                tasks.push(Task::schedule(self.fade_out, Command::HideCard(index)));
            }
        }
        tasks
    }

    pub fn fade_in(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.opaque = true;
        }
    }

    /// Take a card out of layout. A later selection does not cancel this.
    pub fn hide(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.displayed = false;
        }
    }
}
