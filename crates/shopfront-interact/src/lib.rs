//! Storefront controller.
//!
//! Everything interactive on the storefront pages lives behind one
//! [`Storefront`] value:
//!
//! - **Cart**: add, remove, totals, persisted on every mutation
//! - **Notifications**: a single auto-dismissing toast slot
//! - **Reveal**: one-shot scroll animations with progress fills and counters
//! - **Filter**: product category filtering with fade transitions
//! - **Forms**: newsletter and contact submission
//! - **Navigation**: mobile menu, active links, floating image parallax
//!
//! The controller never touches the DOM or a clock. The host feeds it
//! [`Command`]s and runs the [`Task`]s it returns; tests use [`TaskQueue`].
//!
//! # Example
//!
//! ```
//! use shopfront_interact::prelude::*;
//! use shopfront_cache::MemoryStore;
//! use shopfront_observability::{SessionId, StructuredLogger};
//!
//! let logger = StructuredLogger::new(SessionId::from_string("doc"));
//! let mut shop = Storefront::load(SiteConfig::default(), MemoryStore::new(), logger).unwrap();
//! let mut queue = TaskQueue::new();
//!
//! queue.push_all(shop.dispatch(Command::add_to_cart("Widget", "9.99")));
//! queue.push_all(shop.dispatch(Command::add_to_cart("Widget", "9.99")));
//! queue.push_all(shop.dispatch(Command::add_to_cart("Gadget", "4.50")));
//!
//! assert_eq!(shop.view().badge, 3);
//! assert_eq!(shop.view().total, "$24.48");
//! ```

pub mod cart_view;
pub mod command;
pub mod config;
pub mod counter;
pub mod error;
pub mod filter;
pub mod forms;
pub mod nav;
pub mod notification;
pub mod queue;
pub mod reveal;
pub mod storefront;

pub use command::{Command, FieldInput, FormKind, Task};
pub use config::SiteConfig;
pub use error::InteractError;
pub use queue::TaskQueue;
pub use storefront::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart_view::{CartBody, CartRow, CartView};
    pub use crate::command::{
        Command, CounterId, FieldInput, FormKind, RevealId, Task, TimerId, ToastId,
    };
    pub use crate::config::SiteConfig;
    pub use crate::error::InteractError;
    pub use crate::filter::{CardState, FilterHandler};
    pub use crate::notification::{Toast, ToastKind, ToastPhase};
    pub use crate::queue::TaskQueue;
    pub use crate::reveal::{RevealSpec, RevealState};
    pub use crate::storefront::Storefront;
}
