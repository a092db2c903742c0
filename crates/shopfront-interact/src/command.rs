//! Commands consumed by the storefront and tasks it hands back to the host.
//!
//! Every user gesture and every timer callback is a [`Command`]. Dispatching
//! one mutates the storefront and returns [`Task`]s: future commands the host
//! must schedule, intervals to start or stop, and forms to reset.

use std::fmt;
use std::time::Duration;

/// Identifies a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

/// Identifies a registered reveal target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevealId(pub usize);

/// Identifies a counter inside a reveal target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CounterId(pub usize);

/// Identifies a repeating timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

macro_rules! display_id {
    ($($name:ident => $prefix:literal),+ $(,)?) => {
        $(
            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, concat!($prefix, "-{}"), self.0)
                }
            }
        )+
    };
}

display_id! {
    ToastId => "toast",
    RevealId => "reveal",
    CounterId => "counter",
    TimerId => "timer",
}

/// The forms the storefront handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Newsletter,
    Contact,
}

impl FormKind {
    /// The element id of the form.
    pub fn element_id(&self) -> &'static str {
        match self {
            FormKind::Newsletter => "newsletterForm",
            FormKind::Contact => "contactForm",
        }
    }
}

/// A submitted form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInput {
    pub name: String,
    pub value: String,
    pub required: bool,
}

impl FieldInput {
    /// A required field.
    pub fn required(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            required: true,
        }
    }

    /// An optional field.
    pub fn optional(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            required: false,
        }
    }
}

/// Input to [`crate::Storefront::dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Hamburger clicked.
    ToggleMenu,
    /// A click anywhere in the document. `on_menu` is true when the target
    /// is inside the hamburger or the mobile menu.
    DocumentClick { on_menu: bool },
    /// Cart button clicked.
    OpenCart,
    /// Cart close button or overlay clicked.
    CloseCart,
    /// Add-to-cart control clicked, carrying its `data-product` and
    /// `data-price` attribute values.
    AddToCart { name: String, price: String },
    /// Remove control of the cart row at `position` clicked.
    RemoveFromCart { position: usize },
    /// Checkout button clicked.
    Checkout,
    /// Simulated checkout finished.
    CompleteCheckout,
    /// Add-to-cart button for `name` leaves its "Added" state.
    ResetAddButton { name: String },
    /// Notification enter transition starts.
    ActivateToast(ToastId),
    /// Notification close control clicked.
    DismissToast(ToastId),
    /// Notification lifetime elapsed.
    ExpireToast(ToastId),
    /// Notification exit transition finished.
    RemoveToast(ToastId),
    /// Filter button with `data-filter` value clicked.
    SelectFilter(String),
    /// Shown card starts fading in.
    FadeInCard(usize),
    /// Faded-out card is taken out of the layout.
    HideCard(usize),
    /// Intersection observer reported a visible ratio for a target.
    Intersect { target: RevealId, ratio: f64 },
    /// Progress fill returns to its authored width.
    RestoreProgress(RevealId),
    /// Counter interval fired.
    CounterTick(CounterId),
    /// Newsletter form submitted.
    SubmitNewsletter { email: String },
    /// Contact form submitted.
    SubmitContact { fields: Vec<FieldInput> },
    /// Window scrolled to `offset` pixels.
    Scroll { offset: f64 },
}

impl Command {
    /// Add-to-cart command from attribute values.
    pub fn add_to_cart(name: impl Into<String>, price: impl Into<String>) -> Self {
        Command::AddToCart {
            name: name.into(),
            price: price.into(),
        }
    }
}

/// Work the host performs on behalf of the storefront.
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    /// Dispatch `command` once after `delay`.
    Schedule { delay: Duration, command: Command },
    /// Dispatch `command` every `every` until cancelled.
    StartInterval {
        timer: TimerId,
        every: Duration,
        command: Command,
    },
    /// Stop a repeating timer.
    CancelInterval { timer: TimerId },
    /// Reset a form's fields.
    ResetForm(FormKind),
}

impl Task {
    pub fn schedule(delay: Duration, command: Command) -> Self {
        Task::Schedule { delay, command }
    }

    /// The command a one-shot task will dispatch.
    pub fn scheduled_command(&self) -> Option<&Command> {
        match self {
            Task::Schedule { command, .. } => Some(command),
            _ => None,
        }
    }
}
