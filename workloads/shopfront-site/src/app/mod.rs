//! Browser app: Leptos CSR over the storefront controller.

use std::collections::HashMap;

use leptos::prelude::*;
use shopfront_cache::LocalStore;
use shopfront_interact::command::TimerId;
use shopfront_interact::nav;
use shopfront_interact::{Command, Storefront, Task};
use shopfront_observability::LogSink;
use wasm_bindgen::prelude::*;

mod dom;
mod layout;
mod pages;

use crate::boot;
use crate::content::{self, Page, PageLayout};
use layout::{CartSidebar, Header, MobileMenu, ToastView};
use pages::{ContactPage, HomePage, ProductsPage};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let pathname = window().location().pathname().unwrap_or_default();
    let page_file = nav::current_page(&pathname).to_string();

    let shop = match boot::storefront(&page_file, LocalStore::new(), LogSink::Console) {
        Ok(shop) => shop,
        Err(e) => {
            web_sys::console::error_1(&JsValue::from_str(&format!("{e:#}")));
            return;
        }
    };

    mount_to_body(move || view! { <App shop page_file /> });
}

/// Handle to the controller shared by every component.
///
/// `version` bumps after each dispatch so views reading through
/// [`Runtime::read`] re-run.
#[derive(Clone, Copy)]
pub struct Runtime {
    shop: StoredValue<Storefront<LocalStore>>,
    version: RwSignal<u64>,
    intervals: StoredValue<HashMap<TimerId, IntervalHandle>>,
}

impl Runtime {
    fn new(shop: Storefront<LocalStore>) -> Self {
        Self {
            shop: StoredValue::new(shop),
            version: RwSignal::new(0),
            intervals: StoredValue::new(HashMap::new()),
        }
    }

    /// Dispatch a command and run the tasks it returns.
    pub fn send(self, command: Command) {
        let tasks = self
            .shop
            .try_update_value(|shop| shop.dispatch(command))
            .unwrap_or_default();
        self.version.update(|v| *v += 1);
        for task in tasks {
            self.run(task);
        }
    }

    /// Read controller state, tracking changes.
    pub fn read<T>(self, f: impl FnOnce(&Storefront<LocalStore>) -> T) -> T {
        self.version.track();
        self.shop.with_value(f)
    }

    fn run(self, task: Task) {
        match task {
            Task::Schedule { delay, command } => {
                set_timeout(move || self.send(command), delay);
            }
            Task::StartInterval {
                timer,
                every,
                command,
            } => match set_interval_with_handle(move || self.send(command.clone()), every) {
                Ok(handle) => self.intervals.update_value(|intervals| {
                    if let Some(previous) = intervals.insert(timer, handle) {
                        previous.clear();
                    }
                }),
                Err(e) => self.log_js_error("failed to start interval", &e),
            },
            Task::CancelInterval { timer } => {
                let handle = self
                    .intervals
                    .try_update_value(|intervals| intervals.remove(&timer))
                    .flatten();
                if let Some(handle) = handle {
                    handle.clear();
                }
            }
            Task::ResetForm(form) => {
                if let Err(e) = dom::reset_form(form) {
                    self.log_js_error("failed to reset form", &e);
                }
            }
        }
    }

    fn register(self, page: Page) -> PageLayout {
        self.shop
            .try_update_value(|shop| content::register(shop, page))
            .unwrap_or_default()
    }

    fn log_js_error(self, message: &str, error: &JsValue) {
        self.shop.with_value(|shop| {
            shop.logger()
                .error_builder(message)
                .field("error", format!("{:?}", error))
                .emit()
        });
    }
}

#[component]
fn App(shop: Storefront<LocalStore>, page_file: String) -> impl IntoView {
    let threshold = shop.config().reveal_threshold;
    let runtime = Runtime::new(shop);
    let layout = runtime.register(Page::from_file(&page_file));
    provide_context(runtime);

    dom::listen_window(runtime);
    Effect::new(move |_| {
        if let Err(e) = dom::observe_reveals(runtime, threshold) {
            runtime.log_js_error("reveal observer unavailable", &e);
        }
    });

    let main = match layout.page {
        Page::Home => view! { <HomePage layout /> }.into_any(),
        Page::Products => view! { <ProductsPage layout /> }.into_any(),
        Page::Contact => view! { <ContactPage /> }.into_any(),
        Page::Other => ().into_any(),
    };

    view! {
        <Header page_file=page_file.clone() />
        <MobileMenu page_file />
        <main>{main}</main>
        <CartSidebar />
        <ToastView />
    }
}
