//! Header, mobile menu, cart sidebar and the notification.

use leptos::prelude::*;
use shopfront_interact::cart_view::CartRow;
use shopfront_interact::nav;
use shopfront_interact::Command;

use super::Runtime;
use crate::content::NAV_LINKS;

fn nav_links(page_file: &str, class: &'static str) -> impl IntoView {
    NAV_LINKS
        .iter()
        .map(|(href, label)| {
            let active = nav::is_active_link(href, page_file);
            view! {
                <a href=*href class=class class:active=active>
                    {*label}
                </a>
            }
        })
        .collect_view()
}

#[component]
pub fn Header(page_file: String) -> impl IntoView {
    let runtime = expect_context::<Runtime>();
    let badge = move || runtime.read(|shop| shop.view().badge);
    let icon = move || format!("fas {}", runtime.read(|shop| shop.menu().icon().class()));

    view! {
        <header class="header">
            <nav class="navbar">
                <a href="index.html" class="logo">"Shopfront"</a>
                <div class="nav-links">{nav_links(&page_file, "nav-link")}</div>
                <div class="nav-actions">
                    <button class="cart-btn" on:click=move |_| runtime.send(Command::OpenCart)>
                        <i class="fas fa-shopping-cart"></i>
                        <span class="cart-count">{badge}</span>
                    </button>
                    <button
                        id="hamburger"
                        class="hamburger"
                        on:click=move |_| runtime.send(Command::ToggleMenu)
                    >
                        <i class=icon></i>
                    </button>
                </div>
            </nav>
        </header>
    }
}

#[component]
pub fn MobileMenu(page_file: String) -> impl IntoView {
    let runtime = expect_context::<Runtime>();
    let open = move || runtime.read(|shop| shop.menu().is_open());

    view! {
        <div id="mobileMenu" class="mobile-menu" class:active=open>
            {nav_links(&page_file, "mobile-link")}
        </div>
    }
}

#[component]
fn CartRowView(row: CartRow) -> impl IntoView {
    let runtime = expect_context::<Runtime>();
    let position = row.position;

    view! {
        <div class="cart-item">
            <div class="cart-item-img">
                <img src=row.image_url alt=row.image_alt />
            </div>
            <div class="cart-item-info">
                <div class="cart-item-name">{row.name}</div>
                <div class="cart-item-price">{row.price_line}</div>
            </div>
            <button
                class="cart-item-remove"
                data-index=position.to_string()
                on:click=move |_| runtime.send(Command::RemoveFromCart { position })
            >
                <i class="fas fa-trash"></i>
            </button>
        </div>
    }
}

#[component]
pub fn CartSidebar() -> impl IntoView {
    let runtime = expect_context::<Runtime>();
    let open = move || runtime.read(|shop| shop.is_cart_open());
    let total = move || runtime.read(|shop| shop.view().total.clone());

    // Fully re-rendered on every cart change.
    let items = move || {
        let rows = runtime.read(|shop| shop.view().rows().to_vec());
        if rows.is_empty() {
            view! {
                <div id="cartEmpty" class="cart-empty">
                    <i class="fas fa-shopping-bag"></i>
                    <p>"Your cart is empty"</p>
                </div>
            }
            .into_any()
        } else {
            rows.into_iter()
                .map(|row| view! { <CartRowView row /> })
                .collect_view()
                .into_any()
        }
    };

    view! {
        <div
            id="cartOverlay"
            class="cart-overlay"
            class:active=open
            on:click=move |_| runtime.send(Command::CloseCart)
        ></div>
        <aside id="cartSidebar" class="cart-sidebar" class:active=open>
            <div class="cart-header">
                <h3>"Your Cart"</h3>
                <button
                    id="cartClose"
                    class="cart-close"
                    on:click=move |_| runtime.send(Command::CloseCart)
                >
                    <i class="fas fa-times"></i>
                </button>
            </div>
            <div id="cartItems" class="cart-items">{items}</div>
            <div class="cart-footer">
                <div class="cart-total">
                    <span>"Total:"</span>
                    <span id="cartTotal">{total}</span>
                </div>
                <button class="btn-checkout" on:click=move |_| runtime.send(Command::Checkout)>
                    "Checkout"
                </button>
            </div>
        </aside>
    }
}

#[component]
pub fn ToastView() -> impl IntoView {
    let runtime = expect_context::<Runtime>();

    move || {
        runtime.read(|shop| shop.toast().cloned()).map(|toast| {
            let id = toast.id;
            view! {
                <div class=format!("toast {}", toast.kind.class()) class:active=toast.is_active()>
                    <div class="toast-icon">
                        <i class=format!("fas {}", toast.kind.icon())></i>
                    </div>
                    <div class="toast-message">{toast.message.clone()}</div>
                    <button
                        class="toast-close"
                        on:click=move |_| runtime.send(Command::DismissToast(id))
                    >
                        <i class="fas fa-times"></i>
                    </button>
                </div>
            }
        })
    }
}
