//! Page bodies.

use leptos::ev;
use leptos::prelude::*;
use shopfront_commerce::Product;
use shopfront_interact::command::RevealId;
use shopfront_interact::{nav, Command};

use super::dom;
use super::Runtime;
use crate::content::{PageLayout, FILTERS, FLOATING_IMAGES, HIGHLIGHTS, STATS};

const ERROR_BORDER: &str = "#f44336";

#[component]
fn ProductCard(product: Product, card: Option<usize>) -> impl IntoView {
    let runtime = expect_context::<Runtime>();
    let name = product.name.clone();
    let price = product.price_attribute();

    let displayed = move || {
        card.map_or(true, |index| {
            runtime.read(|shop| shop.filter().card(index).map_or(true, |c| c.is_displayed()))
        })
    };
    let opaque = move || {
        card.map_or(true, |index| {
            runtime.read(|shop| shop.filter().card(index).map_or(true, |c| c.is_opaque()))
        })
    };
    let display = move || if displayed() { "block" } else { "none" };
    let opacity = move || if opaque() { "1" } else { "0" };
    let shift = move || {
        if opaque() {
            "translateY(0)"
        } else {
            "translateY(20px)"
        }
    };

    let added = {
        let name = name.clone();
        move || runtime.read(|shop| shop.is_added(&name))
    };
    let label = move || {
        if added() {
            view! { <i class="fas fa-check"></i> " Added" }.into_any()
        } else {
            view! { <i class="fas fa-plus"></i> " Add to Cart" }.into_any()
        }
    };

    let on_add = {
        let name = name.clone();
        let price = price.clone();
        move |_| runtime.send(Command::add_to_cart(name.clone(), price.clone()))
    };

    view! {
        <div
            class="product-card"
            data-category=product.category.clone().unwrap_or_default()
            style:display=display
            style:opacity=opacity
            style:transform=shift
        >
            <img src=product.image_url.clone().unwrap_or_default() alt=name.clone() />
            <h3>{name.clone()}</h3>
            <p class="product-description">{product.description.clone().unwrap_or_default()}</p>
            <div class="product-footer">
                <span class="product-price">{product.price.display()}</span>
                <button
                    class="btn-add-to-cart"
                    data-product=name.clone()
                    data-price=price.clone()
                    on:click=on_add
                >
                    {label}
                </button>
            </div>
        </div>
    }
}

fn product_grid(products: Vec<(Option<usize>, Product)>) -> impl IntoView {
    products
        .into_iter()
        .map(|(card, product)| view! { <ProductCard product card /> })
        .collect_view()
}

#[component]
fn Stats(target: RevealId) -> impl IntoView {
    let runtime = expect_context::<Runtime>();
    let revealed = move || {
        runtime.read(|shop| shop.reveal().target(target).is_some_and(|t| t.is_revealed()))
    };
    let counters = runtime.read(|shop| {
        shop.reveal()
            .target(target)
            .map(|t| t.counters().to_vec())
            .unwrap_or_default()
    });

    let items = STATS
        .into_iter()
        .zip(counters)
        .map(|(stat, counter)| {
            let text = move || {
                runtime.read(|shop| {
                    shop.reveal()
                        .counter_text(counter)
                        .unwrap_or(stat.value)
                        .to_string()
                })
            };
            let counted = move || {
                runtime.read(|shop| shop.reveal().counter(counter).is_some_and(|c| c.is_counted()))
            };
            view! {
                <div class="stat">
                    <span class="stat-number" data-counted=move || counted().to_string()>
                        {text}
                    </span>
                    <span class="stat-label">{stat.label}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="stats reveal" class:revealed=revealed data-reveal=target.0.to_string()>
            {items}
        </section>
    }
}

#[component]
fn Highlights(targets: Vec<RevealId>) -> impl IntoView {
    let runtime = expect_context::<Runtime>();
    let bars = HIGHLIGHTS
        .into_iter()
        .zip(targets)
        .map(|(highlight, target)| {
            let width = move || {
                runtime.read(|shop| {
                    shop.reveal()
                        .target(target)
                        .and_then(|t| t.progress())
                        .map_or(highlight.width.to_string(), |fill| fill.width().to_string())
                })
            };
            let revealed = move || {
                runtime.read(|shop| shop.reveal().target(target).is_some_and(|t| t.is_revealed()))
            };
            let delay = runtime
                .read(|shop| shop.reveal().target(target).and_then(|t| t.animation_delay()))
                .unwrap_or_default();
            view! {
                <div
                    class="highlight reveal"
                    class:revealed=revealed
                    style:animation-delay=delay
                    data-reveal=target.0.to_string()
                >
                    <span class="highlight-label">{highlight.label}</span>
                    <div class="progress">
                        <div class="progress-fill" style:width=width></div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! { <section class="highlights">{bars}</section> }
}

#[component]
fn Newsletter() -> impl IntoView {
    let runtime = expect_context::<Runtime>();
    let on_submit = move |event: ev::SubmitEvent| {
        event.prevent_default();
        let email = dom::email_value(&event);
        runtime.send(Command::SubmitNewsletter { email });
    };

    view! {
        <section class="newsletter">
            <h2>"Get 15% off your first order"</h2>
            <form id="newsletterForm" on:submit=on_submit>
                <input type="email" name="email" placeholder="Your email" required />
                <button type="submit" class="btn">"Subscribe"</button>
            </form>
        </section>
    }
}

#[component]
pub fn HomePage(layout: PageLayout) -> impl IntoView {
    let runtime = expect_context::<Runtime>();
    let floating = FLOATING_IMAGES
        .into_iter()
        .enumerate()
        .map(|(index, src)| {
            let transform = move || {
                let offset = runtime.read(|shop| {
                    shop.parallax_offsets().get(index).copied().unwrap_or(0.0)
                });
                nav::parallax_transform(offset)
            };
            view! {
                <img
                    class="floating-img"
                    src=src
                    alt=""
                    style:animation-delay=nav::animation_delay(index)
                    style:transform=transform
                />
            }
        })
        .collect_view();

    view! {
        <section class="hero">
            <div class="hero-content">
                <h1>"Objects for slow living"</h1>
                <p>"Small-batch homeware, made to last."</p>
                <a href="products.html" class="btn">"Shop now"</a>
            </div>
            <div class="hero-images">{floating}</div>
        </section>
        {layout.stats.map(|target| view! { <Stats target /> })}
        <section class="featured">
            <h2>"Featured"</h2>
            <div class="products-grid">{product_grid(layout.products)}</div>
        </section>
        <Highlights targets=layout.highlights />
        <Newsletter />
    }
}

#[component]
pub fn ProductsPage(layout: PageLayout) -> impl IntoView {
    let runtime = expect_context::<Runtime>();
    let buttons = FILTERS
        .into_iter()
        .enumerate()
        .map(|(index, (value, label))| {
            let active = move || runtime.read(|shop| shop.filter().is_button_active(index));
            view! {
                <button
                    class="filter-btn"
                    class:active=active
                    data-filter=value
                    on:click=move |_| runtime.send(Command::SelectFilter(value.to_string()))
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <section class="products">
            <h1>"All products"</h1>
            <div class="filters">{buttons}</div>
            <div class="products-grid">{product_grid(layout.products)}</div>
        </section>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let runtime = expect_context::<Runtime>();
    let border = move |field: &'static str| {
        move || {
            if runtime.read(|shop| shop.contact().is_flagged(field)) {
                ERROR_BORDER
            } else {
                ""
            }
        }
    };
    let on_submit = move |event: ev::SubmitEvent| {
        event.prevent_default();
        let fields = dom::form_fields(&event);
        runtime.send(Command::SubmitContact { fields });
    };

    view! {
        <section class="contact">
            <h1>"Get in touch"</h1>
            <form id="contactForm" on:submit=on_submit>
                <input type="text" name="name" placeholder="Name" required style:border-color=border("name") />
                <input type="email" name="email" placeholder="Email" required style:border-color=border("email") />
                <input type="text" name="subject" placeholder="Subject" />
                <textarea name="message" placeholder="Message" required style:border-color=border("message")></textarea>
                <button type="submit" class="btn">"Send message"</button>
            </form>
        </section>
    }
}
