use dioxus::prelude::*;

use foodnest_common::cart::FREE_DELIVERY_THRESHOLD;

use super::cart_state::{clear_cart, remove_from_cart, update_quantity, use_cart};
use super::toast::use_toasts;

/// Slide-over cart panel, rendered at the app root so it overlays any page.
#[component]
pub fn CartDrawer() -> Element {
    let mut cart = use_cart();
    let mut toasts = use_toasts();

    let store = cart.read();
    if !store.open {
        return rsx! {};
    }
    let lines = store.cart.items().to_vec();
    let subtotal = store.cart.subtotal();
    let fee = store.cart.delivery_fee();
    let total = store.cart.final_total();
    drop(store);

    rsx! {
        div {
            class: "cart-overlay",
            onclick: move |_| cart.write().open = false,
        }
        aside { class: "cart-drawer",
            header { class: "cart-header",
                h2 { "Your Cart" }
                button {
                    class: "cart-close",
                    onclick: move |_| cart.write().open = false,
                    "\u{00d7}"
                }
            }

            if lines.is_empty() {
                p { class: "empty-state",
                    "Your cart is empty. Browse the menu to get started!"
                }
            } else {
                div { class: "cart-lines",
                    {lines.into_iter().map(|line| {
                        let id_minus = line.food.id.clone();
                        let id_plus = line.food.id.clone();
                        let id_remove = line.food.id.clone();
                        let quantity = line.quantity;
                        let unit_price = line.food.effective_price();
                        let line_total = line.line_total();
                        rsx! {
                            div { class: "cart-line", key: "{line.food.id}",
                                img { class: "cart-line-image", src: "{line.food.image}", alt: "{line.food.name}" }
                                div { class: "cart-line-info",
                                    h4 { "{line.food.name}" }
                                    p { class: "cart-line-price", "\u{20b9}{unit_price} each" }
                                    div { class: "quantity-row",
                                        button {
                                            class: "quantity-step",
                                            onclick: move |_| {
                                                update_quantity(cart, toasts, &id_minus, quantity - 1);
                                            },
                                            "\u{2212}"
                                        }
                                        span { class: "quantity-value", "{quantity}" }
                                        button {
                                            class: "quantity-step",
                                            onclick: move |_| {
                                                update_quantity(cart, toasts, &id_plus, quantity + 1);
                                            },
                                            "+"
                                        }
                                    }
                                }
                                div { class: "cart-line-end",
                                    span { class: "cart-line-total", "\u{20b9}{line_total}" }
                                    button {
                                        class: "cart-line-remove",
                                        onclick: move |_| {
                                            remove_from_cart(cart, toasts, &id_remove);
                                        },
                                        "Remove"
                                    }
                                }
                            }
                        }
                    })}
                }

                div { class: "cart-totals",
                    div { class: "totals-row",
                        span { "Subtotal" }
                        span { "\u{20b9}{subtotal}" }
                    }
                    div { class: "totals-row",
                        span { "Delivery Fee" }
                        if fee == 0.0 {
                            span { class: "free-delivery", "Free" }
                        } else {
                            span { "\u{20b9}{fee}" }
                        }
                    }
                    if fee > 0.0 {
                        p { class: "delivery-hint",
                            "Free delivery on orders above \u{20b9}{FREE_DELIVERY_THRESHOLD}"
                        }
                    }
                    div { class: "totals-row totals-final",
                        span { "Total" }
                        span { "\u{20b9}{total}" }
                    }
                }

                div { class: "cart-actions",
                    button {
                        class: "clear-cart",
                        onclick: move |_| clear_cart(cart, toasts),
                        "Clear Cart"
                    }
                    button {
                        class: "checkout-button",
                        onclick: move |_| {
                            toasts.write().error("Checkout is not available yet");
                        },
                        "Checkout"
                    }
                }
            }
        }
    }
}
