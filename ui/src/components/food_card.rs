use dioxus::prelude::*;

use foodnest_common::food::FoodItem;

use super::app::Route;
use super::cart_state::{add_to_cart, use_cart};
use super::toast::use_toasts;

#[component]
pub fn FoodCard(food: FoodItem) -> Element {
    let cart = use_cart();
    let toasts = use_toasts();
    let nav = use_navigator();

    let price = food.effective_price();
    let detail_id = food.id.clone();
    let food_for_cart = food.clone();

    rsx! {
        div { class: "food-card",
            button {
                class: "food-card-media",
                onclick: move |_| {
                    nav.push(Route::FoodDetail { food_id: detail_id.clone() });
                },
                img { src: "{food.image}", alt: "{food.name}" }
                if food.is_veg {
                    span { class: "badge badge-veg", "Veg" }
                }
                if !food.is_available {
                    span { class: "badge badge-unavailable", "Unavailable" }
                }
            }
            div { class: "food-card-body",
                h3 { "{food.name}" }
                p { class: "food-description", "{food.description}" }
                div { class: "food-meta",
                    span { class: "cuisine", "{food.cuisine}" }
                    if let Some(rating) = food.rating {
                        span { class: "rating",
                            "\u{2605} {rating:.1}"
                            if let Some(reviews) = food.total_reviews {
                                " ({reviews})"
                            }
                        }
                    }
                }
            }
            div { class: "food-card-footer",
                div { class: "price",
                    span { class: "current-price", "\u{20b9}{price}" }
                    if food.has_discount() {
                        span { class: "original-price", "\u{20b9}{food.price}" }
                    }
                }
                button {
                    class: "add-button",
                    disabled: !food.is_available,
                    onclick: move |_| add_to_cart(cart, toasts, food_for_cart.clone(), 1),
                    "Add to Cart"
                }
            }
        }
    }
}
