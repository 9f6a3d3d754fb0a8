use dioxus::prelude::*;

use foodnest_common::food::FoodItem;

use super::api;
use super::app::Route;
use super::cart_state::{add_to_cart, use_cart};
use super::toast::use_toasts;

#[component]
pub fn FoodDetailView(food_id: String) -> Element {
    let cart = use_cart();
    let toasts = use_toasts();
    let nav = use_navigator();

    let mut food = use_signal(|| None::<FoodItem>);
    let mut loading = use_signal(|| true);
    let mut quantity = use_signal(|| 1u32);

    let id = food_id.clone();
    use_effect(move || {
        let id = id.clone();
        spawn(async move {
            match api::fetch_food(&id).await {
                Ok(item) => food.set(Some(item)),
                Err(err) => tracing::error!("Failed to load food {id}: {err}"),
            }
            loading.set(false);
        });
    });

    if *loading.read() {
        return rsx! {
            div { class: "loading-screen",
                div { class: "spinner" }
                p { "Loading..." }
            }
        };
    }

    let Some(item) = food.read().clone() else {
        return rsx! {
            div { class: "not-found",
                h2 { "Food not found" }
                p { "This dish may have been removed from the menu." }
                button {
                    onclick: move |_| {
                        nav.push(Route::Foods { category: String::new() });
                    },
                    "Back to Foods"
                }
            }
        };
    };

    let price = item.effective_price();
    let qty = *quantity.read();
    let line_total = price * qty as f64;
    let item_for_cart = item.clone();

    rsx! {
        div { class: "food-detail",
            button {
                class: "back-button",
                onclick: move |_| {
                    nav.push(Route::Foods { category: String::new() });
                },
                "\u{2190} Back to Foods"
            }

            div { class: "detail-layout",
                div { class: "detail-media",
                    img { class: "detail-image", src: "{item.image}", alt: "{item.name}" }
                    if !item.images.is_empty() {
                        div { class: "thumbnail-row",
                            {item.images.iter().map(|url| rsx! {
                                img { key: "{url}", class: "thumbnail", src: "{url}", alt: "{item.name}" }
                            })}
                        }
                    }
                }

                div { class: "detail-info",
                    div { class: "detail-heading",
                        h1 { "{item.name}" }
                        if item.is_veg {
                            span { class: "badge badge-veg", "Veg" }
                        }
                        if !item.is_available {
                            span { class: "badge badge-unavailable", "Currently Unavailable" }
                        }
                    }
                    p { class: "detail-category", "{item.category} \u{00b7} {item.cuisine}" }
                    if let Some(rating) = item.rating {
                        p { class: "rating",
                            "\u{2605} {rating:.1}"
                            if let Some(reviews) = item.total_reviews {
                                " ({reviews} reviews)"
                            }
                        }
                    }
                    p { class: "detail-description", "{item.description}" }

                    div { class: "detail-facts",
                        if let Some(calories) = item.calories {
                            span { class: "fact", "{calories} kcal" }
                        }
                        if let Some(minutes) = item.preparation_time {
                            span { class: "fact", "{minutes} min prep" }
                        }
                        span { class: "fact", "Spice: {item.spice_level}" }
                        if !item.portion_size.is_empty() {
                            span { class: "fact", "Portion: {item.portion_size}" }
                        }
                    }

                    if !item.ingredients.is_empty() {
                        div { class: "ingredients",
                            h3 { "Ingredients" }
                            ul {
                                {item.ingredients.iter().map(|ingredient| rsx! {
                                    li { key: "{ingredient}", "{ingredient}" }
                                })}
                            }
                        }
                    }

                    div { class: "detail-price",
                        span { class: "current-price", "\u{20b9}{price}" }
                        if item.has_discount() {
                            span { class: "original-price", "\u{20b9}{item.price}" }
                        }
                    }

                    div { class: "quantity-row",
                        label { "Quantity:" }
                        button {
                            class: "quantity-step",
                            onclick: move |_| {
                                let current = *quantity.read();
                                if current > 1 {
                                    quantity.set(current - 1);
                                }
                            },
                            "\u{2212}"
                        }
                        input {
                            r#type: "number",
                            min: "1",
                            value: "{quantity}",
                            oninput: move |evt| {
                                if let Ok(value) = evt.value().parse::<u32>() {
                                    if value >= 1 {
                                        quantity.set(value);
                                    }
                                }
                            },
                        }
                        button {
                            class: "quantity-step",
                            onclick: move |_| quantity.set(*quantity.read() + 1),
                            "+"
                        }
                    }

                    button {
                        class: "add-button",
                        disabled: !item.is_available,
                        onclick: move |_| {
                            add_to_cart(cart, toasts, item_for_cart.clone(), *quantity.read());
                        },
                        "Add {qty} to Cart (\u{20b9}{line_total})"
                    }
                }
            }
        }
    }
}
