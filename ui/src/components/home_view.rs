use dioxus::prelude::*;

use super::app::Route;

/// Categories highlighted on the landing page.
const POPULAR_CATEGORIES: &[&str] = &["Pizza", "Burger", "Sushi", "Dessert"];

#[component]
pub fn HomeView() -> Element {
    let nav = use_navigator();

    rsx! {
        div { class: "home",
            section { class: "hero",
                h1 { "Delicious food, delivered to your door" }
                p { "Browse the menu, fill your cart, and let us handle the rest." }
                button {
                    class: "cta",
                    onclick: move |_| {
                        nav.push(Route::Foods { category: String::new() });
                    },
                    "Browse Foods"
                }
            }
            section { class: "popular-categories",
                h2 { "Popular Categories" }
                div { class: "category-grid",
                    {POPULAR_CATEGORIES.iter().map(|category| {
                        rsx! {
                            button {
                                key: "{category}",
                                class: "category-card",
                                onclick: move |_| {
                                    nav.push(Route::Foods { category: category.to_string() });
                                },
                                "{category}"
                            }
                        }
                    })}
                }
            }
            section { class: "how-it-works",
                h2 { "How It Works" }
                div { class: "steps",
                    div { class: "step",
                        h3 { "1. Browse" }
                        p { "Search and filter the menu to find what you're craving." }
                    }
                    div { class: "step",
                        h3 { "2. Add to Cart" }
                        p { "Pick your dishes and quantities." }
                    }
                    div { class: "step",
                        h3 { "3. Enjoy" }
                        p { "Free delivery on orders above \u{20b9}500." }
                    }
                }
            }
        }
    }
}
