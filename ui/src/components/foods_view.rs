use dioxus::prelude::*;

use foodnest_common::catalog::{self, FilterCriteria, SortKey};
use foodnest_common::food::{FoodItem, SpiceLevel};

use super::api;
use super::food_card::FoodCard;

/// Minimum-rating choices offered in the filter panel.
const RATING_STEPS: [f64; 4] = [0.0, 3.0, 4.0, 4.5];

#[component]
pub fn FoodsView(category: String) -> Element {
    let mut foods = use_signal(Vec::<FoodItem>::new);
    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| None::<String>);
    let mut search_query = use_signal(String::new);
    let mut show_filters = use_signal(|| false);

    let initial_category = category;
    let mut criteria = use_signal(move || FilterCriteria {
        category: (!initial_category.is_empty()).then(|| initial_category.clone()),
        ..FilterCriteria::default()
    });

    // One fetch on mount; the rest is local and synchronous. Navigating
    // away drops the task, so a late response never lands on dead state.
    use_effect(move || {
        spawn(async move {
            match api::fetch_foods().await {
                Ok(list) => {
                    criteria.write().max_price = catalog::price_ceiling(&list);
                    foods.set(list);
                }
                Err(err) => {
                    tracing::error!("Failed to load foods: {err}");
                    load_error.set(Some(
                        "Could not load the menu. Please try again.".to_string(),
                    ));
                }
            }
            loading.set(false);
        });
    });

    // Cached derivation keyed on (list, criteria, query).
    let filtered = use_memo(move || {
        let foods = foods.read();
        let criteria = criteria.read();
        let query = search_query.read();
        catalog::filter_and_sort(&foods, &criteria, &query)
    });
    let category_options = use_memo(move || catalog::categories(&foods.read()));
    let cuisine_options = use_memo(move || catalog::cuisines(&foods.read()));
    let price_cap = use_memo(move || catalog::price_ceiling(&foods.read()));

    if *loading.read() {
        return rsx! {
            div { class: "loading-screen",
                div { class: "spinner" }
                p { "Loading delicious foods..." }
            }
        };
    }

    let crit = criteria.read().clone();
    let cuisine_value = crit.cuisine.clone().unwrap_or_else(|| "All".to_string());
    let total = foods.read().len();
    let filtered_list = filtered();
    let shown = filtered_list.len();
    let query_now = search_query.read().clone();
    let cap = price_cap();
    let panel_class = if *show_filters.read() {
        "filter-panel open"
    } else {
        "filter-panel"
    };

    rsx! {
        div { class: "foods-page",
            section { class: "foods-hero",
                h1 { "Discover Amazing Foods" }
                p { "Explore our carefully curated menu of {total} delicious dishes" }
                input {
                    r#type: "text",
                    class: "search-input",
                    placeholder: "Search for foods, ingredients, or cuisines...",
                    value: "{search_query}",
                    oninput: move |evt| search_query.set(evt.value()),
                }
            }

            if let Some(err) = load_error.read().as_ref() {
                div { class: "alert alert-error", "{err}" }
            }

            div { class: "foods-layout",
                aside { class: "filter-sidebar",
                    button {
                        class: "filter-toggle",
                        onclick: move |_| show_filters.set(!show_filters()),
                        "Filters & Sort"
                    }
                    div { class: "{panel_class}",
                        div { class: "filter-header",
                            h3 { "Filters" }
                            button {
                                class: "clear-filters",
                                onclick: move |_| {
                                    let list = foods.read();
                                    criteria.write().reset(&list);
                                    drop(list);
                                    search_query.set(String::new());
                                },
                                "Clear All"
                            }
                        }

                        div { class: "filter-group",
                            label { "Sort By" }
                            select {
                                value: "{crit.sort.code()}",
                                onchange: move |evt| {
                                    if let Some(key) = SortKey::from_code(&evt.value()) {
                                        criteria.write().sort = key;
                                    }
                                },
                                {SortKey::all().iter().map(|key| rsx! {
                                    option { key: "{key.code()}", value: "{key.code()}", "{key.label()}" }
                                })}
                            }
                        }

                        div { class: "filter-group",
                            label { "Category" }
                            label { class: "filter-option",
                                input {
                                    r#type: "radio",
                                    name: "category",
                                    checked: crit.category.is_none(),
                                    onchange: move |_| criteria.write().category = None,
                                }
                                span { " All" }
                            }
                            {category_options().into_iter().map(|cat| {
                                let selected = crit.category.as_deref() == Some(cat.as_str());
                                let value = cat.clone();
                                rsx! {
                                    label { key: "{cat}", class: "filter-option",
                                        input {
                                            r#type: "radio",
                                            name: "category",
                                            checked: selected,
                                            onchange: move |_| {
                                                criteria.write().category = Some(value.clone());
                                            },
                                        }
                                        span { " {cat}" }
                                    }
                                }
                            })}
                        }

                        div { class: "filter-group",
                            label { "Cuisine" }
                            select {
                                value: "{cuisine_value}",
                                onchange: move |evt| {
                                    let choice = evt.value();
                                    criteria.write().cuisine =
                                        (choice != "All").then_some(choice);
                                },
                                option { value: "All", "All" }
                                {cuisine_options().into_iter().map(|cuisine| rsx! {
                                    option { key: "{cuisine}", value: "{cuisine}", "{cuisine}" }
                                })}
                            }
                        }

                        div { class: "filter-group",
                            label { "Price Range: \u{20b9}{crit.min_price} - \u{20b9}{crit.max_price}" }
                            label { class: "range-label", "Min Price" }
                            input {
                                r#type: "range",
                                min: "0",
                                max: "{crit.max_price}",
                                step: "50",
                                value: "{crit.min_price}",
                                oninput: move |evt| {
                                    if let Ok(value) = evt.value().parse::<f64>() {
                                        let mut crit = criteria.write();
                                        crit.min_price = value.min(crit.max_price);
                                    }
                                },
                            }
                            label { class: "range-label", "Max Price" }
                            input {
                                r#type: "range",
                                min: "{crit.min_price}",
                                max: "{cap}",
                                step: "50",
                                value: "{crit.max_price}",
                                oninput: move |evt| {
                                    if let Ok(value) = evt.value().parse::<f64>() {
                                        let mut crit = criteria.write();
                                        crit.max_price = value.max(crit.min_price);
                                    }
                                },
                            }
                        }

                        div { class: "filter-group",
                            label { "Dietary Preferences" }
                            label { class: "filter-option",
                                input {
                                    r#type: "checkbox",
                                    checked: crit.veg_only,
                                    onchange: move |evt| criteria.write().veg_only = evt.checked(),
                                }
                                span { " Vegetarian Only" }
                            }
                        }

                        div { class: "filter-group",
                            label { "Spice Level" }
                            label { class: "filter-option",
                                input {
                                    r#type: "radio",
                                    name: "spice",
                                    checked: crit.spice_level.is_none(),
                                    onchange: move |_| criteria.write().spice_level = None,
                                }
                                span { " All" }
                            }
                            {SpiceLevel::all().iter().map(|level| {
                                let level = *level;
                                rsx! {
                                    label { key: "{level}", class: "filter-option",
                                        input {
                                            r#type: "radio",
                                            name: "spice",
                                            checked: crit.spice_level == Some(level),
                                            onchange: move |_| {
                                                criteria.write().spice_level = Some(level);
                                            },
                                        }
                                        span { " {level}" }
                                    }
                                }
                            })}
                        }

                        div { class: "filter-group",
                            label { "Minimum Rating" }
                            {RATING_STEPS.into_iter().map(|rating| {
                                let label = if rating == 0.0 {
                                    "Any Rating".to_string()
                                } else {
                                    format!("{rating}+")
                                };
                                rsx! {
                                    label { key: "{rating}", class: "filter-option",
                                        input {
                                            r#type: "radio",
                                            name: "rating",
                                            checked: crit.min_rating == rating,
                                            onchange: move |_| criteria.write().min_rating = rating,
                                        }
                                        span { " {label}" }
                                    }
                                }
                            })}
                        }
                    }
                }

                section { class: "foods-results",
                    div { class: "results-header",
                        h2 {
                            if query_now.trim().is_empty() {
                                "All Foods"
                            } else {
                                "Search Results for \"{query_now}\""
                            }
                        }
                        p { class: "results-count", "Showing {shown} of {total} items" }
                    }

                    if filtered_list.is_empty() {
                        div { class: "empty-state",
                            h3 { "No foods found" }
                            p { "No foods match your current criteria. Try adjusting your search or filters." }
                            button {
                                class: "clear-filters",
                                onclick: move |_| {
                                    let list = foods.read();
                                    criteria.write().reset(&list);
                                    drop(list);
                                    search_query.set(String::new());
                                },
                                "Clear Filters"
                            }
                        }
                    } else {
                        div { class: "food-grid",
                            {filtered_list.into_iter().map(|food| {
                                let id = food.id.clone();
                                rsx! {
                                    FoodCard { key: "{id}", food }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
