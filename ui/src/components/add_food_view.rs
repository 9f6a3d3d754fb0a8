use dioxus::prelude::*;

use foodnest_common::food::SpiceLevel;
use foodnest_common::form::FoodForm;

use super::api;
use super::toast::use_toasts;

const CATEGORIES: &[&str] = &[
    "Appetizer",
    "Main Course",
    "Burger",
    "Sushi",
    "Pizza",
    "Dessert",
    "Beverage",
    "Snack",
    "Salad",
    "Soup",
    "Breakfast",
];

const CUISINES: &[&str] = &[
    "Indian",
    "Chinese",
    "Italian",
    "Mexican",
    "Japanese",
    "American",
    "Thai",
    "Mediterranean",
    "French",
    "Korean",
];

#[component]
pub fn AddFoodView() -> Element {
    let mut toasts = use_toasts();
    let mut form = use_signal(FoodForm::default);
    let mut submitting = use_signal(|| false);

    let submit = move |_| {
        if *submitting.read() {
            return;
        }
        // Validation happens entirely client-side before the POST.
        let cleaned = match form.read().clean() {
            Ok(payload) => payload,
            Err(err) => {
                toasts.write().error(err.to_string());
                return;
            }
        };

        submitting.set(true);
        spawn(async move {
            match api::create_food(&cleaned).await {
                Ok(ack) if ack.success => {
                    toasts.write().success("Food item added successfully!");
                    form.set(FoodForm::default());
                }
                Ok(ack) => {
                    let message = ack
                        .error
                        .unwrap_or_else(|| "Failed to add food item".to_string());
                    toasts.write().error(message);
                }
                Err(err) => {
                    tracing::error!("Create food failed: {err}");
                    toasts.write().error("Network error. Please try again.");
                }
            }
            submitting.set(false);
        });
    };

    let current = form.read().clone();
    let is_submitting = *submitting.read();
    let image_preview = current.image.trim().to_string();

    rsx! {
        div { class: "add-food-page",
            section { class: "admin-hero",
                h1 { "Add New Food" }
                p { "Fill in the details below to add a dish to the menu" }
            }

            div { class: "add-food-form",
                fieldset { class: "form-section",
                    legend { "Basics" }
                    div { class: "form-group",
                        label { "Food Name *" }
                        input {
                            r#type: "text",
                            placeholder: "e.g. Margherita Pizza",
                            value: "{current.name}",
                            oninput: move |evt| form.write().name = evt.value(),
                        }
                    }
                    div { class: "form-group",
                        label { "Description *" }
                        textarea {
                            placeholder: "Describe the dish...",
                            value: "{current.description}",
                            oninput: move |evt| form.write().description = evt.value(),
                        }
                    }
                    div { class: "form-row",
                        div { class: "form-group",
                            label { "Category *" }
                            select {
                                value: "{current.category}",
                                onchange: move |evt| form.write().category = evt.value(),
                                option { value: "", "Select category" }
                                {CATEGORIES.iter().map(|category| rsx! {
                                    option { key: "{category}", value: "{category}", "{category}" }
                                })}
                            }
                        }
                        div { class: "form-group",
                            label { "Cuisine *" }
                            select {
                                value: "{current.cuisine}",
                                onchange: move |evt| form.write().cuisine = evt.value(),
                                option { value: "", "Select cuisine" }
                                {CUISINES.iter().map(|cuisine| rsx! {
                                    option { key: "{cuisine}", value: "{cuisine}", "{cuisine}" }
                                })}
                            }
                        }
                    }
                }

                fieldset { class: "form-section",
                    legend { "Pricing" }
                    div { class: "form-row",
                        div { class: "form-group",
                            label { "Price (\u{20b9}) *" }
                            input {
                                r#type: "number",
                                min: "0",
                                placeholder: "e.g. 299",
                                value: "{current.price}",
                                oninput: move |evt| form.write().price = evt.value(),
                            }
                        }
                        div { class: "form-group",
                            label { "Discount Price (\u{20b9})" }
                            input {
                                r#type: "number",
                                min: "0",
                                placeholder: "Optional",
                                value: "{current.discount_price}",
                                oninput: move |evt| form.write().discount_price = evt.value(),
                            }
                        }
                    }
                }

                fieldset { class: "form-section",
                    legend { "Images" }
                    div { class: "form-group",
                        label { "Main Image URL" }
                        input {
                            r#type: "url",
                            placeholder: "https://...",
                            value: "{current.image}",
                            oninput: move |evt| form.write().image = evt.value(),
                        }
                        if !image_preview.is_empty() {
                            img { class: "image-preview", src: "{image_preview}", alt: "Preview" }
                        }
                    }
                    div { class: "form-group",
                        label { "Additional Image URLs" }
                        {current.images.iter().enumerate().map(|(index, value)| rsx! {
                            div { class: "array-row", key: "{index}",
                                input {
                                    r#type: "url",
                                    placeholder: "https://...",
                                    value: "{value}",
                                    oninput: move |evt| form.write().images[index] = evt.value(),
                                }
                                button {
                                    class: "row-remove",
                                    onclick: move |_| {
                                        let mut form = form.write();
                                        if form.images.len() > 1 {
                                            form.images.remove(index);
                                        }
                                    },
                                    "Remove"
                                }
                            }
                        })}
                        button {
                            class: "row-add",
                            onclick: move |_| form.write().images.push(String::new()),
                            "+ Add Image"
                        }
                    }
                }

                fieldset { class: "form-section",
                    legend { "Details" }
                    div { class: "form-row",
                        div { class: "form-group",
                            label { "Calories" }
                            input {
                                r#type: "number",
                                min: "0",
                                placeholder: "Optional",
                                value: "{current.calories}",
                                oninput: move |evt| form.write().calories = evt.value(),
                            }
                        }
                        div { class: "form-group",
                            label { "Preparation Time (minutes)" }
                            input {
                                r#type: "number",
                                min: "1",
                                placeholder: "Optional",
                                value: "{current.preparation_time}",
                                oninput: move |evt| form.write().preparation_time = evt.value(),
                            }
                        }
                    }
                    div { class: "form-row",
                        div { class: "form-group",
                            label { "Spice Level" }
                            select {
                                value: "{current.spice_level}",
                                onchange: move |evt| {
                                    if let Some(level) = SpiceLevel::from_label(&evt.value()) {
                                        form.write().spice_level = level;
                                    }
                                },
                                {SpiceLevel::all().iter().map(|level| rsx! {
                                    option { key: "{level}", value: "{level}", "{level}" }
                                })}
                            }
                        }
                        div { class: "form-group",
                            label { "Portion Size" }
                            input {
                                r#type: "text",
                                placeholder: "e.g. Regular",
                                value: "{current.portion_size}",
                                oninput: move |evt| form.write().portion_size = evt.value(),
                            }
                        }
                    }
                    div { class: "form-group",
                        label { "Ingredients" }
                        {current.ingredients.iter().enumerate().map(|(index, value)| rsx! {
                            div { class: "array-row", key: "{index}",
                                input {
                                    r#type: "text",
                                    placeholder: "Ingredient",
                                    value: "{value}",
                                    oninput: move |evt| form.write().ingredients[index] = evt.value(),
                                }
                                button {
                                    class: "row-remove",
                                    onclick: move |_| {
                                        let mut form = form.write();
                                        if form.ingredients.len() > 1 {
                                            form.ingredients.remove(index);
                                        }
                                    },
                                    "Remove"
                                }
                            }
                        })}
                        button {
                            class: "row-add",
                            onclick: move |_| form.write().ingredients.push(String::new()),
                            "+ Add Ingredient"
                        }
                    }
                    div { class: "form-group",
                        label { "Restaurant ID" }
                        input {
                            r#type: "text",
                            placeholder: "Optional",
                            value: "{current.restaurant_id}",
                            oninput: move |evt| form.write().restaurant_id = evt.value(),
                        }
                    }
                    div { class: "form-row",
                        label { class: "filter-option",
                            input {
                                r#type: "checkbox",
                                checked: current.is_available,
                                onchange: move |evt| form.write().is_available = evt.checked(),
                            }
                            span { " Available" }
                        }
                        label { class: "filter-option",
                            input {
                                r#type: "checkbox",
                                checked: current.is_veg,
                                onchange: move |evt| form.write().is_veg = evt.checked(),
                            }
                            span { " Vegetarian" }
                        }
                    }
                }

                button {
                    class: "form-submit",
                    disabled: is_submitting,
                    onclick: submit,
                    if is_submitting { "Adding food item..." } else { "Add Food Item" }
                }
            }
        }
    }
}
