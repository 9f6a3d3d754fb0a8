use dioxus::prelude::*;

use super::app::Route;
use super::auth_state::use_auth;

#[component]
pub fn AdminView() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let greeting = auth
        .read()
        .current_user()
        .map(|user| user.name.clone())
        .unwrap_or_else(|| "Admin".to_string());

    rsx! {
        div { class: "admin-dashboard",
            section { class: "admin-hero",
                h1 { "Admin Dashboard" }
                p { "Welcome back, {greeting}. Manage your FoodNest menu here." }
            }

            div { class: "admin-actions",
                button {
                    class: "admin-card",
                    onclick: move |_| { nav.push(Route::AddFood {}); },
                    h3 { "Add New Food" }
                    p { "Create a new food item for your menu" }
                }
                button {
                    class: "admin-card",
                    onclick: move |_| {
                        nav.push(Route::Foods { category: String::new() });
                    },
                    h3 { "View All Foods" }
                    p { "Browse and manage existing food items" }
                }
                button {
                    class: "admin-card",
                    disabled: true,
                    h3 { "Edit Foods" }
                    p { "Update and modify food information (coming soon)" }
                }
                button {
                    class: "admin-card",
                    disabled: true,
                    h3 { "Analytics" }
                    p { "View sales and performance metrics (coming soon)" }
                }
            }
        }
    }
}
