use dioxus::prelude::*;

use super::app::Route;
use super::auth_state::{self, use_auth};
use super::cart_state::use_cart;

#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let mut cart = use_cart();
    let nav = use_navigator();

    let state = auth.read();
    let user_name = state.current_user().map(|user| user.name.clone());
    let authenticated = state.is_authenticated();
    drop(state);

    let item_count = cart.read().cart.total_items();

    rsx! {
        header { class: "navbar",
            button {
                class: "brand",
                onclick: move |_| { nav.push(Route::Home {}); },
                span { class: "brand-food", "Food" }
                span { class: "brand-nest", "Nest" }
            }
            nav { class: "nav-links",
                button {
                    onclick: move |_| { nav.push(Route::Home {}); },
                    "Home"
                }
                button {
                    onclick: move |_| { nav.push(Route::Foods { category: String::new() }); },
                    "Foods"
                }
                if authenticated {
                    button {
                        onclick: move |_| { nav.push(Route::Admin {}); },
                        "Admin"
                    }
                }
            }
            div { class: "nav-actions",
                button {
                    class: "cart-button",
                    onclick: move |_| {
                        let mut store = cart.write();
                        store.open = !store.open;
                    },
                    "Cart"
                    if item_count > 0 {
                        span { class: "cart-badge", "{item_count}" }
                    }
                }
                if let Some(name) = user_name {
                    span { class: "user-name", "{name}" }
                    button {
                        class: "logout-button",
                        onclick: move |_| auth_state::logout(auth),
                        "Logout"
                    }
                } else {
                    button {
                        class: "login-button",
                        onclick: move |_| { nav.push(Route::Login { redirect: String::new() }); },
                        "Login"
                    }
                }
            }
        }
    }
}
