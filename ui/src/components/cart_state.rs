use chrono::Utc;
use dioxus::prelude::*;

use foodnest_common::cart::{Cart, CartChange};
use foodnest_common::food::FoodItem;

use super::browser;
use super::toast::Toasts;

/// localStorage key the serialized cart lives under.
pub const CART_STORAGE_KEY: &str = "foodnest_cart";

/// Cart plus the drawer flag, shared app-wide via context.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    pub cart: Cart,
    pub open: bool,
}

impl CartStore {
    /// Rehydrate from localStorage. Anything unreadable is an empty cart.
    pub fn load() -> Self {
        let cart = browser::local_storage_get(CART_STORAGE_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { cart, open: false }
    }

    fn persist(&self) {
        match serde_json::to_string(&self.cart) {
            Ok(raw) => browser::local_storage_set(CART_STORAGE_KEY, &raw),
            Err(err) => tracing::error!("Failed to serialize cart: {err}"),
        }
    }
}

pub fn use_cart() -> Signal<CartStore> {
    use_context::<Signal<CartStore>>()
}

/// Add `quantity` of `food` and confirm to the user. Zero quantities are
/// ignored.
pub fn add_to_cart(
    mut cart: Signal<CartStore>,
    mut toasts: Signal<Toasts>,
    food: FoodItem,
    quantity: u32,
) {
    let name = food.name.clone();
    let change = {
        let mut store = cart.write();
        let change = store.cart.add(food, quantity, Utc::now());
        if change.is_some() {
            store.persist();
        }
        change
    };
    match change {
        Some(CartChange::Added) => {
            toasts.write().success(format!("{name} added to cart"));
        }
        Some(CartChange::QuantityUpdated) => {
            toasts
                .write()
                .success(format!("Updated {name} quantity in cart"));
        }
        None => {}
    }
}

/// Drop the line for `food_id`. Removing an absent id is a quiet no-op.
pub fn remove_from_cart(mut cart: Signal<CartStore>, mut toasts: Signal<Toasts>, food_id: &str) {
    let removed = {
        let mut store = cart.write();
        let before = store.cart.len();
        store.cart.remove(food_id);
        let removed = store.cart.len() != before;
        if removed {
            store.persist();
        }
        removed
    };
    if removed {
        toasts.write().success("Item removed from cart");
    }
}

/// Set the quantity for `food_id`; zero removes the line (with the removal
/// confirmation).
pub fn update_quantity(
    mut cart: Signal<CartStore>,
    toasts: Signal<Toasts>,
    food_id: &str,
    quantity: u32,
) {
    if quantity == 0 {
        remove_from_cart(cart, toasts, food_id);
        return;
    }
    let mut store = cart.write();
    store.cart.set_quantity(food_id, quantity);
    store.persist();
}

pub fn clear_cart(mut cart: Signal<CartStore>, mut toasts: Signal<Toasts>) {
    {
        let mut store = cart.write();
        store.cart.clear();
        store.persist();
    }
    toasts.write().success("Cart cleared");
}
