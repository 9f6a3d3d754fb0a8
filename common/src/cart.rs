use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::food::FoodItem;

/// Orders above this subtotal ship free.
pub const FREE_DELIVERY_THRESHOLD: f64 = 500.0;
/// Flat fee charged below the threshold.
pub const DELIVERY_FEE: f64 = 50.0;

/// One cart entry: a food snapshot plus the quantity ordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub food: FoodItem,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.food.effective_price() * self.quantity as f64
    }
}

/// What an `add` call did to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    /// A new line was appended.
    Added,
    /// An existing line's quantity was bumped.
    QuantityUpdated,
}

/// The shopping cart.
///
/// Invariant: at most one line per food id. Adding a food that is already
/// present merges into the existing line instead of duplicating it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Add `quantity` of `food`, merging into an existing line if one exists.
    /// A zero quantity is a no-op and returns `None`.
    pub fn add(&mut self, food: FoodItem, quantity: u32, now: DateTime<Utc>) -> Option<CartChange> {
        if quantity == 0 {
            return None;
        }
        if let Some(line) = self.items.iter_mut().find(|line| line.food.id == food.id) {
            line.quantity += quantity;
            return Some(CartChange::QuantityUpdated);
        }
        self.items.push(CartLine {
            food,
            quantity,
            added_at: now,
        });
        Some(CartChange::Added)
    }

    /// Remove the line for `food_id`. Removing an absent id is a no-op.
    pub fn remove(&mut self, food_id: &str) {
        self.items.retain(|line| line.food.id != food_id);
    }

    /// Set the quantity for `food_id`. Zero removes the line entirely.
    pub fn set_quantity(&mut self, food_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(food_id);
            return;
        }
        if let Some(line) = self.items.iter_mut().find(|line| line.food.id == food_id) {
            line.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total units across all lines.
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Sum of effective price times quantity over all lines.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(CartLine::line_total).sum()
    }

    pub fn delivery_fee(&self) -> f64 {
        if self.subtotal() > FREE_DELIVERY_THRESHOLD {
            0.0
        } else {
            DELIVERY_FEE
        }
    }

    pub fn final_total(&self) -> f64 {
        self.subtotal() + self.delivery_fee()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::SpiceLevel;

    fn food(id: &str, name: &str, price: f64, discount: Option<f64>) -> FoodItem {
        FoodItem {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            discount_price: discount,
            category: "Main Course".into(),
            cuisine: "Indian".into(),
            image: String::new(),
            images: Vec::new(),
            is_available: true,
            is_veg: false,
            calories: None,
            preparation_time: None,
            spice_level: SpiceLevel::Low,
            ingredients: Vec::new(),
            portion_size: "Regular".into(),
            rating: None,
            total_reviews: None,
            created_at: None,
        }
    }

    #[test]
    fn adding_same_food_twice_merges_quantities() {
        let mut cart = Cart::new();
        let now = Utc::now();
        assert_eq!(
            cart.add(food("f1", "Dal", 120.0, None), 2, now),
            Some(CartChange::Added)
        );
        assert_eq!(
            cart.add(food("f1", "Dal", 120.0, None), 3, now),
            Some(CartChange::QuantityUpdated)
        );
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 5);
    }

    #[test]
    fn zero_quantity_add_is_rejected() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(food("f1", "Dal", 120.0, None), 0, Utc::now()), None);
        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_zero_matches_remove() {
        let now = Utc::now();
        let mut via_set = Cart::new();
        via_set.add(food("f1", "Dal", 120.0, None), 2, now);
        via_set.add(food("f2", "Naan", 40.0, None), 1, now);

        let mut via_remove = via_set.clone();
        via_set.set_quantity("f1", 0);
        via_remove.remove("f1");
        assert_eq!(via_set, via_remove);
        assert_eq!(via_set.len(), 1);
    }

    #[test]
    fn remove_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(food("f1", "Dal", 120.0, None), 1, Utc::now());
        cart.remove("missing");
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn set_quantity_overwrites() {
        let mut cart = Cart::new();
        cart.add(food("f1", "Dal", 120.0, None), 2, Utc::now());
        cart.set_quantity("f1", 7);
        assert_eq!(cart.items()[0].quantity, 7);
        assert_eq!(cart.total_items(), 7);
    }

    #[test]
    fn subtotal_uses_discounted_prices() {
        let mut cart = Cart::new();
        let now = Utc::now();
        cart.add(food("f1", "Dal", 120.0, Some(100.0)), 2, now);
        cart.add(food("f2", "Naan", 40.0, None), 3, now);
        assert_eq!(cart.subtotal(), 100.0 * 2.0 + 40.0 * 3.0);
    }

    #[test]
    fn delivery_fee_boundary() {
        let mut cart = Cart::new();
        cart.add(food("f1", "Thali", 500.0, None), 1, Utc::now());
        // Exactly at the threshold still pays the fee.
        assert_eq!(cart.subtotal(), 500.0);
        assert_eq!(cart.delivery_fee(), DELIVERY_FEE);

        cart.add(food("f2", "Lassi", 1.0, None), 1, Utc::now());
        assert_eq!(cart.delivery_fee(), 0.0);
    }

    #[test]
    fn final_total_is_subtotal_plus_fee() {
        let mut cart = Cart::new();
        assert_eq!(cart.final_total(), cart.subtotal() + cart.delivery_fee());

        cart.add(food("f1", "Dal", 120.0, None), 2, Utc::now());
        assert_eq!(cart.final_total(), cart.subtotal() + cart.delivery_fee());
        assert_eq!(cart.final_total(), 240.0 + 50.0);
    }

    #[test]
    fn clear_empties_everything() {
        let mut cart = Cart::new();
        let now = Utc::now();
        cart.add(food("f1", "Dal", 120.0, None), 2, now);
        cart.add(food("f2", "Naan", 40.0, None), 1, now);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.subtotal(), 0.0);
    }

    #[test]
    fn serializes_and_rehydrates_identically() {
        let mut cart = Cart::new();
        let now = Utc::now();
        cart.add(food("f1", "Dal", 120.0, Some(100.0)), 2, now);
        cart.add(food("f2", "Naan", 40.0, None), 1, now);

        let raw = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&raw).unwrap();
        assert_eq!(cart, restored);
    }

    #[test]
    fn persisted_shape_is_a_plain_list() {
        let mut cart = Cart::new();
        cart.add(food("f1", "Dal", 120.0, None), 2, Utc::now());
        let raw = serde_json::to_string(&cart).unwrap();
        assert!(raw.starts_with('['), "cart serializes as a bare list: {raw}");
    }
}
