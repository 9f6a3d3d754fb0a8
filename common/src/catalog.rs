use serde::{Deserialize, Serialize};

use crate::food::{FoodItem, SpiceLevel};

/// Price ceiling used before any data has loaded.
pub const DEFAULT_PRICE_CEILING: f64 = 1000.0;

/// Sort orders for the catalog, in display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    Name,
    PriceLowToHigh,
    PriceHighToLow,
    Rating,
    PrepTime,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        &[
            SortKey::Name,
            SortKey::PriceLowToHigh,
            SortKey::PriceHighToLow,
            SortKey::Rating,
            SortKey::PrepTime,
        ]
    }

    /// Stable identifier used as the `<option>` value.
    pub fn code(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::PriceLowToHigh => "price-low",
            SortKey::PriceHighToLow => "price-high",
            SortKey::Rating => "rating",
            SortKey::PrepTime => "prep-time",
        }
    }

    pub fn from_code(code: &str) -> Option<SortKey> {
        SortKey::all().iter().copied().find(|key| key.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name (A-Z)",
            SortKey::PriceLowToHigh => "Price (Low to High)",
            SortKey::PriceHighToLow => "Price (High to Low)",
            SortKey::Rating => "Highest Rated",
            SortKey::PrepTime => "Fastest Prep Time",
        }
    }
}

/// Filter and sort settings for the catalog page.
///
/// `None` selections mean "All". Held only in UI memory; `reset` restores
/// the defaults and re-derives the price ceiling from the current list.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub category: Option<String>,
    pub cuisine: Option<String>,
    pub min_price: f64,
    pub max_price: f64,
    pub veg_only: bool,
    pub spice_level: Option<SpiceLevel>,
    pub min_rating: f64,
    pub sort: SortKey,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            category: None,
            cuisine: None,
            min_price: 0.0,
            max_price: DEFAULT_PRICE_CEILING,
            veg_only: false,
            spice_level: None,
            min_rating: 0.0,
            sort: SortKey::Name,
        }
    }
}

impl FilterCriteria {
    /// Default criteria with the price window sized to `foods`.
    pub fn for_list(foods: &[FoodItem]) -> Self {
        Self {
            max_price: price_ceiling(foods),
            ..Self::default()
        }
    }

    /// Back to defaults, re-deriving the ceiling rather than hardcoding it.
    pub fn reset(&mut self, foods: &[FoodItem]) {
        *self = Self::for_list(foods);
    }

    /// All predicates must hold (conjunctive).
    fn matches(&self, food: &FoodItem) -> bool {
        if let Some(category) = &self.category {
            if food.category != *category {
                return false;
            }
        }
        if let Some(cuisine) = &self.cuisine {
            if food.cuisine != *cuisine {
                return false;
            }
        }
        let price = food.effective_price();
        if price < self.min_price || price > self.max_price {
            return false;
        }
        if self.veg_only && !food.is_veg {
            return false;
        }
        if let Some(level) = self.spice_level {
            if food.spice_level != level {
                return false;
            }
        }
        food.rating.unwrap_or(0.0) >= self.min_rating
    }
}

/// Maximum effective price rounded up to the next multiple of 100.
/// Falls back to the default ceiling for an empty list.
pub fn price_ceiling(foods: &[FoodItem]) -> f64 {
    let max = foods
        .iter()
        .map(FoodItem::effective_price)
        .fold(f64::NAN, f64::max);
    if max.is_nan() {
        return DEFAULT_PRICE_CEILING;
    }
    (max / 100.0).ceil() * 100.0
}

/// Case-insensitive substring match against name, description, any
/// ingredient, cuisine, or category. `query` must already be lowercased.
fn matches_query(food: &FoodItem, query: &str) -> bool {
    food.name.to_lowercase().contains(query)
        || food.description.to_lowercase().contains(query)
        || food
            .ingredients
            .iter()
            .any(|ingredient| ingredient.to_lowercase().contains(query))
        || food.cuisine.to_lowercase().contains(query)
        || food.category.to_lowercase().contains(query)
}

/// The derived catalog view: search, conjunctive filters, then a stable sort.
///
/// Pure in `(foods, criteria, query)`; cheap enough to re-run per keystroke.
pub fn filter_and_sort(foods: &[FoodItem], criteria: &FilterCriteria, query: &str) -> Vec<FoodItem> {
    let query = query.trim().to_lowercase();
    let mut filtered: Vec<FoodItem> = foods
        .iter()
        .filter(|food| query.is_empty() || matches_query(food, &query))
        .filter(|food| criteria.matches(food))
        .cloned()
        .collect();

    match criteria.sort {
        SortKey::Name => filtered.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::PriceLowToHigh => {
            filtered.sort_by(|a, b| a.effective_price().total_cmp(&b.effective_price()))
        }
        SortKey::PriceHighToLow => {
            filtered.sort_by(|a, b| b.effective_price().total_cmp(&a.effective_price()))
        }
        SortKey::Rating => filtered.sort_by(|a, b| {
            b.rating
                .unwrap_or(0.0)
                .total_cmp(&a.rating.unwrap_or(0.0))
        }),
        SortKey::PrepTime => filtered.sort_by(|a, b| {
            a.preparation_time
                .unwrap_or(0)
                .cmp(&b.preparation_time.unwrap_or(0))
        }),
    }

    filtered
}

/// Distinct categories in first-seen order, for the filter options.
pub fn categories(foods: &[FoodItem]) -> Vec<String> {
    distinct(foods.iter().map(|food| food.category.as_str()))
}

/// Distinct cuisines in first-seen order, for the filter options.
pub fn cuisines(foods: &[FoodItem]) -> Vec<String> {
    distinct(foods.iter().map(|food| food.cuisine.as_str()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = Vec::new();
    for value in values {
        if !value.is_empty() && !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(name: &str, price: f64, is_veg: bool) -> FoodItem {
        FoodItem {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.into(),
            description: String::new(),
            price,
            discount_price: None,
            category: "Main Course".into(),
            cuisine: "Indian".into(),
            image: String::new(),
            images: Vec::new(),
            is_available: true,
            is_veg,
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

    fn sample() -> Vec<FoodItem> {
        vec![
            food("Veg Burger", 100.0, true),
            food("Chicken Wrap", 150.0, false),
        ]
    }

    #[test]
    fn veg_filter_keeps_only_vegetarian() {
        let foods = sample();
        let criteria = FilterCriteria {
            veg_only: true,
            ..FilterCriteria::for_list(&foods)
        };
        let result = filter_and_sort(&foods, &criteria, "");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Veg Burger");
    }

    #[test]
    fn price_high_sorts_descending() {
        let foods = sample();
        let criteria = FilterCriteria {
            sort: SortKey::PriceHighToLow,
            ..FilterCriteria::for_list(&foods)
        };
        let names: Vec<_> = filter_and_sort(&foods, &criteria, "")
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["Chicken Wrap", "Veg Burger"]);
    }

    #[test]
    fn search_matches_any_field() {
        let mut foods = sample();
        foods[0].ingredients = vec!["lettuce".into(), "Tomato".into()];
        foods[1].description = "Crispy tortilla".into();
        let criteria = FilterCriteria::for_list(&foods);

        // name
        assert_eq!(filter_and_sort(&foods, &criteria, "burger").len(), 1);
        // ingredient, case-insensitive
        assert_eq!(filter_and_sort(&foods, &criteria, "TOMATO").len(), 1);
        // description
        assert_eq!(filter_and_sort(&foods, &criteria, "tortilla").len(), 1);
        // cuisine matches everything in the sample
        assert_eq!(filter_and_sort(&foods, &criteria, "indian").len(), 2);
        // category
        assert_eq!(filter_and_sort(&foods, &criteria, "main course").len(), 2);
        // whitespace-only query is no filter
        assert_eq!(filter_and_sort(&foods, &criteria, "   ").len(), 2);
        // no match
        assert!(filter_and_sort(&foods, &criteria, "sushi").is_empty());
    }

    #[test]
    fn predicates_are_order_independent() {
        let mut foods = sample();
        foods.push(food("Paneer Bowl", 320.0, true));

        // Category-then-price must equal price-then-category: both are the
        // same conjunction, checked here by comparing against manual passes.
        let criteria = FilterCriteria {
            category: Some("Main Course".into()),
            min_price: 90.0,
            max_price: 200.0,
            ..FilterCriteria::for_list(&foods)
        };
        let combined = filter_and_sort(&foods, &criteria, "");

        let category_first: Vec<FoodItem> = foods
            .iter()
            .filter(|f| f.category == "Main Course")
            .filter(|f| f.effective_price() >= 90.0 && f.effective_price() <= 200.0)
            .cloned()
            .collect();
        let price_first: Vec<FoodItem> = foods
            .iter()
            .filter(|f| f.effective_price() >= 90.0 && f.effective_price() <= 200.0)
            .filter(|f| f.category == "Main Course")
            .cloned()
            .collect();

        assert_eq!(category_first, price_first);
        let mut expected = category_first;
        expected.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(combined, expected);
    }

    #[test]
    fn price_window_is_inclusive_and_uses_discounts() {
        let mut foods = sample();
        foods[1].discount_price = Some(100.0);
        let criteria = FilterCriteria {
            min_price: 100.0,
            max_price: 100.0,
            ..FilterCriteria::for_list(&foods)
        };
        // Both now cost exactly 100 effective.
        assert_eq!(filter_and_sort(&foods, &criteria, "").len(), 2);
    }

    #[test]
    fn rating_filter_treats_missing_as_zero() {
        let mut foods = sample();
        foods[0].rating = Some(4.6);
        let criteria = FilterCriteria {
            min_rating: 4.5,
            ..FilterCriteria::for_list(&foods)
        };
        let result = filter_and_sort(&foods, &criteria, "");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Veg Burger");
    }

    #[test]
    fn spice_filter_is_exact() {
        let mut foods = sample();
        foods[1].spice_level = SpiceLevel::High;
        let criteria = FilterCriteria {
            spice_level: Some(SpiceLevel::High),
            ..FilterCriteria::for_list(&foods)
        };
        let result = filter_and_sort(&foods, &criteria, "");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Chicken Wrap");
    }

    #[test]
    fn rating_sort_descends_with_missing_as_zero() {
        let mut foods = sample();
        foods.push(food("Sushi Roll", 400.0, false));
        foods[0].rating = Some(3.9);
        foods[2].rating = Some(4.8);
        let criteria = FilterCriteria {
            sort: SortKey::Rating,
            ..FilterCriteria::for_list(&foods)
        };
        let names: Vec<_> = filter_and_sort(&foods, &criteria, "")
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["Sushi Roll", "Veg Burger", "Chicken Wrap"]);
    }

    #[test]
    fn prep_time_sort_ascends() {
        let mut foods = sample();
        foods[0].preparation_time = Some(25);
        foods[1].preparation_time = Some(10);
        let criteria = FilterCriteria {
            sort: SortKey::PrepTime,
            ..FilterCriteria::for_list(&foods)
        };
        let names: Vec<_> = filter_and_sort(&foods, &criteria, "")
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["Chicken Wrap", "Veg Burger"]);
    }

    #[test]
    fn ceiling_rounds_up_to_hundreds() {
        let mut foods = sample();
        assert_eq!(price_ceiling(&foods), 200.0);

        foods.push(food("Platter", 420.0, false));
        assert_eq!(price_ceiling(&foods), 500.0);

        // Exact multiples stay put, and discounts count.
        foods.push(food("Feast", 900.0, false));
        assert_eq!(price_ceiling(&foods), 900.0);
        foods[3].discount_price = Some(601.0);
        assert_eq!(price_ceiling(&foods), 700.0);

        assert_eq!(price_ceiling(&[]), DEFAULT_PRICE_CEILING);
    }

    #[test]
    fn reset_rederives_the_ceiling() {
        let foods = vec![food("Platter", 420.0, false)];
        let mut criteria = FilterCriteria {
            category: Some("Main Course".into()),
            veg_only: true,
            min_rating: 4.0,
            sort: SortKey::Rating,
            ..FilterCriteria::default()
        };
        criteria.reset(&foods);
        assert_eq!(criteria, FilterCriteria::for_list(&foods));
        assert_eq!(criteria.max_price, 500.0);
        assert!(criteria.category.is_none());
        assert!(!criteria.veg_only);
    }

    #[test]
    fn option_lists_deduplicate_in_first_seen_order() {
        let mut foods = sample();
        foods.push(food("Gyoza", 220.0, false));
        foods[2].category = "Appetizer".into();
        foods[2].cuisine = "Japanese".into();
        foods.push(food("Second Wrap", 180.0, false));

        assert_eq!(categories(&foods), vec!["Main Course", "Appetizer"]);
        assert_eq!(cuisines(&foods), vec!["Indian", "Japanese"]);
    }

    #[test]
    fn sort_codes_round_trip() {
        for key in SortKey::all() {
            assert_eq!(SortKey::from_code(key.code()), Some(*key));
        }
        assert_eq!(SortKey::from_code("newest"), None);
    }
}
