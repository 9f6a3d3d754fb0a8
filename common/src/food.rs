use std::fmt;

use serde::{Deserialize, Serialize};

/// How spicy a dish is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpiceLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl SpiceLevel {
    pub fn all() -> &'static [SpiceLevel] {
        &[SpiceLevel::Low, SpiceLevel::Medium, SpiceLevel::High]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SpiceLevel::Low => "Low",
            SpiceLevel::Medium => "Medium",
            SpiceLevel::High => "High",
        }
    }

    pub fn from_label(label: &str) -> Option<SpiceLevel> {
        match label {
            "Low" => Some(SpiceLevel::Low),
            "Medium" => Some(SpiceLevel::Medium),
            "High" => Some(SpiceLevel::High),
            _ => None,
        }
    }
}

impl fmt::Display for SpiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A menu item as served by the catalog backend.
///
/// The backend owns these records; the client treats them as read-only and
/// tolerates missing optional fields. Wire names are camelCase with a
/// Mongo-style `_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub discount_price: Option<f64>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub is_veg: bool,
    #[serde(default)]
    pub calories: Option<u32>,
    #[serde(default)]
    pub preparation_time: Option<u32>,
    #[serde(default)]
    pub spice_level: SpiceLevel,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub portion_size: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub total_reviews: Option<u32>,
    /// Creation date as the backend formats it; not guaranteed to be ISO.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl FoodItem {
    /// The price a customer actually pays: the discount when one is set.
    pub fn effective_price(&self) -> f64 {
        self.discount_price.unwrap_or(self.price)
    }

    pub fn has_discount(&self) -> bool {
        self.discount_price.is_some()
    }
}

fn default_true() -> bool {
    true
}
