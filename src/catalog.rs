//! Meal catalog
//!
//! The fixed list of meal options a session can pick from. A JSON file can
//! replace the built-in list.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Calories, MealItem, MealTime};

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate meal item: {0}")]
    DuplicateId(String),

    #[error("Meal item with empty title")]
    EmptyTitle,
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// One entry of a catalog file
#[derive(Debug, Deserialize)]
struct MealItemRecord {
    title: String,
    meal_time: MealTime,
    #[serde(default = "unknown_calories")]
    calories: Calories,
    #[serde(default)]
    total_time: Option<String>,
    #[serde(default)]
    servings: Option<String>,
}

fn unknown_calories() -> Calories {
    Calories::Unknown
}

impl From<MealItemRecord> for MealItem {
    fn from(record: MealItemRecord) -> Self {
        MealItem::new(record.title, record.meal_time, record.calories).with_details(
            record.total_time.as_deref().unwrap_or(""),
            record.servings.as_deref().unwrap_or(""),
        )
    }
}

/// Read-only collection of meal items with unique ids
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<MealItem>,
}

impl Catalog {
    /// Build a catalog, rejecting empty titles and duplicate ids
    pub fn new(items: Vec<MealItem>) -> CatalogResult<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            if item.id.is_empty() {
                return Err(CatalogError::EmptyTitle);
            }
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }

        Ok(Self { items })
    }

    /// Parse a JSON array of meal item records
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let records: Vec<MealItemRecord> = serde_json::from_str(json)?;
        Self::new(records.into_iter().map(MealItem::from).collect())
    }

    /// Load a catalog file
    pub fn load<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn items(&self) -> &[MealItem] {
        &self.items
    }

    /// Look up by id
    pub fn get(&self, id: &str) -> Option<&MealItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Exact id match first, then a case-insensitive title match
    pub fn find_by_title(&self, title: &str) -> Option<&MealItem> {
        let trimmed = title.trim();
        self.get(trimmed).or_else(|| {
            self.items
                .iter()
                .find(|item| item.title.eq_ignore_ascii_case(trimmed))
        })
    }

    /// Items for one meal time, in catalog order
    pub fn by_meal_time(&self, meal_time: MealTime) -> impl Iterator<Item = &MealItem> {
        self.items.iter().filter(move |item| item.meal_time == meal_time)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        builtin()
    }
}

/// The built-in meal options
pub fn builtin() -> Catalog {
    use MealTime::{Breakfast, Dinner, Lunch, Snack};

    Catalog {
        items: vec![
            entry("Raspberry-Peach-Mango Smoothie Bowl", Breakfast, "10 mins", "1", "352"),
            entry("Maple-Nut Granola", Breakfast, "1h 40mins", "8", "251"),
            entry("Vegan Freezer Breakfast Burritos", Breakfast, "30 mins", "6", "329"),
            entry("Crispy baked chicken katsu", Lunch, "1 hour", "1", "567"),
            entry("Creamy tuscan pork meatballs", Lunch, "55 mins", "6", "619"),
            entry("Chicken fries fajita", Lunch, "25 mins", "2", "561"),
            entry("1 slice Swiss cheese and 8 whole-wheat crackers", Snack, "/", "/", "267"),
            entry(
                "6 oz. 2% plain Greek yogurt, 1 cup strawberries and 1 Tbsp. honey",
                Snack,
                "/",
                "/",
                "234",
            ),
            entry("15 baby carrots, 3 Tbsp. hummus and 1 medium orange", Snack, "/", "/", "192"),
            entry("Green Goddess Salad with Chicken", Dinner, "15 mins", "1", "296"),
            entry("Creamed Spinach-Stuffed Salmon", Dinner, "30 mins", "6", "312"),
            entry("Greek Potato Salad", Dinner, "45 mins", "10", "170"),
        ],
    }
}

fn entry(title: &str, meal_time: MealTime, time: &str, servings: &str, calories: &str) -> MealItem {
    MealItem::new(title, meal_time, Calories::parse(calories)).with_details(time, servings)
}
