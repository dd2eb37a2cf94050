//! Meal item model
//!
//! Read-only catalog entries the selection ledger tracks.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Display marker for an unknown calorie value
pub const UNKNOWN_CALORIES_MARKER: &str = "/";

/// Meal time grouping (display only, never used in calculations)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealTime {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealTime {
    pub const ALL: [MealTime; 4] = [
        MealTime::Breakfast,
        MealTime::Lunch,
        MealTime::Snack,
        MealTime::Dinner,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealTime::Breakfast => "breakfast",
            MealTime::Lunch => "lunch",
            MealTime::Snack => "snack",
            MealTime::Dinner => "dinner",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Some(MealTime::Breakfast),
            "lunch" => Some(MealTime::Lunch),
            "snack" | "snacks" => Some(MealTime::Snack),
            "dinner" => Some(MealTime::Dinner),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MealTime::Breakfast => "Breakfast",
            MealTime::Lunch => "Lunch",
            MealTime::Snack => "Snack",
            MealTime::Dinner => "Dinner",
        }
    }
}

/// Calorie value of a meal item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Calories {
    Kcal(u32),
    /// Displayable but excluded from aggregation
    Unknown,
}

impl Calories {
    /// Parse a catalog value from its leading whole number, so "250.5" and
    /// "250 kcal" count as 250. Text without leading digits is unknown.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        let digits = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .map_or(trimmed, |end| &trimmed[..end]);
        digits.parse::<u32>().map(Calories::Kcal).unwrap_or(Calories::Unknown)
    }

    /// Whole kcal from a JSON number; fractions are dropped
    pub fn from_number(n: f64) -> Self {
        if n.is_finite() && n >= 0.0 && n < f64::from(u32::MAX) + 1.0 {
            Calories::Kcal(n.trunc() as u32)
        } else {
            Calories::Unknown
        }
    }

    pub fn kcal(&self) -> Option<u32> {
        match self {
            Calories::Kcal(n) => Some(*n),
            Calories::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Calories::Kcal(_))
    }
}

impl fmt::Display for Calories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Calories::Kcal(n) => write!(f, "{}", n),
            Calories::Unknown => f.write_str(UNKNOWN_CALORIES_MARKER),
        }
    }
}

impl Serialize for Calories {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Calories::Kcal(n) => serializer.serialize_u32(*n),
            Calories::Unknown => serializer.serialize_str(UNKNOWN_CALORIES_MARKER),
        }
    }
}

impl<'de> Deserialize<'de> for Calories {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        Ok(match Option::<Raw>::deserialize(deserializer)? {
            Some(Raw::Number(n)) => Calories::from_number(n),
            Some(Raw::Text(s)) => Calories::parse(&s),
            None => Calories::Unknown,
        })
    }
}

/// A meal option from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealItem {
    /// Unique within a catalog; derived from the title
    pub id: String,
    pub title: String,
    pub meal_time: MealTime,
    pub calories: Calories,
    pub total_time: Option<String>,
    pub servings: Option<String>,
}

impl MealItem {
    pub fn new(title: impl Into<String>, meal_time: MealTime, calories: Calories) -> Self {
        let title = title.into().trim().to_string();
        Self {
            id: title.clone(),
            title,
            meal_time,
            calories,
            total_time: None,
            servings: None,
        }
    }

    /// Attach preparation time and yield. "/" means not applicable.
    pub fn with_details(mut self, total_time: &str, servings: &str) -> Self {
        self.total_time = not_applicable(total_time);
        self.servings = not_applicable(servings);
        self
    }
}

fn not_applicable(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed == UNKNOWN_CALORIES_MARKER {
        None
    } else {
        Some(trimmed.to_string())
    }
}
