//! Data models
//!
//! Value types shared by the calculator, the ledger and the service layer.

mod meal_item;
mod metrics;
mod profile;

pub use meal_item::{Calories, MealItem, MealTime, UNKNOWN_CALORIES_MARKER};
pub use metrics::{Advisory, Metrics};
pub use profile::{ActivityLevel, Profile, ProfileError, ProfileResult, Sex};
