//! Metrics model
//!
//! Energy figures derived from a profile.

use serde::{Deserialize, Serialize};

/// BMI classification driving the calorie target adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Advisory {
    Underweight,
    Healthy,
    Overweight,
}

impl Advisory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Advisory::Underweight => "underweight",
            Advisory::Healthy => "healthy",
            Advisory::Overweight => "overweight",
        }
    }

    /// Short recommendation
    pub fn recommendation(&self) -> &'static str {
        match self {
            Advisory::Underweight => "increase calories",
            Advisory::Healthy => "maintain intake",
            Advisory::Overweight => "deficit recommended",
        }
    }

    /// Full sentence shown next to the target
    pub fn message(&self) -> &'static str {
        match self {
            Advisory::Underweight => "You are underweight. Increasing calories is recommended.",
            Advisory::Healthy => "You are at a healthy weight. Maintain your intake.",
            Advisory::Overweight => "You are overweight. A calorie deficit is recommended.",
        }
    }
}

/// Computed metrics. Values keep full precision; rounding is a display concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub bmi: f64,
    pub bmr: f64,
    pub tdee: f64,
    pub target_calories: f64,
    pub advisory: Advisory,
}
