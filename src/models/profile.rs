//! Profile model
//!
//! The anthropometric record the metrics calculator consumes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Profile validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Field '{field}' is not a number: {value}")]
    NotANumber { field: &'static str, value: String },

    #[error("Field '{field}' must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("Unknown sex: {0}")]
    UnknownSex(String),
}

/// Result type for profile validation
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Biological sex, selects the Mifflin-St Jeor offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    /// Parse a form value ("Man", "woman", "F", ...)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "man" | "male" | "m" => Some(Sex::Male),
            "woman" | "female" | "f" => Some(Sex::Female),
            _ => None,
        }
    }
}

/// Self-reported activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
    /// Any label outside the multiplier table
    #[serde(other)]
    Unrecognized,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::ExtraActive => "extra_active",
            ActivityLevel::Unrecognized => "unrecognized",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
            ActivityLevel::ExtraActive => "Extra Active",
            ActivityLevel::Unrecognized => "Unrecognized",
        }
    }

    /// Parse a label. Spaces, underscores, dashes and case are ignored, so
    /// "Lightly Active", "lightly_active" and "LightlyActive" all match.
    /// Anything else is `Unrecognized`.
    pub fn from_label(s: &str) -> Self {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "sedentary" => ActivityLevel::Sedentary,
            "lightlyactive" => ActivityLevel::LightlyActive,
            "moderatelyactive" => ActivityLevel::ModeratelyActive,
            "veryactive" => ActivityLevel::VeryActive,
            "extraactive" => ActivityLevel::ExtraActive,
            _ => ActivityLevel::Unrecognized,
        }
    }
}

/// A validated profile.
///
/// Fields are private so a `Profile` can only exist once [`Profile::new`]
/// has checked that weight, height and age are positive. The metrics
/// calculator relies on this and does not re-check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Profile {
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: Sex,
    activity_level: ActivityLevel,
}

impl Profile {
    /// Build a profile, rejecting non-positive or non-finite measurements
    pub fn new(
        weight_kg: f64,
        height_cm: f64,
        age_years: u32,
        sex: Sex,
        activity_level: ActivityLevel,
    ) -> ProfileResult<Self> {
        check_positive("weight", weight_kg)?;
        check_positive("height", height_cm)?;
        if age_years == 0 {
            return Err(ProfileError::NonPositive { field: "age", value: 0.0 });
        }

        Ok(Self {
            weight_kg,
            height_cm,
            age_years,
            sex,
            activity_level,
        })
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn age_years(&self) -> u32 {
        self.age_years
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn activity_level(&self) -> ActivityLevel {
        self.activity_level
    }
}

fn check_positive(field: &'static str, value: f64) -> ProfileResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ProfileError::NonPositive { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_from_form_values() {
        assert_eq!(Sex::from_str("Man"), Some(Sex::Male));
        assert_eq!(Sex::from_str("Woman"), Some(Sex::Female));
        assert_eq!(Sex::from_str(" female "), Some(Sex::Female));
        assert_eq!(Sex::from_str("M"), Some(Sex::Male));
        assert_eq!(Sex::from_str("other"), None);
    }

    #[test]
    fn test_activity_level_labels() {
        assert_eq!(ActivityLevel::from_label("Sedentary"), ActivityLevel::Sedentary);
        assert_eq!(ActivityLevel::from_label("Lightly Active"), ActivityLevel::LightlyActive);
        assert_eq!(ActivityLevel::from_label("moderately_active"), ActivityLevel::ModeratelyActive);
        assert_eq!(ActivityLevel::from_label("VeryActive"), ActivityLevel::VeryActive);
        assert_eq!(ActivityLevel::from_label("extra-active"), ActivityLevel::ExtraActive);
        assert_eq!(ActivityLevel::from_label("couch potato"), ActivityLevel::Unrecognized);
    }

    #[test]
    fn test_activity_level_display_round_trip() {
        for level in ActivityLevel::ALL {
            assert_eq!(ActivityLevel::from_label(level.display_name()), level);
            assert_eq!(ActivityLevel::from_label(level.as_str()), level);
        }
    }

    #[test]
    fn test_activity_level_deserializes_unknown_as_unrecognized() {
        let level: ActivityLevel = serde_json::from_str(r#""very_active""#).unwrap();
        assert_eq!(level, ActivityLevel::VeryActive);
        let level: ActivityLevel = serde_json::from_str(r#""marathoner""#).unwrap();
        assert_eq!(level, ActivityLevel::Unrecognized);
    }

    #[test]
    fn test_profile_rejects_non_positive() {
        let err = Profile::new(0.0, 175.0, 30, Sex::Male, ActivityLevel::Sedentary).unwrap_err();
        assert_eq!(err, ProfileError::NonPositive { field: "weight", value: 0.0 });

        let err = Profile::new(70.0, -1.0, 30, Sex::Male, ActivityLevel::Sedentary).unwrap_err();
        assert_eq!(err, ProfileError::NonPositive { field: "height", value: -1.0 });

        let err = Profile::new(70.0, 175.0, 0, Sex::Male, ActivityLevel::Sedentary).unwrap_err();
        assert_eq!(err, ProfileError::NonPositive { field: "age", value: 0.0 });

        assert!(Profile::new(f64::NAN, 175.0, 30, Sex::Male, ActivityLevel::Sedentary).is_err());
        assert!(Profile::new(70.0, f64::INFINITY, 30, Sex::Male, ActivityLevel::Sedentary).is_err());
    }

    #[test]
    fn test_profile_accessors() {
        let p = Profile::new(70.0, 175.0, 30, Sex::Female, ActivityLevel::VeryActive).unwrap();
        assert_eq!(p.weight_kg(), 70.0);
        assert_eq!(p.height_cm(), 175.0);
        assert_eq!(p.age_years(), 30);
        assert_eq!(p.sex(), Sex::Female);
        assert_eq!(p.activity_level(), ActivityLevel::VeryActive);
    }
}
