//! Profile and Metrics MCP Tools
//!
//! Validates profile forms, runs the calculator and formats the result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{
    ActivityLevel, Advisory, Metrics, Profile, ProfileError, ProfileResult, Sex,
};
use crate::nutrition::{activity_multiplier, compute_metrics};
use crate::session::{Assessment, Session};

/// Raw profile form values as entered by the user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub activity_level: String,
}

impl ProfileForm {
    /// Validate the form and map it to a profile
    pub fn into_profile(&self) -> ProfileResult<Profile> {
        let weight = required("weight", &self.weight)?;
        let height = required("height", &self.height)?;
        let age = required("age", &self.age)?;
        let gender = required("gender", &self.gender)?;
        let activity = required("activity_level", &self.activity_level)?;

        let weight_kg = parse_measurement("weight", weight)?;
        let height_cm = parse_measurement("height", height)?;
        let age_value = parse_measurement("age", age)?;
        // Fractional ages are truncated; anything under one year is rejected
        let age_years = age_value.trunc() as u32;
        if age_years == 0 {
            return Err(ProfileError::NonPositive { field: "age", value: age_value });
        }

        let sex = Sex::from_str(gender).ok_or_else(|| ProfileError::UnknownSex(gender.to_string()))?;

        let activity_level = ActivityLevel::from_label(activity);
        if activity_level == ActivityLevel::Unrecognized {
            tracing::warn!(
                "Unrecognized activity level '{}', using default multiplier",
                activity
            );
        }

        Profile::new(weight_kg, height_cm, age_years, sex, activity_level)
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> ProfileResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ProfileError::MissingField(field))
    } else {
        Ok(trimmed)
    }
}

fn parse_measurement(field: &'static str, value: &str) -> ProfileResult<f64> {
    let parsed: f64 = value.parse().map_err(|_| ProfileError::NotANumber {
        field,
        value: value.to_string(),
    })?;

    if parsed.is_finite() && parsed > 0.0 {
        Ok(parsed)
    } else {
        Err(ProfileError::NonPositive { field, value: parsed })
    }
}

/// Round to whole kcal, halves upward
pub fn round_kcal(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Round a BMI to one decimal
pub fn round_bmi(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Display-ready metrics
#[derive(Debug, Clone, Serialize)]
pub struct MetricsDisplay {
    pub bmi: f64,
    pub bmr: i64,
    pub tdee: i64,
    pub target_calories: i64,
    pub advisory: Advisory,
    pub advice: String,
    pub sex: Sex,
    pub activity_level: String,
    pub activity_multiplier: f64,
    pub summary: String,
    pub computed_at: DateTime<Utc>,
    /// Unrounded values
    pub exact: Metrics,
}

impl MetricsDisplay {
    pub fn new(assessment: &Assessment) -> Self {
        let metrics = assessment.metrics;
        let level = assessment.profile.activity_level();
        let bmi = round_bmi(metrics.bmi);
        let target_calories = round_kcal(metrics.target_calories);

        Self {
            bmi,
            bmr: round_kcal(metrics.bmr),
            tdee: round_kcal(metrics.tdee),
            target_calories,
            advisory: metrics.advisory,
            advice: metrics.advisory.message().to_string(),
            sex: assessment.profile.sex(),
            activity_level: level.display_name().to_string(),
            activity_multiplier: activity_multiplier(level),
            summary: format!(
                "BMI: {:.1} | BMR: {} kcal | TDEE: {} kcal | Recommended: {} kcal / day",
                bmi,
                round_kcal(metrics.bmr),
                round_kcal(metrics.tdee),
                target_calories
            ),
            computed_at: assessment.submitted_at,
            exact: metrics,
        }
    }
}

// ============================================================================
// Profile Tools
// ============================================================================

/// Validate a profile form, compute metrics and store them in the session
pub fn submit_profile(session: &Session, form: &ProfileForm) -> Result<MetricsDisplay, String> {
    let profile = form
        .into_profile()
        .map_err(|e| format!("Invalid profile: {}", e))?;
    let metrics = compute_metrics(&profile);

    tracing::info!(
        bmi = metrics.bmi,
        target_calories = metrics.target_calories,
        advisory = metrics.advisory.as_str(),
        "Computed metrics for submitted profile"
    );

    let assessment = Assessment {
        profile,
        metrics,
        submitted_at: Utc::now(),
    };
    session.set_assessment(assessment);
    Ok(MetricsDisplay::new(&assessment))
}

/// Metrics from the latest submission
pub fn get_metrics(session: &Session) -> Result<MetricsDisplay, String> {
    session
        .assessment()
        .map(|a| MetricsDisplay::new(&a))
        .ok_or_else(|| "No profile submitted yet. Call submit_profile first.".to_string())
}
