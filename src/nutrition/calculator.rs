//! Energy metrics calculation
//!
//! Turns a validated profile into BMI, BMR, TDEE and a daily calorie target.
//! Every function here is pure and total over validated profiles.

use crate::models::{ActivityLevel, Advisory, Metrics, Profile, Sex};

// ============================================================================
// Mifflin-St Jeor Coefficients
// ============================================================================

/// kcal per kilogram of body weight
pub const BMR_WEIGHT_FACTOR: f64 = 10.0;
/// kcal per centimeter of height
pub const BMR_HEIGHT_FACTOR: f64 = 6.25;
/// kcal per year of age (subtracted)
pub const BMR_AGE_FACTOR: f64 = 5.0;
/// Constant term for males
pub const BMR_MALE_OFFSET: f64 = 5.0;
/// Constant term for females
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

// ============================================================================
// Activity Multipliers
// ============================================================================

pub const SEDENTARY_MULTIPLIER: f64 = 1.17;
pub const LIGHTLY_ACTIVE_MULTIPLIER: f64 = 1.27;
pub const MODERATELY_ACTIVE_MULTIPLIER: f64 = 1.37;
pub const VERY_ACTIVE_MULTIPLIER: f64 = 1.52;
pub const EXTRA_ACTIVE_MULTIPLIER: f64 = 1.65;
/// Used for any activity level outside the table
pub const DEFAULT_ACTIVITY_MULTIPLIER: f64 = 1.2;

// ============================================================================
// BMI Thresholds and Target Adjustment
// ============================================================================

/// BMI strictly below this is underweight
pub const UNDERWEIGHT_BMI_LIMIT: f64 = 18.5;
/// BMI up to and including this is healthy
pub const HEALTHY_BMI_LIMIT: f64 = 24.9;
/// kcal added for underweight, removed for overweight
pub const CALORIE_ADJUSTMENT: f64 = 300.0;

/// Basal metabolic rate in kcal/day (Mifflin-St Jeor)
pub fn basal_metabolic_rate(profile: &Profile) -> f64 {
    let offset = match profile.sex() {
        Sex::Male => BMR_MALE_OFFSET,
        Sex::Female => BMR_FEMALE_OFFSET,
    };

    BMR_WEIGHT_FACTOR * profile.weight_kg() + BMR_HEIGHT_FACTOR * profile.height_cm()
        - BMR_AGE_FACTOR * f64::from(profile.age_years())
        + offset
}

/// Multiplier applied to BMR for the given activity level
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => SEDENTARY_MULTIPLIER,
        ActivityLevel::LightlyActive => LIGHTLY_ACTIVE_MULTIPLIER,
        ActivityLevel::ModeratelyActive => MODERATELY_ACTIVE_MULTIPLIER,
        ActivityLevel::VeryActive => VERY_ACTIVE_MULTIPLIER,
        ActivityLevel::ExtraActive => EXTRA_ACTIVE_MULTIPLIER,
        ActivityLevel::Unrecognized => DEFAULT_ACTIVITY_MULTIPLIER,
    }
}

/// Body mass index in kg/m²
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify a BMI. Boundaries: `< 18.5` underweight, `<= 24.9` healthy.
pub fn classify_bmi(bmi: f64) -> Advisory {
    if bmi < UNDERWEIGHT_BMI_LIMIT {
        Advisory::Underweight
    } else if bmi <= HEALTHY_BMI_LIMIT {
        Advisory::Healthy
    } else {
        Advisory::Overweight
    }
}

/// Daily calorie target for a TDEE and classification
pub fn target_calories(tdee: f64, advisory: Advisory) -> f64 {
    match advisory {
        Advisory::Underweight => tdee + CALORIE_ADJUSTMENT,
        Advisory::Healthy => tdee,
        Advisory::Overweight => tdee - CALORIE_ADJUSTMENT,
    }
}

/// Compute the full metrics record for a profile
pub fn compute_metrics(profile: &Profile) -> Metrics {
    let bmr = basal_metabolic_rate(profile);
    let tdee = bmr * activity_multiplier(profile.activity_level());
    let bmi = body_mass_index(profile.weight_kg(), profile.height_cm());
    let advisory = classify_bmi(bmi);

    Metrics {
        bmi,
        bmr,
        tdee,
        target_calories: target_calories(tdee, advisory),
        advisory,
    }
}
