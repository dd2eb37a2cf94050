//! Nutrition calculation module
//!
//! Energy metrics from a profile and the meal selection ledger.

pub mod calculator;
pub mod ledger;
pub mod shared;

pub use calculator::{
    activity_multiplier, basal_metabolic_rate, body_mass_index, classify_bmi, compute_metrics,
    target_calories,
};
pub use ledger::SelectionLedger;
pub use shared::SharedLedger;
