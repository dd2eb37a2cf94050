//! NutriFit Status Tool
//!
//! Provides runtime status information about the NutriFit service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::session::Session;

/// Usage instructions for AI assistants
pub const USAGE_INSTRUCTIONS: &str = r#"
# NutriFit Usage Instructions

NutriFit estimates daily energy needs from a profile and tracks a selection
of meal options against that target.

## 1. Submit a Profile

**Tool:** `submit_profile`

| Field | Example | Notes |
|-------|---------|-------|
| weight | "70" | kilograms, must be > 0 |
| height | "175" | centimeters, must be > 0 |
| age | "30" | years, must be >= 1 |
| gender | "Man" / "Woman" | also accepts male/female |
| activity_level | "Moderately Active" | see table below |

All five fields are required. An invalid form is rejected and the previous
metrics are kept.

### Activity Levels

| Level | Multiplier |
|-------|------------|
| Sedentary | 1.17 |
| Lightly Active | 1.27 |
| Moderately Active | 1.37 |
| Very Active | 1.52 |
| Extra Active | 1.65 |
| anything else | 1.2 |

### What Comes Back

- **BMR** (Mifflin-St Jeor): 10 × weight + 6.25 × height − 5 × age, +5 for men, −161 for women
- **TDEE**: BMR × activity multiplier
- **BMI**: weight / (height in m)²
- **Target**:
  - BMI < 18.5 → underweight, TDEE + 300
  - 18.5 ≤ BMI ≤ 24.9 → healthy, TDEE
  - BMI > 24.9 → overweight, TDEE − 300

Display values are rounded (BMI to 0.1, energy to whole kcal); `exact`
holds the unrounded figures.

## 2. Pick Meals

1. `list_meal_options` (optionally `meal_time`: breakfast, lunch, snack, dinner)
2. `toggle_meal` with the option title. Calling it again unselects the option.
3. `get_selection_summary` for the total, the target and what remains.
4. `clear_selection` to start over.

Options whose calories show as "/" are unknown. They stay in the selection
but do not count toward the total.

## Notes

- Nothing is persisted; restarting the server clears the session.
- Submitting a new profile replaces the target; the selection is kept.
"#;

/// Runtime status of the NutriFit service
#[derive(Debug, Clone, Serialize)]
pub struct NutrifitStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Session information
    pub catalog_size: usize,
    pub has_metrics: bool,
    pub selected_count: usize,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Get the current status
    pub fn get_status(&self, session: &Session) -> NutrifitStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        NutrifitStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            catalog_size: session.catalog().len(),
            has_metrics: session.metrics().is_some(),
            selected_count: session.ledger().snapshot().len(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}
