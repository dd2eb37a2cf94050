//! Meal Selection MCP Tools
//!
//! Browse the catalog, toggle meal options and compare the running total
//! against the calorie target.

use serde::Serialize;

use crate::models::{Calories, MealItem, MealTime};
use crate::nutrition::SelectionLedger;
use crate::session::Session;
use crate::tools::profile::round_kcal;

/// A catalog entry with its selection state
#[derive(Debug, Serialize)]
pub struct MealOption {
    pub id: String,
    pub title: String,
    pub calories: Calories,
    pub total_time: Option<String>,
    pub servings: Option<String>,
    pub selected: bool,
}

/// Options for one meal time
#[derive(Debug, Serialize)]
pub struct MealTimeGroup {
    pub meal_time: MealTime,
    pub label: &'static str,
    pub options: Vec<MealOption>,
}

/// Response for list_meal_options
#[derive(Debug, Serialize)]
pub struct ListMealOptionsResponse {
    pub groups: Vec<MealTimeGroup>,
    pub total_options: usize,
}

/// A selected item as displayed in the summary
#[derive(Debug, Serialize)]
pub struct SelectedMeal {
    pub title: String,
    pub calories: Calories,
    pub line: String,
}

/// Running total compared with the target
#[derive(Debug, Serialize)]
pub struct SelectionSummary {
    pub selected: Vec<SelectedMeal>,
    pub selected_count: usize,
    pub counted_count: usize,
    pub total_calories: u64,
    pub target_calories: Option<i64>,
    pub remaining: Option<i64>,
    pub message: String,
}

/// Response for toggle_meal
#[derive(Debug, Serialize)]
pub struct ToggleMealResponse {
    pub id: String,
    pub selected: bool,
    pub notification: String,
    pub summary: SelectionSummary,
}

impl SelectionSummary {
    fn new(ledger: &SelectionLedger, session: &Session) -> Self {
        let metrics = session.metrics();
        let total_calories = ledger.total_calories();

        let selected: Vec<SelectedMeal> = ledger
            .items()
            .iter()
            .map(|item| SelectedMeal {
                title: item.title.clone(),
                calories: item.calories,
                line: format!("• {} ({})", item.title, item.calories),
            })
            .collect();

        let message = if ledger.is_empty() {
            "No recipes selected yet.".to_string()
        } else {
            match &metrics {
                Some(m) => format!(
                    "Total Calories: {} kcal / {}",
                    total_calories,
                    round_kcal(m.target_calories)
                ),
                None => format!("Total Calories: {} kcal", total_calories),
            }
        };

        Self {
            selected_count: selected.len(),
            selected,
            counted_count: ledger.counted_items(),
            total_calories,
            target_calories: metrics.map(|m| round_kcal(m.target_calories)),
            remaining: metrics.map(|m| round_kcal(ledger.remaining(&m))),
            message,
        }
    }
}

fn meal_option(item: &MealItem, ledger: &SelectionLedger) -> MealOption {
    MealOption {
        id: item.id.clone(),
        title: item.title.clone(),
        calories: item.calories,
        total_time: item.total_time.clone(),
        servings: item.servings.clone(),
        selected: ledger.is_selected(item),
    }
}

// ============================================================================
// Meal Tools
// ============================================================================

/// List catalog options grouped by meal time, optionally for one meal time
pub fn list_meal_options(
    session: &Session,
    meal_time: Option<&str>,
) -> Result<ListMealOptionsResponse, String> {
    let filter = match meal_time {
        Some(s) => Some(MealTime::from_str(s).ok_or_else(|| {
            format!("Invalid meal_time '{}'. Use breakfast, lunch, snack or dinner.", s)
        })?),
        None => None,
    };

    let ledger = session.ledger().snapshot();
    let groups: Vec<MealTimeGroup> = MealTime::ALL
        .iter()
        .filter(|mt| filter.map_or(true, |f| f == **mt))
        .map(|mt| MealTimeGroup {
            meal_time: *mt,
            label: mt.display_name(),
            options: session
                .catalog()
                .by_meal_time(*mt)
                .map(|item| meal_option(item, &ledger))
                .collect(),
        })
        .filter(|group| !group.options.is_empty())
        .collect();

    let total_options = groups.iter().map(|g| g.options.len()).sum();
    Ok(ListMealOptionsResponse {
        groups,
        total_options,
    })
}

/// Select the meal if unselected, unselect it otherwise
pub fn toggle_meal(session: &Session, title: &str) -> Result<ToggleMealResponse, String> {
    let item = session
        .catalog()
        .find_by_title(title)
        .ok_or_else(|| format!("Meal option not found: {}", title))?;

    let ledger = session.ledger().toggle(item);
    let selected = ledger.is_selected(item);
    let notification = if selected {
        format!("{} has been selected.", item.title)
    } else {
        format!("{} has been unselected.", item.title)
    };

    tracing::info!(
        id = %item.id,
        selected,
        total_calories = ledger.total_calories(),
        "Toggled meal option"
    );

    Ok(ToggleMealResponse {
        id: item.id.clone(),
        selected,
        notification,
        summary: SelectionSummary::new(&ledger, session),
    })
}

/// Current selection with total and remaining calories
pub fn get_selection_summary(session: &Session) -> SelectionSummary {
    SelectionSummary::new(&session.ledger().snapshot(), session)
}

/// Drop every selected item
pub fn clear_selection(session: &Session) -> SelectionSummary {
    session.ledger().clear();
    tracing::info!("Cleared meal selection");
    get_selection_summary(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::tools::profile::{submit_profile, ProfileForm};

    fn session_with(items: Vec<MealItem>) -> Session {
        Session::new(Catalog::new(items).unwrap())
    }

    fn small_session() -> Session {
        session_with(vec![
            MealItem::new("A", MealTime::Breakfast, Calories::Kcal(352)),
            MealItem::new("B", MealTime::Snack, Calories::Unknown),
            MealItem::new("C", MealTime::Dinner, Calories::Kcal(312)),
        ])
    }

    fn submit_healthy_male(session: &Session) {
        let form = ProfileForm {
            name: None,
            age: "30".to_string(),
            height: "175".to_string(),
            weight: "70".to_string(),
            gender: "Man".to_string(),
            activity_level: "Moderately Active".to_string(),
        };
        submit_profile(session, &form).unwrap();
    }

    #[test]
    fn test_list_groups_builtin_catalog() {
        let session = Session::default();
        let response = list_meal_options(&session, None).unwrap();

        assert_eq!(response.total_options, 12);
        let labels: Vec<&str> = response.groups.iter().map(|g| g.label).collect();
        assert_eq!(labels, vec!["Breakfast", "Lunch", "Snack", "Dinner"]);
        assert!(response.groups.iter().flat_map(|g| &g.options).all(|o| !o.selected));
    }

    #[test]
    fn test_list_filtered_by_meal_time() {
        let session = Session::default();
        let response = list_meal_options(&session, Some("lunch")).unwrap();
        assert_eq!(response.groups.len(), 1);
        assert_eq!(response.groups[0].meal_time, MealTime::Lunch);
        assert_eq!(response.total_options, 3);

        assert!(list_meal_options(&session, Some("brunch")).is_err());
    }

    #[test]
    fn test_list_marks_selected_options() {
        let session = small_session();
        toggle_meal(&session, "C").unwrap();

        let response = list_meal_options(&session, Some("dinner")).unwrap();
        assert!(response.groups[0].options[0].selected);
    }

    #[test]
    fn test_toggle_notifications() {
        let session = small_session();

        let first = toggle_meal(&session, "A").unwrap();
        assert!(first.selected);
        assert_eq!(first.notification, "A has been selected.");

        let second = toggle_meal(&session, "A").unwrap();
        assert!(!second.selected);
        assert_eq!(second.notification, "A has been unselected.");
    }

    #[test]
    fn test_toggle_unknown_title() {
        let session = small_session();
        let err = toggle_meal(&session, "Pizza").unwrap_err();
        assert!(err.contains("Pizza"));
    }

    #[test]
    fn test_summary_scenario() {
        let session = small_session();

        toggle_meal(&session, "A").unwrap();
        let summary = toggle_meal(&session, "B").unwrap().summary;
        assert_eq!(summary.total_calories, 352);
        assert_eq!(summary.selected_count, 2);
        assert_eq!(summary.counted_count, 1);
        assert_eq!(summary.selected[1].line, "• B (/)");

        let summary = toggle_meal(&session, "A").unwrap().summary;
        assert_eq!(summary.total_calories, 0);
        assert_eq!(summary.selected_count, 1);
        assert_eq!(summary.selected[0].title, "B");
    }

    #[test]
    fn test_summary_without_metrics() {
        let session = small_session();
        let summary = get_selection_summary(&session);
        assert_eq!(summary.message, "No recipes selected yet.");
        assert_eq!(summary.target_calories, None);
        assert_eq!(summary.remaining, None);

        toggle_meal(&session, "C").unwrap();
        let summary = get_selection_summary(&session);
        assert_eq!(summary.message, "Total Calories: 312 kcal");
    }

    #[test]
    fn test_summary_against_target() {
        let session = small_session();
        submit_healthy_male(&session);

        toggle_meal(&session, "A").unwrap();
        toggle_meal(&session, "C").unwrap();
        let summary = get_selection_summary(&session);

        assert_eq!(summary.total_calories, 664);
        assert_eq!(summary.target_calories, Some(2259));
        assert_eq!(summary.remaining, Some(1595));
        assert_eq!(summary.message, "Total Calories: 664 kcal / 2259");
    }

    #[test]
    fn test_remaining_follows_metrics_changes() {
        let session = small_session();
        submit_healthy_male(&session);
        toggle_meal(&session, "A").unwrap();
        let before = get_selection_summary(&session).remaining.unwrap();

        let form = ProfileForm {
            name: None,
            age: "30".to_string(),
            height: "175".to_string(),
            weight: "50".to_string(),
            gender: "Man".to_string(),
            activity_level: "Moderately Active".to_string(),
        };
        submit_profile(&session, &form).unwrap();
        let after = get_selection_summary(&session).remaining.unwrap();

        assert_ne!(before, after);
    }

    #[test]
    fn test_clear_selection() {
        let session = small_session();
        toggle_meal(&session, "A").unwrap();
        toggle_meal(&session, "C").unwrap();

        let summary = clear_selection(&session);
        assert_eq!(summary.selected_count, 0);
        assert_eq!(summary.total_calories, 0);
    }
}
