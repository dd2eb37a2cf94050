//! Selection ledger
//!
//! An ordered set of chosen meal items with a running calorie total.

use serde::Serialize;

use crate::models::{MealItem, Metrics};

/// Meal items chosen during a browsing session, keyed by item id.
///
/// Insertion order is kept for display. An id appears at most once.
/// The ledger is a value: [`SelectionLedger::toggle`] returns the next
/// state and leaves `self` untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionLedger {
    items: Vec<MealItem>,
}

impl SelectionLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the item if its id is selected, append it otherwise
    pub fn toggle(&self, item: &MealItem) -> Self {
        let items = if self.is_selected(item) {
            self.items
                .iter()
                .filter(|selected| selected.id != item.id)
                .cloned()
                .collect()
        } else {
            let mut items = self.items.clone();
            items.push(item.clone());
            items
        };

        Self { items }
    }

    /// Membership test by id
    pub fn is_selected(&self, item: &MealItem) -> bool {
        self.contains_id(&item.id)
    }

    /// Membership test by raw id
    pub fn contains_id(&self, id: &str) -> bool {
        self.items.iter().any(|selected| selected.id == id)
    }

    /// Sum of known calorie values. Items with unknown calories stay in the
    /// selection but add nothing.
    pub fn total_calories(&self) -> u64 {
        self.items
            .iter()
            .filter_map(|item| item.calories.kcal())
            .map(u64::from)
            .sum()
    }

    /// Number of selected items that contribute to the total
    pub fn counted_items(&self) -> usize {
        self.items.iter().filter(|item| item.calories.is_known()).count()
    }

    /// Calories left before the target is reached (negative when exceeded)
    pub fn remaining(&self, metrics: &Metrics) -> f64 {
        metrics.target_calories - self.total_calories() as f64
    }

    /// Selected items in insertion order
    pub fn items(&self) -> &[MealItem] {
        &self.items
    }

    /// Number of selected items, counted or not
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing is selected
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Advisory, Calories, MealTime};

    fn item(title: &str, calories: Calories) -> MealItem {
        MealItem::new(title, MealTime::Lunch, calories)
    }

    fn metrics(target: f64) -> Metrics {
        Metrics {
            bmi: 22.0,
            bmr: 1600.0,
            tdee: target,
            target_calories: target,
            advisory: Advisory::Healthy,
        }
    }

    #[test]
    fn test_toggle_inserts_then_removes() {
        let a = item("A", Calories::Kcal(352));
        let ledger = SelectionLedger::new().toggle(&a);
        assert!(ledger.is_selected(&a));
        assert_eq!(ledger.len(), 1);

        let ledger = ledger.toggle(&a);
        assert!(!ledger.is_selected(&a));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let a = item("A", Calories::Kcal(100));
        let b = item("B", Calories::Unknown);
        let c = item("C", Calories::Kcal(250));
        let start = SelectionLedger::new().toggle(&a).toggle(&b);

        assert_eq!(start.toggle(&c).toggle(&c), start);
        assert_eq!(SelectionLedger::new().toggle(&c).toggle(&c), SelectionLedger::new());
    }

    #[test]
    fn test_toggle_leaves_previous_state_untouched() {
        let a = item("A", Calories::Kcal(100));
        let before = SelectionLedger::new();
        let after = before.toggle(&a);

        assert!(before.is_empty());
        assert_eq!(after.len(), 1);
    }

    #[test]
    fn test_membership_is_by_id() {
        let original = item("Granola", Calories::Kcal(251));
        let same_id = item("Granola", Calories::Unknown);
        let ledger = SelectionLedger::new().toggle(&original);

        assert!(ledger.is_selected(&same_id));
        assert!(ledger.toggle(&same_id).is_empty());
    }

    #[test]
    fn test_total_excludes_unknown_calories() {
        let ledger = SelectionLedger::new()
            .toggle(&item("A", Calories::Kcal(300)))
            .toggle(&item("B", Calories::Unknown));

        assert_eq!(ledger.total_calories(), 300);
        assert_eq!(ledger.counted_items(), 1);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_selection_scenario() {
        let a = item("A", Calories::Kcal(352));
        let b = item("B", Calories::Unknown);

        let ledger = SelectionLedger::new().toggle(&a).toggle(&b);
        assert_eq!(ledger.total_calories(), 352);

        let ledger = ledger.toggle(&a);
        assert_eq!(ledger.items(), &[b.clone()]);
        assert_eq!(ledger.total_calories(), 0);
    }

    #[test]
    fn test_total_of_large_values_does_not_overflow() {
        let ledger = SelectionLedger::new()
            .toggle(&item("Feast", Calories::Kcal(u32::MAX)))
            .toggle(&item("Mint", Calories::Kcal(2)));

        assert_eq!(ledger.total_calories(), u64::from(u32::MAX) + 2);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let a = item("A", Calories::Kcal(1));
        let b = item("B", Calories::Kcal(2));
        let c = item("C", Calories::Kcal(3));
        let ledger = SelectionLedger::new().toggle(&c).toggle(&a).toggle(&b).toggle(&a);

        let titles: Vec<&str> = ledger.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "B"]);
    }

    #[test]
    fn test_remaining_against_target() {
        let ledger = SelectionLedger::new()
            .toggle(&item("A", Calories::Kcal(567)))
            .toggle(&item("B", Calories::Kcal(619)));

        assert_eq!(ledger.remaining(&metrics(2000.0)), 814.0);
        assert_eq!(ledger.remaining(&metrics(1000.0)), -186.0);
        assert_eq!(SelectionLedger::new().remaining(&metrics(2258.7875)), 2258.7875);
    }
}
