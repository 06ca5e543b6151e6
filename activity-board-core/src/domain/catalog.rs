use crate::domain::{Activity, CategoryOption, SortKey, ViewQuery};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Snapshot of the server's full activity dataset
///
/// Deserializes directly from the `GET /activities` JSON object (activity
/// name → details). Replaced wholesale on every successful load; there is no
/// incremental merge. Backed by a `BTreeMap` so iteration order (and
/// therefore the tie-breaking of the stable view sort) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Catalog {
    activities: BTreeMap<String, Activity>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of activities in the snapshot
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Whether the snapshot holds no activities
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Look up an activity by name
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    /// Insert or replace an activity
    pub fn insert(&mut self, name: String, activity: Activity) {
        self.activities.insert(name, activity);
    }

    /// All activities, keyed by name
    pub fn activities(&self) -> &BTreeMap<String, Activity> {
        &self.activities
    }

    /// All activity names in lexicographic order (for the signup select)
    pub fn activity_names(&self) -> Vec<String> {
        self.activities.keys().cloned().collect()
    }

    /// Distinct, non-empty categories in lexicographic order, prefixed
    /// with the "All Categories" sentinel (empty value = no filter)
    pub fn category_options(&self) -> Vec<CategoryOption> {
        let categories: BTreeSet<&str> = self
            .activities
            .values()
            .filter_map(|a| a.category.as_deref())
            .filter(|c| !c.is_empty())
            .collect();

        let mut options = vec![CategoryOption::all()];
        options.extend(categories.into_iter().map(CategoryOption::named));
        options
    }

    /// Derive the filtered, sorted view for the current control state
    ///
    /// Pure with respect to the snapshot: applies the category equality
    /// filter, then the case-insensitive name-or-description search, then a
    /// stable sort by the requested key. An empty result is a valid view,
    /// distinct from "no snapshot loaded".
    pub fn filtered(&self, query: &ViewQuery) -> Vec<(String, Activity)> {
        let mut entries: Vec<(String, Activity)> = self
            .activities
            .iter()
            .filter(|(_, activity)| {
                query.category.is_empty()
                    || activity.category.as_deref() == Some(query.category.as_str())
            })
            .filter(|(name, activity)| {
                query.search.is_empty() || activity.matches_search(name, &query.search)
            })
            .map(|(name, activity)| (name.clone(), activity.clone()))
            .collect();

        match query.sort {
            SortKey::Name => entries.sort_by(|a, b| a.0.cmp(&b.0)),
            // Raw string compare on the schedule text, not parsed time
            SortKey::Time => entries.sort_by(|a, b| a.1.schedule.cmp(&b.1.schedule)),
        }

        tracing::trace!(
            "view: {} of {} activities match (sort: {})",
            entries.len(),
            self.activities.len(),
            query.sort
        );

        entries
    }
}

impl FromIterator<(String, Activity)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        Catalog {
            activities: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.insert(
            "Chess Club".to_string(),
            Activity::new(
                "Learn strategies and compete in chess tournaments".to_string(),
                "Fridays, 3:30 PM - 5:00 PM".to_string(),
                12,
            )
            .with_category("Games".to_string())
            .with_participants(vec!["michael@mergington.edu".to_string()]),
        );
        catalog.insert(
            "Programming Class".to_string(),
            Activity::new(
                "Learn programming fundamentals".to_string(),
                "Tuesdays, 3:30 PM - 4:30 PM".to_string(),
                20,
            )
            .with_category("Academics".to_string()),
        );
        catalog.insert(
            "Gym Class".to_string(),
            Activity::new(
                "Physical education and sports".to_string(),
                "Mondays, 2:00 PM - 3:00 PM".to_string(),
                30,
            )
            .with_category("Sports".to_string())
            .with_participants(vec![
                "john@mergington.edu".to_string(),
                "olivia@mergington.edu".to_string(),
            ]),
        );
        catalog.insert(
            "Drop-in Tutoring".to_string(),
            Activity::new(
                "Homework help for all subjects".to_string(),
                "Wednesdays, 3:00 PM - 4:00 PM".to_string(),
                15,
            ),
        );
        catalog
    }

    #[test]
    fn test_unfiltered_view_contains_everything() {
        let catalog = fixture();
        let view = catalog.filtered(&ViewQuery::default());

        assert_eq!(view.len(), 4);
    }

    #[test]
    fn test_category_filter_exact_match_only() {
        let catalog = fixture();
        let view = catalog.filtered(&ViewQuery::default().with_category("Games"));

        assert_eq!(view.len(), 1);
        assert_eq!(view[0].0, "Chess Club");
    }

    #[test]
    fn test_uncategorized_never_matches_a_category_filter() {
        let catalog = fixture();
        let view = catalog.filtered(&ViewQuery::default().with_category("Academics"));

        // "Drop-in Tutoring" has no category and must not appear
        assert!(view.iter().all(|(name, _)| name != "Drop-in Tutoring"));
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].0, "Programming Class");
    }

    #[test]
    fn test_search_matches_name_or_description() {
        let catalog = fixture();

        // Name match, case-insensitive
        let view = catalog.filtered(&ViewQuery::default().with_search("CHESS"));
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].0, "Chess Club");

        // Description match
        let view = catalog.filtered(&ViewQuery::default().with_search("homework"));
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].0, "Drop-in Tutoring");

        // No match is a valid, empty view
        let view = catalog.filtered(&ViewQuery::default().with_search("robotics"));
        assert!(view.is_empty());
    }

    #[test]
    fn test_category_and_search_compose() {
        let catalog = fixture();
        let query = ViewQuery::default()
            .with_category("Sports")
            .with_search("physical");

        let view = catalog.filtered(&query);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].0, "Gym Class");

        // Same search under the wrong category finds nothing
        let query = ViewQuery::default()
            .with_category("Games")
            .with_search("physical");
        assert!(catalog.filtered(&query).is_empty());
    }

    #[test]
    fn test_sort_by_name_is_lexicographic() {
        let catalog = fixture();
        let view = catalog.filtered(&ViewQuery::default().with_sort(SortKey::Name));

        let names: Vec<&str> = view.iter().map(|(name, _)| name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_sort_by_time_compares_raw_schedule_strings() {
        let catalog = fixture();
        let view = catalog.filtered(&ViewQuery::default().with_sort(SortKey::Time));

        let schedules: Vec<&str> = view
            .iter()
            .map(|(_, activity)| activity.schedule.as_str())
            .collect();
        let mut sorted = schedules.clone();
        sorted.sort();
        assert_eq!(schedules, sorted);

        // Lexicographic, not chronological: "Fridays..." sorts before
        // "Mondays..." even though Monday comes first in the week
        assert_eq!(view[0].0, "Chess Club");
    }

    #[test]
    fn test_filtered_is_idempotent() {
        let catalog = fixture();
        let query = ViewQuery::default()
            .with_search("class")
            .with_sort(SortKey::Time);

        let once = catalog.filtered(&query);
        let rebuilt: Catalog = once.iter().cloned().collect();
        let twice = rebuilt.filtered(&query);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_category_options_sentinel_first() {
        let mut catalog = Catalog::new();
        catalog.insert(
            "Chess Club".to_string(),
            Activity::new("d".to_string(), "Fri 3pm".to_string(), 10)
                .with_category("Games".to_string())
                .with_participants(vec!["a@x.com".to_string()]),
        );

        let options = catalog.category_options();
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();

        assert_eq!(values, vec!["", "Games"]);
        assert_eq!(labels, vec!["All Categories", "Games"]);
    }

    #[test]
    fn test_category_options_distinct_and_sorted() {
        let catalog = fixture();
        let options = catalog.category_options();
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();

        assert_eq!(values, vec!["", "Academics", "Games", "Sports"]);
    }

    #[test]
    fn test_empty_catalog_options_only_sentinel() {
        let catalog = Catalog::new();
        let options = catalog.category_options();

        assert_eq!(options, vec![CategoryOption::all()]);
        assert!(catalog.filtered(&ViewQuery::default()).is_empty());
    }

    #[test]
    fn test_activity_names_sorted() {
        let catalog = fixture();
        assert_eq!(
            catalog.activity_names(),
            vec![
                "Chess Club",
                "Drop-in Tutoring",
                "Gym Class",
                "Programming Class"
            ]
        );
    }

    #[test]
    fn test_deserialize_server_payload() {
        let json = r#"{
            "Chess Club": {
                "description": "d",
                "schedule": "Fri 3pm",
                "category": "Games",
                "max_participants": 10,
                "participants": ["a@x.com"]
            }
        }"#;

        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("Chess Club").unwrap().spots_left(), 9);
    }

    #[test]
    fn test_snapshot_replaced_wholesale() {
        let old = fixture();

        let json = r#"{"Chess Club": {"description": "d", "schedule": "Fri 3pm", "max_participants": 10}}"#;
        let new: Catalog = serde_json::from_str(json).unwrap();

        // The refreshed snapshot carries nothing over from the old one
        assert_eq!(new.len(), 1);
        assert!(new.get("Gym Class").is_none());
        assert_eq!(old.len(), 4);
    }
}
