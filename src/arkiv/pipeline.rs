//! # Pipeline Engine
//!
//! The pure query pipeline: category filter, then search filter, then a
//! stable sort. Deterministic for a given `(catalog, state)` pair, never
//! mutates the catalog, and borrows rather than clones.

use crate::catalog::Catalog;
use crate::model::Item;
use crate::query::{DateFilter, MediaFilter, QueryState, SortKey};
use std::cmp::Ordering;

/// Runs the full pipeline and returns the filtered, sorted result set.
///
/// The sort is stable: items with equal sort keys keep their relative
/// order from the filtered set (which itself preserves catalog order).
pub fn compute<'a>(catalog: &'a Catalog, state: &QueryState) -> Vec<&'a Item> {
    let term = state.search_term.to_lowercase();

    let mut results: Vec<&Item> = catalog
        .items()
        .iter()
        .filter(|item| category_matches(item, state))
        .filter(|item| term.is_empty() || item.name.to_lowercase().contains(&term))
        .collect();

    results.sort_by(|a, b| compare(a, b, state.sort_key));
    results
}

fn category_matches(item: &Item, state: &QueryState) -> bool {
    let date_ok = match state.filters.date {
        DateFilter::All => true,
        DateFilter::Year(year) => item.date == year,
    };
    let media_ok = match &state.filters.media {
        MediaFilter::All => true,
        MediaFilter::Kind(kind) => item.media.to_lowercase().contains(&kind.to_lowercase()),
    };
    date_ok && media_ok
}

fn compare(a: &Item, b: &Item, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Oldest => a.date.cmp(&b.date),
        SortKey::Recent => b.date.cmp(&a.date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Filters;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Item::new("Concatenate", 2020, "Video"),
            Item::new("Dog", 2021, "VIDEO clip"),
            Item::new("CATalog", 2021, "audio"),
            Item::new("Etching", 2019, "Print"),
        ])
    }

    #[test]
    fn media_filter_matches_case_insensitive_substring() {
        let mut state = QueryState::default();
        state.filters = Filters {
            date: DateFilter::All,
            media: MediaFilter::Kind("video".into()),
        };

        let catalog = catalog();
        let names: Vec<&str> = compute(&catalog, &state)
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(names, vec!["Dog", "Concatenate"]);
    }

    #[test]
    fn year_filter_keeps_only_that_year() {
        let mut state = QueryState::default();
        state.filters = Filters {
            date: DateFilter::Year(2021),
            media: MediaFilter::All,
        };

        let catalog = catalog();
        let results = compute(&catalog, &state);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|item| item.date == 2021));
    }

    #[test]
    fn search_matches_names_case_insensitively() {
        let mut state = QueryState::default();
        state.set_search_term("cat");

        let catalog = catalog();
        let names: Vec<&str> = compute(&catalog, &state)
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        // Recent sort puts 2021 first; "Dog" never matches.
        assert_eq!(names, vec!["CATalog", "Concatenate"]);
    }

    #[test]
    fn empty_search_matches_everything() {
        let state = QueryState::default();
        assert_eq!(compute(&catalog(), &state).len(), 4);
    }

    #[test]
    fn output_is_a_subset_satisfying_both_predicates() {
        let mut state = QueryState::default();
        state.filters = Filters {
            date: DateFilter::Year(2021),
            media: MediaFilter::Kind("video".into()),
        };
        state.search_term = "dog".into();

        let catalog = catalog();
        let results = compute(&catalog, &state);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Dog");
        for item in results {
            assert_eq!(item.date, 2021);
            assert!(item.media.to_lowercase().contains("video"));
            assert!(item.name.to_lowercase().contains("dog"));
        }
    }

    #[test]
    fn recent_sort_is_stable_within_equal_years() {
        let catalog = Catalog::new(vec![
            Item::new("First 2020", 2020, "Video"),
            Item::new("First 2021", 2021, "Video"),
            Item::new("Second 2020", 2020, "Video"),
            Item::new("Second 2021", 2021, "Video"),
        ]);
        let state = QueryState::default();

        let names: Vec<&str> = compute(&catalog, &state)
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["First 2021", "Second 2021", "First 2020", "Second 2020"]
        );
    }

    #[test]
    fn name_sort_ignores_case() {
        let catalog = Catalog::new(vec![
            Item::new("banana", 2020, "Video"),
            Item::new("Apple", 2021, "Video"),
            Item::new("cherry", 2019, "Video"),
        ]);
        let mut state = QueryState::default();
        state.set_sort_key(SortKey::Name);

        let names: Vec<&str> = compute(&catalog, &state)
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(names, vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn oldest_sort_ascends_by_year() {
        let mut state = QueryState::default();
        state.set_sort_key(SortKey::Oldest);

        let catalog = catalog();
        let years: Vec<i32> = compute(&catalog, &state)
            .iter()
            .map(|item| item.date)
            .collect();
        assert_eq!(years, vec![2019, 2020, 2021, 2021]);
    }

    #[test]
    fn sensitive_items_are_never_filtered_out() {
        let mut flagged = Item::new("Flagged", 2021, "Video");
        flagged.sensitive = true;
        let catalog = Catalog::new(vec![flagged, Item::new("Plain", 2020, "Video")]);

        // content_visible off by default; the pipeline ignores the flag.
        let state = QueryState::default();
        assert_eq!(compute(&catalog, &state).len(), 2);
    }
}
