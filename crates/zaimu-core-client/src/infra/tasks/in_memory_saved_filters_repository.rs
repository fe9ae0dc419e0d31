// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::RwLock;

use crate::domain::tasks::models::{FilterName, SavedFilter};
use crate::domain::tasks::repos::SavedFiltersRepository;

#[derive(Default)]
struct State {
    filters: Vec<SavedFilter>,
    default_filter: Option<FilterName>,
}

#[derive(Default)]
pub struct InMemorySavedFiltersRepository {
    state: RwLock<State>,
}

impl InMemorySavedFiltersRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SavedFiltersRepository for InMemorySavedFiltersRepository {
    fn get(&self, name: &FilterName) -> Option<SavedFilter> {
        self.state
            .read()
            .filters
            .iter()
            .find(|f| f.name == *name)
            .cloned()
    }

    fn get_all(&self) -> Vec<SavedFilter> {
        self.state.read().filters.clone()
    }

    fn put(&self, filter: SavedFilter) {
        let mut state = self.state.write();
        match state.filters.iter_mut().find(|f| f.name == filter.name) {
            Some(existing) => *existing = filter,
            None => state.filters.push(filter),
        }
    }

    fn delete(&self, name: &FilterName) -> bool {
        let mut state = self.state.write();
        let len = state.filters.len();
        state.filters.retain(|f| f.name != *name);
        state.filters.len() != len
    }

    fn default_filter_name(&self) -> Option<FilterName> {
        self.state.read().default_filter.clone()
    }

    fn set_default_filter_name(&self, name: Option<FilterName>) {
        self.state.write().default_filter = name;
    }

    fn replace(&self, filters: Vec<SavedFilter>, default_filter: Option<FilterName>) {
        let mut state = self.state.write();
        state.filters = filters;
        state.default_filter = default_filter;
    }

    fn clear(&self) {
        let mut state = self.state.write();
        state.filters.clear();
        state.default_filter = None;
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use crate::domain::tasks::models::FilterPredicate;

    use super::*;

    fn filter(name: &str) -> SavedFilter {
        SavedFilter {
            name: FilterName::from(name),
            predicate: FilterPredicate::default(),
            is_system_default: false,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_put_replaces_filter_with_same_name() {
        let repo = InMemorySavedFiltersRepository::new();

        repo.put(filter("Open"));
        repo.put(filter("Open"));

        assert_eq!(repo.get_all().len(), 1);
    }

    #[test]
    fn test_replace_swaps_state_wholesale() {
        let repo = InMemorySavedFiltersRepository::new();

        repo.put(filter("Open"));
        repo.set_default_filter_name(Some(FilterName::from("Open")));

        repo.replace(vec![filter("Mine")], None);

        assert_eq!(repo.get(&FilterName::from("Open")), None);
        assert_eq!(repo.default_filter_name(), None);
        assert!(repo.get(&FilterName::from("Mine")).is_some());
    }
}
