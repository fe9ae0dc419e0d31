// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::tasks::models::{FilterName, SavedFilter};

/// The local copy of the user's saved task filters, including which one is
/// designated as the default.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait SavedFiltersRepository: Send + Sync {
    fn get(&self, name: &FilterName) -> Option<SavedFilter>;
    fn get_all(&self) -> Vec<SavedFilter>;

    fn put(&self, filter: SavedFilter);
    fn delete(&self, name: &FilterName) -> bool;

    fn default_filter_name(&self) -> Option<FilterName>;
    fn set_default_filter_name(&self, name: Option<FilterName>);

    /// Replaces the whole repository with server state.
    fn replace(&self, filters: Vec<SavedFilter>, default_filter: Option<FilterName>);

    fn clear(&self);
}
