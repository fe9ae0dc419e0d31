// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::shared::models::UserId;
use crate::domain::tasks::models::{FilterName, FilterPreferences, SavedFilter};

/// Persists saved filters and the default-filter designation on the
/// backend.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait PreferencesService: Send + Sync {
    async fn load_filter_preferences(&self, user_id: &UserId) -> Result<FilterPreferences>;

    async fn save_filter(&self, user_id: &UserId, filter: &SavedFilter) -> Result<()>;
    async fn delete_filter(&self, user_id: &UserId, name: &FilterName) -> Result<()>;
    async fn rename_filter(
        &self,
        user_id: &UserId,
        name: &FilterName,
        new_name: &FilterName,
    ) -> Result<()>;

    async fn set_default_filter(&self, user_id: &UserId, name: Option<FilterName>)
        -> Result<()>;
}
