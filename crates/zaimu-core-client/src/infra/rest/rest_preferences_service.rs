// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;

use crate::domain::shared::models::UserId;
use crate::domain::tasks::models::{FilterName, FilterPreferences, SavedFilter};
use crate::domain::tasks::services::PreferencesService;
use crate::infra::rest::RestApiClient;

pub struct RestPreferencesService {
    api: Arc<RestApiClient>,
}

impl RestPreferencesService {
    pub fn new(api: Arc<RestApiClient>) -> Self {
        Self { api }
    }

    fn segments<'a>(user_id: &'a str, rest: &[&'a str]) -> Vec<&'a str> {
        let mut segments = vec!["api", "users", user_id, "preferences", "task-filters"];
        segments.extend(rest);
        segments
    }
}

#[async_trait]
impl PreferencesService for RestPreferencesService {
    async fn load_filter_preferences(&self, user_id: &UserId) -> Result<FilterPreferences> {
        let user_id = user_id.to_string();
        // Accounts that never saved a filter have no preferences resource.
        let preferences = self
            .api
            .get_opt::<FilterPreferences>(&Self::segments(&user_id, &[]))
            .await?;
        Ok(preferences.unwrap_or_default())
    }

    async fn save_filter(&self, user_id: &UserId, filter: &SavedFilter) -> Result<()> {
        let user_id = user_id.to_string();
        self.api
            .put(&Self::segments(&user_id, &[filter.name.as_ref()]), filter)
            .await?;
        Ok(())
    }

    async fn delete_filter(&self, user_id: &UserId, name: &FilterName) -> Result<()> {
        let user_id = user_id.to_string();
        self.api
            .delete(&Self::segments(&user_id, &[name.as_ref()]))
            .await?;
        Ok(())
    }

    async fn rename_filter(
        &self,
        user_id: &UserId,
        name: &FilterName,
        new_name: &FilterName,
    ) -> Result<()> {
        let user_id = user_id.to_string();
        self.api
            .post(
                &Self::segments(&user_id, &[name.as_ref(), "rename"]),
                &json!({ "new_name": new_name }),
            )
            .await?;
        Ok(())
    }

    async fn set_default_filter(
        &self,
        user_id: &UserId,
        name: Option<FilterName>,
    ) -> Result<()> {
        let user_id = user_id.to_string();
        self.api
            .put(
                &Self::segments(&user_id, &["default"]),
                &json!({ "name": name }),
            )
            .await?;
        Ok(())
    }
}
