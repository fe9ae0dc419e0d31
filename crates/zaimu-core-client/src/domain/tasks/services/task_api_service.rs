// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::tasks::models::Task;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait TaskApiService: Send + Sync {
    /// Loads the task list matching the given query parameters.
    async fn load_tasks(&self, params: &[(String, String)]) -> Result<Vec<Task>>;
}
