// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::tasks::models::Task;
use crate::domain::tasks::services::TaskApiService;
use crate::infra::rest::RestApiClient;

pub struct RestTaskApiService {
    api: Arc<RestApiClient>,
}

impl RestTaskApiService {
    pub fn new(api: Arc<RestApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl TaskApiService for RestTaskApiService {
    async fn load_tasks(&self, params: &[(String, String)]) -> Result<Vec<Task>> {
        Ok(self.api.get_list(&["api", "tasks"], params).await?)
    }
}
