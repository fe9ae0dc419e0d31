// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use zaimu_realtime::RequestError;

use crate::domain::shared::models::TaskId;
use crate::domain::tasks::models::TaskStatusKind;

/// Writes to a joined task room over the realtime connection.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait TaskCollaborationService: Send + Sync {
    async fn send_status_change(
        &self,
        task_id: &TaskId,
        status: TaskStatusKind,
    ) -> Result<(), RequestError>;

    async fn send_comment(&self, task_id: &TaskId, body: &str) -> Result<(), RequestError>;
}
