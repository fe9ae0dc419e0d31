// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use serde_json::json;

use zaimu_realtime::{EventName, RequestError};

use crate::app::deps::DynConnectionService;
use crate::domain::shared::models::TaskId;
use crate::domain::tasks::models::TaskStatusKind;
use crate::domain::tasks::services::TaskCollaborationService;

pub struct SocketTaskCollaborationService {
    connection_service: DynConnectionService,
}

impl SocketTaskCollaborationService {
    pub fn new(connection_service: DynConnectionService) -> Self {
        Self { connection_service }
    }
}

#[async_trait]
impl TaskCollaborationService for SocketTaskCollaborationService {
    async fn send_status_change(
        &self,
        task_id: &TaskId,
        status: TaskStatusKind,
    ) -> Result<(), RequestError> {
        self.connection_service
            .request(
                EventName::TaskStatusChange,
                json!({ "task_id": task_id, "status": status }),
            )
            .await?;
        Ok(())
    }

    async fn send_comment(&self, task_id: &TaskId, body: &str) -> Result<(), RequestError> {
        self.connection_service
            .request(
                EventName::TaskComment,
                json!({ "task_id": task_id, "content": body }),
            )
            .await?;
        Ok(())
    }
}
