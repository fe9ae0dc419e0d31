// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use zaimu_realtime::RequestError;

use crate::domain::rooms::models::MemberInfo;
use crate::domain::shared::models::RoomId;

#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    #[error("The server rejected the join: {message}")]
    Rejected { message: String },
    #[error(transparent)]
    RequestFailed(#[from] RequestError),
}

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait RoomManagementService: Send + Sync {
    /// Joins the room on the realtime connection. Resolves with the current
    /// member list once the server acknowledges the join.
    async fn join_room(&self, room_id: &RoomId) -> Result<Vec<MemberInfo>, RoomError>;

    /// Announces that we're leaving the room. Fire-and-forget.
    async fn leave_room(&self, room_id: &RoomId) -> Result<(), RoomError>;
}
