// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::messaging::models::Message;
use crate::domain::shared::models::RoomId;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait MessageArchiveService: Send + Sync {
    /// Loads the message history of a room, oldest first.
    async fn load_messages(&self, room_id: &RoomId) -> Result<Vec<Message>>;
}
