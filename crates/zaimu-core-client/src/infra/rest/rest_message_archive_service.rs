// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::app::deps::DynIdProvider;
use crate::domain::messaging::models::{
    DeliveryState, Message, MessageId, MessageServerId,
};
use crate::domain::messaging::services::MessageArchiveService;
use crate::domain::shared::models::{RoomId, UserId};
use crate::infra::rest::RestApiClient;

#[derive(Deserialize)]
struct ArchiveMessage {
    id: MessageServerId,
    user_id: UserId,
    user_name: String,
    content: String,
    timestamp: DateTime<Utc>,
}

pub struct RestMessageArchiveService {
    api: Arc<RestApiClient>,
    id_provider: DynIdProvider,
}

impl RestMessageArchiveService {
    pub fn new(api: Arc<RestApiClient>, id_provider: DynIdProvider) -> Self {
        Self { api, id_provider }
    }
}

#[async_trait]
impl MessageArchiveService for RestMessageArchiveService {
    async fn load_messages(&self, room_id: &RoomId) -> Result<Vec<Message>> {
        let resource_id;
        let segments: [&str; 4] = match room_id {
            RoomId::Channel(id) => {
                resource_id = id.to_string();
                ["api", "channels", &resource_id, "messages"]
            }
            RoomId::Task(id) => {
                resource_id = id.to_string();
                ["api", "tasks", &resource_id, "comments"]
            }
        };

        let archived = self
            .api
            .get_list::<ArchiveMessage>(&segments, &[])
            .await?;

        Ok(archived
            .into_iter()
            .map(|entry| Message {
                id: MessageId::from(self.id_provider.new_id()),
                server_id: Some(entry.id),
                room_id: *room_id,
                author: entry.user_id,
                author_name: entry.user_name,
                body: entry.content,
                timestamp: entry.timestamp,
                state: DeliveryState::Confirmed,
            })
            .collect())
    }
}
