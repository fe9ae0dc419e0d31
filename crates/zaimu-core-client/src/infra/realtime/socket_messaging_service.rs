// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use zaimu_realtime::{EmitError, EventName, RequestError};

use crate::app::deps::DynConnectionService;
use crate::domain::messaging::models::{MessageId, MessageServerId};
use crate::domain::messaging::services::MessagingService;
use crate::domain::shared::models::ChannelId;

pub struct SocketMessagingService {
    connection_service: DynConnectionService,
}

impl SocketMessagingService {
    pub fn new(connection_service: DynConnectionService) -> Self {
        Self { connection_service }
    }
}

#[derive(Deserialize)]
struct SendMessageAck {
    message_id: MessageServerId,
}

#[async_trait]
impl MessagingService for SocketMessagingService {
    async fn send_message(
        &self,
        channel_id: &ChannelId,
        client_id: &MessageId,
        body: &str,
    ) -> Result<MessageServerId, RequestError> {
        let ack = self
            .connection_service
            .request(
                EventName::ChatMessage,
                json!({
                    "channel_id": channel_id,
                    "client_id": client_id,
                    "content": body,
                }),
            )
            .await?;

        let ack = serde_json::from_value::<SendMessageAck>(Value::Object(ack.data)).map_err(
            |err| RequestError::Generic {
                msg: format!("Malformed message acknowledgement: {err}"),
            },
        )?;
        Ok(ack.message_id)
    }

    fn set_user_is_composing(
        &self,
        channel_id: &ChannelId,
        is_composing: bool,
    ) -> Result<(), EmitError> {
        self.connection_service.emit(
            EventName::TypingIndicator,
            json!({ "channel_id": channel_id, "is_typing": is_composing }),
        )
    }

    fn send_read_status(&self, channel_id: &ChannelId) -> Result<(), EmitError> {
        self.connection_service
            .emit(EventName::ReadStatus, json!({ "channel_id": channel_id }))
    }
}
