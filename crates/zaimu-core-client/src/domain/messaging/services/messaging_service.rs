// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use zaimu_realtime::{EmitError, RequestError};

use crate::domain::messaging::models::{MessageId, MessageServerId};
use crate::domain::shared::models::ChannelId;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait MessagingService: Send + Sync {
    /// Sends a chat message and resolves with the server-assigned id once
    /// the server acknowledges it.
    async fn send_message(
        &self,
        channel_id: &ChannelId,
        client_id: &MessageId,
        body: &str,
    ) -> Result<MessageServerId, RequestError>;

    fn set_user_is_composing(
        &self,
        channel_id: &ChannelId,
        is_composing: bool,
    ) -> Result<(), EmitError>;

    fn send_read_status(&self, channel_id: &ChannelId) -> Result<(), EmitError>;
}
