// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{bail, Result};
use tracing::warn;

use zaimu_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynConnectedRoomsRepository, DynIdProvider,
    DynMessageArchiveService, DynMessagesRepository, DynMessagingService, DynTimeProvider,
    DynTypingIndicatorsRepository, WriteFailurePolicy,
};
use crate::client_event::Notification;
use crate::domain::messaging::models::{DeliveryState, Message, MessageId};
use crate::domain::rooms::models::Room;
use crate::domain::shared::models::{ChannelId, RoomKind, UserId};
use crate::{ClientEvent, ClientRoomEventType};

#[derive(InjectDependencies)]
pub struct ChatService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    connected_rooms_repo: DynConnectedRoomsRepository,
    #[inject]
    messages_repo: DynMessagesRepository,
    #[inject]
    typing_indicators_repo: DynTypingIndicatorsRepository,
    #[inject]
    messaging_service: DynMessagingService,
    #[inject]
    message_archive_service: DynMessageArchiveService,
    #[inject]
    id_provider: DynIdProvider,
    #[inject]
    time_provider: DynTimeProvider,
}

impl ChatService {
    /// Sends a message to the active channel. The message shows up in the
    /// local list immediately and is reconciled once the server acks it.
    pub async fn send_message(&self, body: impl AsRef<str>) -> Result<MessageId> {
        let body = body.as_ref().trim();
        if body.is_empty() {
            bail!("Cannot send an empty message.");
        }

        let (channel_id, room) = self.active_channel()?;
        if room.is_listen_only() {
            bail!("The channel is in listen-only mode. Messages cannot be sent right now.");
        }

        let message = Message {
            id: format!("temp-{}", self.id_provider.new_id()).into(),
            server_id: None,
            room_id: room.id,
            author: self.ctx.current_user_id()?,
            author_name: self.ctx.display_name()?,
            body: body.to_string(),
            timestamp: self.time_provider.now(),
            state: DeliveryState::Pending,
        };
        let message_id = message.id.clone();

        self.messages_repo.append(message);
        self.dispatch_room_event(&room, ClientRoomEventType::MessagesAppended);

        self.perform_send(&room, &channel_id, &message_id, body).await;
        Ok(message_id)
    }

    /// Retries a message whose send failed earlier.
    pub async fn retry_message(&self, message_id: &MessageId) -> Result<()> {
        let (channel_id, room) = self.active_channel()?;

        let Some(message) = self.messages_repo.get(&room.id, message_id) else {
            bail!("No message with id {message_id} exists.");
        };
        if message.state != DeliveryState::Failed {
            bail!("Message {message_id} is not in a failed state.");
        }

        self.messages_repo.delete(&room.id, message_id);
        self.messages_repo.append(Message {
            state: DeliveryState::Pending,
            ..message.clone()
        });
        self.dispatch_room_event(&room, ClientRoomEventType::MessagesUpdated);

        self.perform_send(&room, &channel_id, message_id, &message.body)
            .await;
        Ok(())
    }

    /// Replaces the local message list with the channel's history.
    pub async fn load_history(&self) -> Result<()> {
        let (_, room) = self.active_channel()?;
        let messages = self.message_archive_service.load_messages(&room.id).await?;
        self.messages_repo.set_history(&room.id, messages);
        self.dispatch_room_event(&room, ClientRoomEventType::MessagesAppended);
        Ok(())
    }

    pub fn messages(&self) -> Vec<Message> {
        let Ok((_, room)) = self.active_channel() else {
            return vec![];
        };
        self.messages_repo.get_all(&room.id)
    }

    pub fn composing_users(&self) -> Vec<UserId> {
        let Ok((_, room)) = self.active_channel() else {
            return vec![];
        };
        self.typing_indicators_repo.get_all(&room.id)
    }

    /// Announces that the user started or stopped composing. Best-effort.
    pub fn set_user_is_composing(&self, is_composing: bool) {
        let Ok((channel_id, room)) = self.active_channel() else {
            return;
        };
        if room.is_listen_only() {
            return;
        }
        if let Err(err) = self
            .messaging_service
            .set_user_is_composing(&channel_id, is_composing)
        {
            warn!("Failed to send typing indicator: {err}");
        }
    }

    /// Marks the active channel as read. Best-effort.
    pub fn mark_read(&self) {
        let Ok((channel_id, room)) = self.active_channel() else {
            return;
        };
        if room.is_listen_only() {
            return;
        }
        if let Err(err) = self.messaging_service.send_read_status(&channel_id) {
            warn!("Failed to send read status: {err}");
        }
    }

    async fn perform_send(
        &self,
        room: &Room,
        channel_id: &ChannelId,
        message_id: &MessageId,
        body: &str,
    ) {
        match self
            .messaging_service
            .send_message(channel_id, message_id, body)
            .await
        {
            Ok(server_id) => {
                if self.messages_repo.confirm(&room.id, message_id, server_id) {
                    self.dispatch_room_event(room, ClientRoomEventType::MessagesUpdated);
                }
            }
            Err(err) => {
                warn!("Failed to send message {message_id}: {err}");
                match self.ctx.config.write_failure_policy {
                    WriteFailurePolicy::KeepOptimistic => {
                        self.messages_repo.mark_failed(&room.id, message_id);
                        self.dispatch_room_event(room, ClientRoomEventType::MessagesUpdated);
                        self.dispatch_notification(Notification::warning(
                            "Your message couldn't be delivered. Tap to retry.",
                        ));
                    }
                    WriteFailurePolicy::Revert => {
                        self.messages_repo.delete(&room.id, message_id);
                        self.dispatch_room_event(room, ClientRoomEventType::MessagesDeleted);
                        self.dispatch_notification(Notification::error(
                            "Your message couldn't be delivered and was discarded.",
                        ));
                    }
                }
            }
        }
    }

    fn active_channel(&self) -> Result<(ChannelId, Room)> {
        let Some(room) = self.connected_rooms_repo.get(RoomKind::Channel) else {
            bail!("No channel is joined.");
        };
        let Some(channel_id) = room.id.channel_id() else {
            bail!("The active room is not a channel.");
        };
        Ok((channel_id, room))
    }

    fn dispatch_room_event(&self, room: &Room, r#type: ClientRoomEventType) {
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::RoomChanged {
                room_id: room.id,
                r#type,
            });
    }

    fn dispatch_notification(&self, notification: Notification) {
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::NotificationPosted { notification });
    }
}
