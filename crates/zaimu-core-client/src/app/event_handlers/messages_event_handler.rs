// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use zaimu_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynConnectedRoomsRepository, DynIdProvider,
    DynMessagesRepository, DynTimeProvider, DynTypingIndicatorsRepository,
};
use crate::app::event_handlers::{
    MessageEvent, ServerEvent, ServerEventHandler, TypingEvent,
};
use crate::domain::messaging::models::{DeliveryState, Message, TypingIndicator};
use crate::domain::shared::models::{RoomId, RoomKind};
use crate::{ClientEvent, ClientRoomEventType};

#[derive(InjectDependencies)]
pub struct MessagesEventHandler {
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
    id_provider: DynIdProvider,
    #[inject]
    time_provider: DynTimeProvider,
}

#[async_trait]
impl ServerEventHandler for MessagesEventHandler {
    fn name(&self) -> &'static str {
        "messages"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Message(event) => self.handle_message_event(event)?,
            ServerEvent::Typing(event) => self.handle_typing_event(event)?,
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl MessagesEventHandler {
    fn handle_message_event(&self, event: MessageEvent) -> Result<()> {
        let Some(room) = self.connected_rooms_repo.get(RoomKind::Channel) else {
            debug!("Ignoring message for channel {}. No channel is joined.", event.channel_id);
            return Ok(());
        };

        let room_id = RoomId::Channel(event.channel_id);
        if room.id != room_id {
            debug!("Ignoring message for channel {}. It is not the active channel.", event.channel_id);
            return Ok(());
        }

        // Whatever the author sent, they're not typing anymore.
        if self.typing_indicators_repo.remove(&room_id, &event.user_id) {
            self.dispatch_room_event(room_id, ClientRoomEventType::ComposingUsersChanged);
        }

        // The echo of one of our own optimistic sends.
        if let Some(client_id) = &event.client_id {
            if self.messages_repo.contains(&room_id, client_id) {
                if self
                    .messages_repo
                    .confirm(&room_id, client_id, event.server_id)
                {
                    self.dispatch_room_event(room_id, ClientRoomEventType::MessagesUpdated);
                }
                return Ok(());
            }
        }

        if self
            .messages_repo
            .contains_server_id(&room_id, &event.server_id)
        {
            debug!("Ignoring duplicate message {}.", event.server_id);
            return Ok(());
        }

        let message = Message {
            id: self.id_provider.new_id().into(),
            server_id: Some(event.server_id),
            room_id,
            author: event.user_id,
            author_name: event.user_name,
            body: event.body,
            timestamp: event.timestamp,
            state: DeliveryState::Confirmed,
        };

        if self.messages_repo.append(message) {
            self.dispatch_room_event(room_id, ClientRoomEventType::MessagesAppended);
        }

        Ok(())
    }

    fn handle_typing_event(&self, event: TypingEvent) -> Result<()> {
        let Some(room) = self.connected_rooms_repo.get(RoomKind::Channel) else {
            return Ok(());
        };

        let room_id = RoomId::Channel(event.channel_id);
        if room.id != room_id {
            return Ok(());
        }

        // Our own indicator comes back to us as well.
        if self
            .ctx
            .current_user_id()
            .map(|id| id == event.user_id)
            .unwrap_or(false)
        {
            return Ok(());
        }

        if !event.is_typing {
            if self.typing_indicators_repo.remove(&room_id, &event.user_id) {
                self.dispatch_room_event(room_id, ClientRoomEventType::ComposingUsersChanged);
            }
            return Ok(());
        }

        let epoch = self.typing_indicators_repo.insert(TypingIndicator {
            room_id,
            user_id: event.user_id,
            started_at: self.time_provider.now(),
        });
        self.dispatch_room_event(room_id, ClientRoomEventType::ComposingUsersChanged);

        let expiry = self.ctx.config.typing_expiry;
        let repo = self.typing_indicators_repo.clone();
        let dispatcher = self.client_event_dispatcher.clone();
        let user_id = event.user_id;

        tokio::spawn(async move {
            tokio::time::sleep(expiry).await;
            if repo.remove_expired(&room_id, &user_id, epoch) {
                dispatcher.dispatch_event(ClientEvent::RoomChanged {
                    room_id,
                    r#type: ClientRoomEventType::ComposingUsersChanged,
                });
            }
        });

        Ok(())
    }

    fn dispatch_room_event(&self, room_id: RoomId, r#type: ClientRoomEventType) {
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::RoomChanged { room_id, r#type });
    }
}
