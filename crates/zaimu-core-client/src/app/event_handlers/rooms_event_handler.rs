// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use zaimu_proc_macros::InjectDependencies;

use crate::app::deps::{DynAppContext, DynClientEventDispatcher, DynConnectedRoomsRepository};
use crate::app::event_handlers::{
    PresenceEvent, PresenceKind, ServerEvent, ServerEventHandler,
};
use crate::client_event::Notification;
use crate::domain::rooms::models::MemberInfo;
use crate::{ClientEvent, ClientRoomEventType};

#[derive(InjectDependencies)]
pub struct RoomsEventHandler {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    connected_rooms_repo: DynConnectedRoomsRepository,
}

#[async_trait]
impl ServerEventHandler for RoomsEventHandler {
    fn name(&self) -> &'static str {
        "rooms"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Presence(event) => self.handle_presence_event(event)?,
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl RoomsEventHandler {
    fn handle_presence_event(&self, event: PresenceEvent) -> Result<()> {
        let Some(room) = self.connected_rooms_repo.get(event.room_id.kind()) else {
            debug!("Ignoring presence event for {}. No such room is joined.", event.room_id);
            return Ok(());
        };

        if room.id != event.room_id {
            debug!("Ignoring presence event for {}. It is not the active room.", event.room_id);
            return Ok(());
        }

        // Our own presence changes are implied by join/leave.
        if self
            .ctx
            .current_user_id()
            .map(|id| id == event.user_id)
            .unwrap_or(false)
        {
            return Ok(());
        }

        let changed = match event.kind {
            PresenceKind::Joined => self.connected_rooms_repo.add_member(
                &event.room_id,
                MemberInfo {
                    id: event.user_id,
                    name: event.user_name.clone(),
                },
            ),
            PresenceKind::Left => self
                .connected_rooms_repo
                .remove_member(&event.room_id, &event.user_id),
        };

        if !changed {
            return Ok(());
        }

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::RoomChanged {
                room_id: event.room_id,
                r#type: ClientRoomEventType::ParticipantsChanged,
            });

        if event.kind == PresenceKind::Joined {
            self.client_event_dispatcher
                .dispatch_event(ClientEvent::NotificationPosted {
                    notification: Notification::info(format!("{} joined", event.user_name)),
                });
        }

        Ok(())
    }
}
