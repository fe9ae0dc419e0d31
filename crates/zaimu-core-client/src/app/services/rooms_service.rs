// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tracing::warn;

use zaimu_proc_macros::InjectDependencies;
use zaimu_realtime::ConnectionState;

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynConnectedRoomsRepository, DynConnectionService,
    DynMessagesRepository, DynRoomManagementService, DynTypingIndicatorsRepository,
};
use crate::domain::rooms::models::{JoinOutcome, Room, RoomState};
use crate::domain::shared::models::{RoomId, RoomKind};
use crate::{ClientEvent, ClientRoomEventType};

#[derive(InjectDependencies)]
pub struct RoomsService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    connection_service: DynConnectionService,
    #[inject]
    connected_rooms_repo: DynConnectedRoomsRepository,
    #[inject]
    room_management_service: DynRoomManagementService,
    #[inject]
    messages_repo: DynMessagesRepository,
    #[inject]
    typing_indicators_repo: DynTypingIndicatorsRepository,
}

impl RoomsService {
    pub fn active_room(&self, kind: RoomKind) -> Option<Room> {
        self.connected_rooms_repo.get(kind)
    }

    /// Makes `room_id` the active room of its kind, leaving the previous
    /// one. Joining an already active room is a no-op.
    pub async fn select_room(&self, room_id: RoomId) -> Result<JoinOutcome> {
        if let Some(room) = self.connected_rooms_repo.get(room_id.kind()) {
            if room.id == room_id {
                return Ok(match room.state {
                    RoomState::Joining { .. } => JoinOutcome::AlreadyPending,
                    RoomState::Joined { listen_only: true } => JoinOutcome::ListenOnly,
                    RoomState::Joined { listen_only: false } => JoinOutcome::Joined,
                });
            }
            self.leave_room(&room).await;
        }

        let Some(epoch) = self.connected_rooms_repo.start_join(room_id) else {
            return Ok(JoinOutcome::AlreadyPending);
        };

        // Give the connection a bounded amount of time to become ready.
        // After that the room degrades to listen-only instead of blocking
        // the user indefinitely.
        if !self.await_connection().await {
            if !self.connected_rooms_repo.finish_join(&room_id, epoch, true) {
                return Ok(JoinOutcome::Superseded);
            }
            warn!("Joining {room_id} in listen-only mode. The connection wasn't ready in time.");
            return Ok(JoinOutcome::ListenOnly);
        }

        match self.room_management_service.join_room(&room_id).await {
            Ok(members) => {
                if !self.connected_rooms_repo.finish_join(&room_id, epoch, false) {
                    return Ok(JoinOutcome::Superseded);
                }
                self.connected_rooms_repo.set_members(&room_id, members);
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::RoomChanged {
                        room_id,
                        r#type: ClientRoomEventType::ParticipantsChanged,
                    });
                Ok(JoinOutcome::Joined)
            }
            Err(err) => {
                self.connected_rooms_repo.abort_join(&room_id, epoch);
                Err(anyhow::anyhow!("Failed to join {room_id}: {err}"))
            }
        }
    }

    /// Leaves the active room of the given kind, if any.
    pub async fn leave_active_room(&self, kind: RoomKind) {
        if let Some(room) = self.connected_rooms_repo.get(kind) {
            self.leave_room(&room).await;
        }
    }

    async fn leave_room(&self, room: &Room) {
        self.connected_rooms_repo.delete(room.id.kind());
        self.messages_repo.clear(&room.id);
        self.typing_indicators_repo.clear(&room.id);

        // Leaving is best-effort. The server also drops memberships when
        // the connection goes away.
        if room.is_joined() && !room.is_listen_only() {
            if let Err(err) = self.room_management_service.leave_room(&room.id).await {
                warn!("Failed to announce leaving {}: {err}", room.id);
            }
        }
    }

    async fn await_connection(&self) -> bool {
        let attempts = self.ctx.config.join_retry_attempts;
        let base_delay = self.ctx.config.join_retry_base_delay;

        for attempt in 1..=attempts {
            // When the transport gave up on its own nobody else will dial
            // again, so kick off a fresh attempt before waiting.
            if matches!(
                self.connection_service.connection_state(),
                ConnectionState::Disconnected | ConnectionState::Failed
            ) {
                self.connection_service.reconnect();
            }

            if self
                .connection_service
                .wait_until_connected(base_delay * attempt)
                .await
            {
                return true;
            }
        }
        false
    }
}
