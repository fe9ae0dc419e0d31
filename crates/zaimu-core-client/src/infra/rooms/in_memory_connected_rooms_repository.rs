// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::domain::rooms::models::{MemberInfo, Room, RoomState};
use crate::domain::rooms::repos::{ConnectedRoomsRepository, JoinEpoch};
use crate::domain::shared::models::{RoomId, RoomKind, UserId};

struct Slot {
    room: Room,
    epoch: JoinEpoch,
}

#[derive(Default)]
pub struct InMemoryConnectedRoomsRepository {
    slots: RwLock<HashMap<RoomKind, Slot>>,
    next_epoch: AtomicU64,
}

impl InMemoryConnectedRoomsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConnectedRoomsRepository for InMemoryConnectedRoomsRepository {
    fn get(&self, kind: RoomKind) -> Option<Room> {
        self.slots.read().get(&kind).map(|slot| slot.room.clone())
    }

    fn start_join(&self, room_id: RoomId) -> Option<JoinEpoch> {
        let mut slots = self.slots.write();

        if let Some(slot) = slots.get(&room_id.kind()) {
            if slot.room.id == room_id
                && matches!(slot.room.state, RoomState::Joining { .. })
            {
                return None;
            }
        }

        let epoch = self.next_epoch.fetch_add(1, Ordering::SeqCst) + 1;
        slots.insert(
            room_id.kind(),
            Slot {
                room: Room::joining(room_id),
                epoch,
            },
        );
        Some(epoch)
    }

    fn finish_join(&self, room_id: &RoomId, epoch: JoinEpoch, listen_only: bool) -> bool {
        let mut slots = self.slots.write();
        let Some(slot) = slots.get_mut(&room_id.kind()) else {
            return false;
        };
        if slot.room.id != *room_id || slot.epoch != epoch {
            return false;
        }
        slot.room.state = RoomState::Joined { listen_only };
        true
    }

    fn abort_join(&self, room_id: &RoomId, epoch: JoinEpoch) {
        let mut slots = self.slots.write();
        let Some(slot) = slots.get(&room_id.kind()) else {
            return;
        };
        if slot.room.id == *room_id && slot.epoch == epoch {
            slots.remove(&room_id.kind());
        }
    }

    fn set_members(&self, room_id: &RoomId, members: Vec<MemberInfo>) -> bool {
        self.with_room(room_id, |room| room.members = members)
    }

    fn add_member(&self, room_id: &RoomId, member: MemberInfo) -> bool {
        self.with_room(room_id, |room| {
            if !room.members.iter().any(|m| m.id == member.id) {
                room.members.push(member);
            }
        })
    }

    fn remove_member(&self, room_id: &RoomId, user_id: &UserId) -> bool {
        self.with_room(room_id, |room| {
            room.members.retain(|m| m.id != *user_id)
        })
    }

    fn delete(&self, kind: RoomKind) -> Option<Room> {
        self.slots.write().remove(&kind).map(|slot| slot.room)
    }

    fn delete_all(&self) -> Vec<Room> {
        self.slots
            .write()
            .drain()
            .map(|(_, slot)| slot.room)
            .collect()
    }
}

impl InMemoryConnectedRoomsRepository {
    fn with_room(&self, room_id: &RoomId, f: impl FnOnce(&mut Room)) -> bool {
        let mut slots = self.slots.write();
        let Some(slot) = slots.get_mut(&room_id.kind()) else {
            return false;
        };
        if slot.room.id != *room_id {
            return false;
        }
        f(&mut slot.room);
        true
    }
}
