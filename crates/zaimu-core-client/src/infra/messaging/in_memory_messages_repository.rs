// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::domain::messaging::models::{DeliveryState, Message, MessageId, MessageServerId};
use crate::domain::messaging::repos::MessagesRepository;
use crate::domain::shared::models::RoomId;

#[derive(Default)]
pub struct InMemoryMessagesRepository {
    rooms: RwLock<HashMap<RoomId, Vec<Message>>>,
}

impl InMemoryMessagesRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MessagesRepository for InMemoryMessagesRepository {
    fn get(&self, room_id: &RoomId, id: &MessageId) -> Option<Message> {
        self.rooms
            .read()
            .get(room_id)?
            .iter()
            .find(|m| m.id == *id)
            .cloned()
    }

    fn get_all(&self, room_id: &RoomId) -> Vec<Message> {
        self.rooms.read().get(room_id).cloned().unwrap_or_default()
    }

    fn contains(&self, room_id: &RoomId, id: &MessageId) -> bool {
        self.rooms
            .read()
            .get(room_id)
            .map(|messages| messages.iter().any(|m| m.id == *id))
            .unwrap_or(false)
    }

    fn contains_server_id(&self, room_id: &RoomId, server_id: &MessageServerId) -> bool {
        self.rooms
            .read()
            .get(room_id)
            .map(|messages| {
                messages
                    .iter()
                    .any(|m| m.server_id.as_ref() == Some(server_id))
            })
            .unwrap_or(false)
    }

    fn append(&self, message: Message) -> bool {
        let mut rooms = self.rooms.write();
        let messages = rooms.entry(message.room_id.clone()).or_default();

        let duplicate = messages.iter().any(|m| {
            m.id == message.id
                || (message.server_id.is_some() && m.server_id == message.server_id)
        });
        if duplicate {
            return false;
        }

        messages.push(message);
        true
    }

    fn set_history(&self, room_id: &RoomId, messages: Vec<Message>) {
        self.rooms.write().insert(room_id.clone(), messages);
    }

    fn confirm(&self, room_id: &RoomId, id: &MessageId, server_id: MessageServerId) -> bool {
        self.update(room_id, id, |message| {
            message.server_id = Some(server_id);
            message.state = DeliveryState::Confirmed;
        })
    }

    fn mark_failed(&self, room_id: &RoomId, id: &MessageId) -> bool {
        self.update(room_id, id, |message| {
            message.state = DeliveryState::Failed;
        })
    }

    fn delete(&self, room_id: &RoomId, id: &MessageId) -> Option<Message> {
        let mut rooms = self.rooms.write();
        let messages = rooms.get_mut(room_id)?;
        let idx = messages.iter().position(|m| m.id == *id)?;
        Some(messages.remove(idx))
    }

    fn clear(&self, room_id: &RoomId) {
        self.rooms.write().remove(room_id);
    }

    fn clear_all(&self) {
        self.rooms.write().clear();
    }
}

impl InMemoryMessagesRepository {
    fn update(&self, room_id: &RoomId, id: &MessageId, f: impl FnOnce(&mut Message)) -> bool {
        let mut rooms = self.rooms.write();
        let Some(messages) = rooms.get_mut(room_id) else {
            return false;
        };
        let Some(message) = messages.iter_mut().find(|m| m.id == *id) else {
            return false;
        };
        f(message);
        true
    }
}
