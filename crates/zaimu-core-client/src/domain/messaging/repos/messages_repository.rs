// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::messaging::models::{Message, MessageId, MessageServerId};
use crate::domain::shared::models::RoomId;

#[cfg_attr(feature = "test", mockall::automock)]
pub trait MessagesRepository: Send + Sync {
    fn get(&self, room_id: &RoomId, id: &MessageId) -> Option<Message>;
    fn get_all(&self, room_id: &RoomId) -> Vec<Message>;

    fn contains(&self, room_id: &RoomId, id: &MessageId) -> bool;
    fn contains_server_id(&self, room_id: &RoomId, server_id: &MessageServerId) -> bool;

    /// Appends the message unless one with the same client or server id
    /// exists already. Returns whether the message was appended.
    fn append(&self, message: Message) -> bool;

    /// Replaces the room's messages with the loaded history.
    fn set_history(&self, room_id: &RoomId, messages: Vec<Message>);

    /// Marks a pending message as confirmed and records its server id.
    fn confirm(&self, room_id: &RoomId, id: &MessageId, server_id: MessageServerId) -> bool;

    fn mark_failed(&self, room_id: &RoomId, id: &MessageId) -> bool;

    fn delete(&self, room_id: &RoomId, id: &MessageId) -> Option<Message>;
    fn clear(&self, room_id: &RoomId);
    fn clear_all(&self);
}
