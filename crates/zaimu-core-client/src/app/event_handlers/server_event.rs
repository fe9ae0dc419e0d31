// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

use zaimu_realtime::ConnectionError;

use crate::domain::messaging::models::{MessageId, MessageServerId};
use crate::domain::shared::models::{ChannelId, RoomId, TaskId, UserId};
use crate::domain::tasks::models::Task;

/// Events translated from the realtime transport, ready for the handler
/// pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    Connection(ConnectionEvent),
    Message(MessageEvent),
    Typing(TypingEvent),
    Presence(PresenceEvent),
    Task(TaskEvent),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionEvent {
    Connected,
    Disconnected { error: Option<ConnectionError> },
    Reconnecting { attempt: u32 },
    PermanentlyFailed { error: ConnectionError },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageEvent {
    pub channel_id: ChannelId,
    pub server_id: MessageServerId,
    pub user_id: UserId,
    pub user_name: String,
    pub body: String,
    /// Set when the message is the echo of one of our own sends.
    pub client_id: Option<MessageId>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypingEvent {
    pub channel_id: ChannelId,
    pub user_id: UserId,
    pub is_typing: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PresenceKind {
    Joined,
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PresenceEvent {
    pub kind: PresenceKind,
    pub room_id: RoomId,
    pub user_id: UserId,
    pub user_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaskEvent {
    /// The server pushed a new revision of a task.
    Updated(Task),
    /// A user joined the task room.
    Joined {
        task_id: TaskId,
        user_id: UserId,
        user_name: String,
    },
}
