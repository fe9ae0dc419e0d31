// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ChannelId, TaskId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomKind {
    Channel,
    Task,
}

/// Identifies a realtime room. The client is a member of at most one room
/// per kind at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomId {
    Channel(ChannelId),
    Task(TaskId),
}

impl RoomId {
    pub fn kind(&self) -> RoomKind {
        match self {
            RoomId::Channel(_) => RoomKind::Channel,
            RoomId::Task(_) => RoomKind::Task,
        }
    }

    pub fn channel_id(&self) -> Option<ChannelId> {
        match self {
            RoomId::Channel(id) => Some(*id),
            RoomId::Task(_) => None,
        }
    }

    pub fn task_id(&self) -> Option<TaskId> {
        match self {
            RoomId::Channel(_) => None,
            RoomId::Task(id) => Some(*id),
        }
    }
}

impl From<ChannelId> for RoomId {
    fn from(id: ChannelId) -> Self {
        RoomId::Channel(id)
    }
}

impl From<TaskId> for RoomId {
    fn from(id: TaskId) -> Self {
        RoomId::Task(id)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomId::Channel(id) => write!(f, "channel.{id}"),
            RoomId::Task(id) => write!(f, "task.{id}"),
        }
    }
}
