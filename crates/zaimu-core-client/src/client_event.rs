// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use zaimu_realtime::ConnectionError;

use crate::domain::shared::models::{RoomId, TaskId};

#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionEvent {
    Connect,
    Disconnect { error: Option<ConnectionError> },
    /// The reconnection budget is spent. The client stays offline until the
    /// next explicit connect.
    Failed { error: ConnectionError },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClientRoomEventType {
    /// One or more messages were appended to the room's message list.
    MessagesAppended,
    /// Messages changed in place, e.g. a pending message was confirmed.
    MessagesUpdated,
    /// Messages were removed from the room's message list.
    MessagesDeleted,
    /// The list of users that are typing changed.
    ComposingUsersChanged,
    /// The room's member list changed.
    ParticipantsChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationSeverity {
    Info,
    Warning,
    Error,
}

/// A transient user-facing notice (toast).
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub severity: NotificationSeverity,
    pub text: String,
}

impl Notification {
    pub fn info(text: impl Into<String>) -> Self {
        Notification {
            severity: NotificationSeverity::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Notification {
            severity: NotificationSeverity::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Notification {
            severity: NotificationSeverity::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// The status of the connection has changed.
    ConnectionStatusChanged { event: ConnectionEvent },

    /// Something within a room has changed.
    RoomChanged {
        room_id: RoomId,
        r#type: ClientRoomEventType,
    },

    /// The displayed task list was replaced or modified.
    TaskListChanged,

    /// A single task changed.
    TaskChanged { task_id: TaskId },

    /// The saved filters or the default-filter designation changed.
    FiltersChanged,

    /// A notice the UI should surface to the user.
    NotificationPosted { notification: Notification },
}
