// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

use zaimu_utils::{id_string, id_u64};

use crate::domain::shared::models::{RoomId, UserId};

id_string!(
    /// The client-generated id of a message. Assigned before the server
    /// has seen the message and stable across its lifetime.
    MessageId
);

id_u64!(
    /// The server-assigned id of a message. Known once the send was
    /// acknowledged or the message arrived as a push.
    MessageServerId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryState {
    /// Sent optimistically, no ack yet.
    Pending,
    /// Acknowledged by the server or received from it.
    Confirmed,
    /// The send was rejected or timed out.
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub server_id: Option<MessageServerId>,
    pub room_id: RoomId,
    pub author: UserId,
    pub author_name: String,
    pub body: String,
    pub timestamp: DateTime<Utc>,
    pub state: DeliveryState,
}

impl Message {
    pub fn is_pending(&self) -> bool {
        self.state == DeliveryState::Pending
    }
}
