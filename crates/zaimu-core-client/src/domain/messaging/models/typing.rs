// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

use crate::domain::shared::models::{RoomId, UserId};

/// A user that is currently composing a message in a room.
#[derive(Debug, Clone, PartialEq)]
pub struct TypingIndicator {
    pub room_id: RoomId,
    pub user_id: UserId,
    pub started_at: DateTime<Utc>,
}
