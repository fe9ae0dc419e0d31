// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::{RoomId, UserId};

#[derive(Debug, Clone, PartialEq)]
pub struct MemberInfo {
    pub id: UserId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RoomState {
    /// The join request is in flight or being retried.
    Joining { attempt: u32 },
    /// The room is joined. In listen-only mode writes are suppressed while
    /// server pushes still flow.
    Joined { listen_only: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: RoomId,
    pub state: RoomState,
    pub members: Vec<MemberInfo>,
}

impl Room {
    pub fn joining(id: RoomId) -> Self {
        Room {
            id,
            state: RoomState::Joining { attempt: 1 },
            members: vec![],
        }
    }

    pub fn is_joined(&self) -> bool {
        matches!(self.state, RoomState::Joined { .. })
    }

    pub fn is_listen_only(&self) -> bool {
        matches!(
            self.state,
            RoomState::Joined { listen_only: true }
        )
    }
}

/// The result of selecting a room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JoinOutcome {
    /// Full membership, reads and writes.
    Joined,
    /// The connection wasn't ready within the join budget. Server pushes
    /// are delivered but writes are suppressed.
    ListenOnly,
    /// A join for the same room is already in flight.
    AlreadyPending,
    /// The user switched to another room before this join finished. Nothing
    /// was changed.
    Superseded,
}
