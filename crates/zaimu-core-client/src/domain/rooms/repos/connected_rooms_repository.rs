// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::rooms::models::{MemberInfo, Room};
use crate::domain::shared::models::{RoomId, RoomKind, UserId};

/// Monotonically increasing token handed out by `start_join`. Mutations of
/// a pending join must present the matching epoch, so a join that was
/// superseded by a later room switch cannot alter the slot anymore.
pub type JoinEpoch = u64;

#[cfg_attr(feature = "test", mockall::automock)]
pub trait ConnectedRoomsRepository: Send + Sync {
    fn get(&self, kind: RoomKind) -> Option<Room>;

    /// Marks `room_id` as joining, replacing whatever occupied the slot of
    /// its kind. Returns `None` if a join for the very same room is already
    /// pending.
    fn start_join(&self, room_id: RoomId) -> Option<JoinEpoch>;

    /// Completes the pending join identified by `epoch`. Returns `false`
    /// when the join was superseded in the meantime.
    fn finish_join(&self, room_id: &RoomId, epoch: JoinEpoch, listen_only: bool) -> bool;

    /// Removes the pending join identified by `epoch`, if it still occupies
    /// the slot.
    fn abort_join(&self, room_id: &RoomId, epoch: JoinEpoch);

    fn set_members(&self, room_id: &RoomId, members: Vec<MemberInfo>) -> bool;
    fn add_member(&self, room_id: &RoomId, member: MemberInfo) -> bool;
    fn remove_member(&self, room_id: &RoomId, user_id: &UserId) -> bool;

    fn delete(&self, kind: RoomKind) -> Option<Room>;
    fn delete_all(&self) -> Vec<Room>;
}
