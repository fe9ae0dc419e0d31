// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::messaging::models::TypingIndicator;
use crate::domain::shared::models::{RoomId, UserId};

/// Identifies one typing burst. A repeated indicator for the same user
/// starts a new burst, which invalidates the expiry of the previous one.
pub type TypingEpoch = u64;

#[cfg_attr(feature = "test", mockall::automock)]
pub trait TypingIndicatorsRepository: Send + Sync {
    /// Inserts or refreshes the indicator and returns the epoch of the new
    /// burst.
    fn insert(&self, indicator: TypingIndicator) -> TypingEpoch;

    fn remove(&self, room_id: &RoomId, user_id: &UserId) -> bool;

    /// Removes the indicator only if `epoch` still identifies the current
    /// burst. Used by expiry timers so a refreshed indicator survives the
    /// timer of an earlier burst.
    fn remove_expired(&self, room_id: &RoomId, user_id: &UserId, epoch: TypingEpoch) -> bool;

    fn get_all(&self, room_id: &RoomId) -> Vec<UserId>;

    fn clear(&self, room_id: &RoomId);
    fn clear_all(&self);
}
