// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use id::{ChannelId, TaskId, UserId};
pub use room_id::{RoomId, RoomKind};

mod id;
mod room_id;
