// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use room::{JoinOutcome, MemberInfo, Room, RoomState};

mod room;
