// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use room_management_service::{RoomError, RoomManagementService};
#[cfg(feature = "test")]
pub use room_management_service::MockRoomManagementService;

mod room_management_service;
