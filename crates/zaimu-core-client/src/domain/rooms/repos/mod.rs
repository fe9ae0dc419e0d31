// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use connected_rooms_repository::{ConnectedRoomsRepository, JoinEpoch};
#[cfg(feature = "test")]
pub use connected_rooms_repository::MockConnectedRoomsRepository;

mod connected_rooms_repository;
