// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod connection;
pub mod messaging;
pub mod rooms;
pub mod shared;
pub mod tasks;
