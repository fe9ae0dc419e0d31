// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod general;
pub mod messaging;
pub mod platform_dependencies;
pub mod realtime;
pub mod rest;
pub mod rooms;
pub mod tasks;
