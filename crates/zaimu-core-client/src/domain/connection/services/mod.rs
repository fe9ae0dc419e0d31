// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use connection_service::ConnectionService;
#[cfg(feature = "test")]
pub use connection_service::MockConnectionService;

mod connection_service;
