// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use chat_service::ChatService;
pub use connection_service::ConnectionService;
pub use filters_service::{FilterError, FiltersService, SYSTEM_DEFAULT_FILTER_NAME};
pub use rooms_service::RoomsService;
pub use tasks_service::TasksService;

mod chat_service;
mod connection_service;
mod filters_service;
mod rooms_service;
mod tasks_service;
