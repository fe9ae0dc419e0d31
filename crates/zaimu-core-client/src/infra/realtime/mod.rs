// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use event_parser::parse_event;
pub use realtime_connection_service::RealtimeConnectionService;
pub use socket_messaging_service::SocketMessagingService;
pub use socket_room_management_service::SocketRoomManagementService;
pub use socket_task_collaboration_service::SocketTaskCollaborationService;

mod event_parser;
mod realtime_connection_service;
mod socket_messaging_service;
mod socket_room_management_service;
mod socket_task_collaboration_service;
