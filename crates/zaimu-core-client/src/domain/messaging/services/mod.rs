// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use message_archive_service::MessageArchiveService;
pub use messaging_service::MessagingService;
#[cfg(feature = "test")]
pub use message_archive_service::MockMessageArchiveService;
#[cfg(feature = "test")]
pub use messaging_service::MockMessagingService;

mod message_archive_service;
mod messaging_service;
