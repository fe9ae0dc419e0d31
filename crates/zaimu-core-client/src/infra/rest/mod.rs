// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use rest_api_client::RestApiClient;
pub use rest_message_archive_service::RestMessageArchiveService;
pub use rest_preferences_service::RestPreferencesService;
pub use rest_task_api_service::RestTaskApiService;

mod rest_api_client;
mod rest_message_archive_service;
mod rest_preferences_service;
mod rest_task_api_service;
