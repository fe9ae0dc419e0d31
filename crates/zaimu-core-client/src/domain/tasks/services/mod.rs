// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use preferences_service::PreferencesService;
pub use task_api_service::TaskApiService;
pub use task_collaboration_service::TaskCollaborationService;
#[cfg(feature = "test")]
pub use preferences_service::MockPreferencesService;
#[cfg(feature = "test")]
pub use task_api_service::MockTaskApiService;
#[cfg(feature = "test")]
pub use task_collaboration_service::MockTaskCollaborationService;

mod preferences_service;
mod task_api_service;
mod task_collaboration_service;
