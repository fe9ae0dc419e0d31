// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::{
    AppContext, AppDependencies, DynConnectionService, DynIdProvider, DynTimeProvider,
};
use crate::app::event_handlers::ClientEventDispatcher;
use crate::infra::messaging::{InMemoryMessagesRepository, InMemoryTypingIndicatorsRepository};
use crate::infra::realtime::{
    RealtimeConnectionService, SocketMessagingService, SocketRoomManagementService,
    SocketTaskCollaborationService,
};
use crate::infra::rest::{
    RestApiClient, RestMessageArchiveService, RestPreferencesService, RestTaskApiService,
};
use crate::infra::rooms::InMemoryConnectedRoomsRepository;
use crate::infra::tasks::{
    InMemoryFilterSnapshotsRepository, InMemorySavedFiltersRepository, InMemoryTasksRepository,
};

/// The platform-level pieces the builder assembles. Everything else in
/// `AppDependencies` is derived from these.
pub struct PlatformDependencies {
    pub ctx: Arc<AppContext>,
    pub client_event_dispatcher: Arc<ClientEventDispatcher>,
    pub id_provider: DynIdProvider,
    pub time_provider: DynTimeProvider,
    pub realtime_client: Arc<zaimu_realtime::Client>,
    pub api: Arc<RestApiClient>,
}

impl From<PlatformDependencies> for AppDependencies {
    fn from(deps: PlatformDependencies) -> Self {
        let connection_service: DynConnectionService = Arc::new(
            RealtimeConnectionService::new(deps.realtime_client.clone()),
        );

        AppDependencies {
            client_event_dispatcher: deps.client_event_dispatcher,
            connected_rooms_repo: Arc::new(InMemoryConnectedRoomsRepository::new()),
            connection_service: connection_service.clone(),
            ctx: deps.ctx,
            filter_snapshots_repo: Arc::new(InMemoryFilterSnapshotsRepository::new()),
            id_provider: deps.id_provider.clone(),
            message_archive_service: Arc::new(RestMessageArchiveService::new(
                deps.api.clone(),
                deps.id_provider,
            )),
            messages_repo: Arc::new(InMemoryMessagesRepository::new()),
            messaging_service: Arc::new(SocketMessagingService::new(connection_service.clone())),
            preferences_service: Arc::new(RestPreferencesService::new(deps.api.clone())),
            room_management_service: Arc::new(SocketRoomManagementService::new(
                connection_service.clone(),
            )),
            saved_filters_repo: Arc::new(InMemorySavedFiltersRepository::new()),
            task_api_service: Arc::new(RestTaskApiService::new(deps.api)),
            task_collaboration_service: Arc::new(SocketTaskCollaborationService::new(
                connection_service,
            )),
            tasks_repo: Arc::new(InMemoryTasksRepository::new()),
            time_provider: deps.time_provider,
            typing_indicators_repo: Arc::new(InMemoryTypingIndicatorsRepository::new()),
        }
    }
}
