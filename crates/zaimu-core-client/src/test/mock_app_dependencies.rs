// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use derivative::Derivative;
use parking_lot::RwLock;
use url::Url;

use zaimu_realtime::EndpointResolver;

use crate::app::deps::{
    AppConfig, AppContext, AppDependencies, DynIdProvider, DynTimeProvider, SessionProperties,
};
use crate::app::event_handlers::MockClientEventDispatcherTrait;
use crate::domain::connection::services::MockConnectionService;
use crate::domain::messaging::repos::{MockMessagesRepository, MockTypingIndicatorsRepository};
use crate::domain::messaging::services::{MockMessageArchiveService, MockMessagingService};
use crate::domain::rooms::repos::MockConnectedRoomsRepository;
use crate::domain::rooms::services::MockRoomManagementService;
use crate::domain::shared::models::UserId;
use crate::domain::tasks::repos::{
    MockFilterSnapshotsRepository, MockSavedFiltersRepository, MockTasksRepository,
};
use crate::domain::tasks::services::{
    MockPreferencesService, MockTaskApiService, MockTaskCollaborationService,
};
use crate::test::{ConstantTimeProvider, IncrementingIdProvider};

pub fn mock_reference_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
}

pub fn mock_user_id() -> UserId {
    UserId::from(1)
}

pub fn mock_display_name() -> String {
    "Jane Doe".to_string()
}

impl Default for AppContext {
    fn default() -> Self {
        AppContext {
            session: RwLock::new(Some(SessionProperties {
                user_id: mock_user_id(),
                display_name: mock_display_name(),
            })),
            socket_endpoint: EndpointResolver::new(
                Url::parse("https://app.zaimu.example").unwrap(),
            ),
            config: AppConfig::default(),
        }
    }
}

#[derive(Derivative)]
#[derivative(Default)]
pub struct MockAppDependencies {
    pub client_event_dispatcher: MockClientEventDispatcherTrait,
    pub connected_rooms_repo: MockConnectedRoomsRepository,
    pub connection_service: MockConnectionService,
    pub ctx: AppContext,
    pub filter_snapshots_repo: MockFilterSnapshotsRepository,
    #[derivative(Default(value = "Arc::new(IncrementingIdProvider::new(\"id\"))"))]
    pub id_provider: DynIdProvider,
    pub message_archive_service: MockMessageArchiveService,
    pub messages_repo: MockMessagesRepository,
    pub messaging_service: MockMessagingService,
    pub preferences_service: MockPreferencesService,
    pub room_management_service: MockRoomManagementService,
    pub saved_filters_repo: MockSavedFiltersRepository,
    pub task_api_service: MockTaskApiService,
    pub task_collaboration_service: MockTaskCollaborationService,
    pub tasks_repo: MockTasksRepository,
    #[derivative(Default(value = "Arc::new(ConstantTimeProvider::new(mock_reference_date()))"))]
    pub time_provider: DynTimeProvider,
    pub typing_indicators_repo: MockTypingIndicatorsRepository,
}

impl MockAppDependencies {
    pub fn into_deps(self) -> AppDependencies {
        AppDependencies::from(self)
    }
}

impl From<MockAppDependencies> for AppDependencies {
    fn from(mock: MockAppDependencies) -> Self {
        AppDependencies {
            client_event_dispatcher: Arc::new(mock.client_event_dispatcher),
            connected_rooms_repo: Arc::new(mock.connected_rooms_repo),
            connection_service: Arc::new(mock.connection_service),
            ctx: Arc::new(mock.ctx),
            filter_snapshots_repo: Arc::new(mock.filter_snapshots_repo),
            id_provider: mock.id_provider,
            message_archive_service: Arc::new(mock.message_archive_service),
            messages_repo: Arc::new(mock.messages_repo),
            messaging_service: Arc::new(mock.messaging_service),
            preferences_service: Arc::new(mock.preferences_service),
            room_management_service: Arc::new(mock.room_management_service),
            saved_filters_repo: Arc::new(mock.saved_filters_repo),
            task_api_service: Arc::new(mock.task_api_service),
            task_collaboration_service: Arc::new(mock.task_collaboration_service),
            tasks_repo: Arc::new(mock.tasks_repo),
            time_provider: mock.time_provider,
            typing_indicators_repo: Arc::new(mock.typing_indicators_repo),
        }
    }
}
