// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use zaimu_realtime::{IdProvider, TimeProvider};

use crate::app::deps::app_context::AppContext;
use crate::app::event_handlers::ClientEventDispatcherTrait;
use crate::domain::connection::services::ConnectionService;
use crate::domain::messaging::repos::{MessagesRepository, TypingIndicatorsRepository};
use crate::domain::messaging::services::{MessageArchiveService, MessagingService};
use crate::domain::rooms::repos::ConnectedRoomsRepository;
use crate::domain::rooms::services::RoomManagementService;
use crate::domain::tasks::repos::{
    FilterSnapshotsRepository, SavedFiltersRepository, TasksRepository,
};
use crate::domain::tasks::services::{
    PreferencesService, TaskApiService, TaskCollaborationService,
};

pub(crate) type DynAppContext = Arc<AppContext>;
pub(crate) type DynClientEventDispatcher = Arc<dyn ClientEventDispatcherTrait>;
pub(crate) type DynConnectedRoomsRepository = Arc<dyn ConnectedRoomsRepository>;
pub(crate) type DynConnectionService = Arc<dyn ConnectionService>;
pub(crate) type DynFilterSnapshotsRepository = Arc<dyn FilterSnapshotsRepository>;
pub(crate) type DynIdProvider = Arc<dyn IdProvider>;
pub(crate) type DynMessageArchiveService = Arc<dyn MessageArchiveService>;
pub(crate) type DynMessagesRepository = Arc<dyn MessagesRepository>;
pub(crate) type DynMessagingService = Arc<dyn MessagingService>;
pub(crate) type DynPreferencesService = Arc<dyn PreferencesService>;
pub(crate) type DynRoomManagementService = Arc<dyn RoomManagementService>;
pub(crate) type DynSavedFiltersRepository = Arc<dyn SavedFiltersRepository>;
pub(crate) type DynTaskApiService = Arc<dyn TaskApiService>;
pub(crate) type DynTaskCollaborationService = Arc<dyn TaskCollaborationService>;
pub(crate) type DynTasksRepository = Arc<dyn TasksRepository>;
pub(crate) type DynTimeProvider = Arc<dyn TimeProvider>;
pub(crate) type DynTypingIndicatorsRepository = Arc<dyn TypingIndicatorsRepository>;

pub struct AppDependencies {
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub connected_rooms_repo: DynConnectedRoomsRepository,
    pub connection_service: DynConnectionService,
    pub ctx: DynAppContext,
    pub filter_snapshots_repo: DynFilterSnapshotsRepository,
    pub id_provider: DynIdProvider,
    pub message_archive_service: DynMessageArchiveService,
    pub messages_repo: DynMessagesRepository,
    pub messaging_service: DynMessagingService,
    pub preferences_service: DynPreferencesService,
    pub room_management_service: DynRoomManagementService,
    pub saved_filters_repo: DynSavedFiltersRepository,
    pub task_api_service: DynTaskApiService,
    pub task_collaboration_service: DynTaskCollaborationService,
    pub tasks_repo: DynTasksRepository,
    pub time_provider: DynTimeProvider,
    pub typing_indicators_repo: DynTypingIndicatorsRepository,
}
