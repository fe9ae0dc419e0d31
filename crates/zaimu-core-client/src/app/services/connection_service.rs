// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use secrecy::Secret;

use zaimu_proc_macros::InjectDependencies;
use zaimu_realtime::{ConnectionError, ConnectionState};

use crate::app::deps::{
    DynAppContext, DynConnectedRoomsRepository, DynConnectionService, DynMessagesRepository,
    DynTasksRepository, DynTypingIndicatorsRepository,
};
use crate::app::deps::SessionProperties;
use crate::domain::shared::models::UserId;

#[derive(InjectDependencies)]
pub struct ConnectionService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    connection_service: DynConnectionService,
    #[inject]
    connected_rooms_repo: DynConnectedRoomsRepository,
    #[inject]
    messages_repo: DynMessagesRepository,
    #[inject]
    typing_indicators_repo: DynTypingIndicatorsRepository,
    #[inject]
    tasks_repo: DynTasksRepository,
}

impl ConnectionService {
    /// Establishes the realtime session for the given user. The endpoint is
    /// resolved from the configured origin unless an override is set.
    pub async fn connect(
        &self,
        user_id: UserId,
        display_name: impl Into<String>,
        token: Secret<String>,
    ) -> Result<(), ConnectionError> {
        let endpoint =
            self.ctx
                .socket_endpoint
                .resolve()
                .map_err(|err| ConnectionError::Generic {
                    msg: err.to_string(),
                })?;

        self.ctx.set_session(SessionProperties {
            user_id,
            display_name: display_name.into(),
        });

        // The transport keeps retrying on its own after a failed dial, so
        // the session stays in place even when the first attempt errors.
        self.connection_service.connect(&endpoint, token).await
    }

    /// Disconnects and drops all session-scoped state.
    pub async fn disconnect(&self) {
        self.connection_service.disconnect().await;
        self.connected_rooms_repo.delete_all();
        self.messages_repo.clear_all();
        self.typing_indicators_repo.clear_all();
        self.tasks_repo.clear_all();
        self.ctx.reset_session();
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.connection_service.connection_state()
    }
}
