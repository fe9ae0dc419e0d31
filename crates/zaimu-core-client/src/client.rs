// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use secrecy::Secret;
use tracing::warn;

use zaimu_realtime::{ConnectionError, ConnectionState};

use crate::app::services::{
    ChatService, ConnectionService, FiltersService, RoomsService, TasksService,
};
use crate::client_builder::ClientBuilder;
use crate::domain::shared::models::UserId;
use crate::infra::rest::RestApiClient;
use crate::ClientEvent;

pub trait ClientDelegate: Send + Sync {
    fn handle_event(&self, client: Client, event: ClientEvent);
}

#[derive(Clone)]
pub struct Client {
    client: Arc<ClientInner>,
}

pub struct ClientInner {
    pub chat: ChatService,
    pub filters: FiltersService,
    pub rooms: RoomsService,
    pub tasks: TasksService,
    pub(crate) connection: ConnectionService,
    pub(crate) api: Arc<RestApiClient>,
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl From<Arc<ClientInner>> for Client {
    fn from(client: Arc<ClientInner>) -> Self {
        Client { client }
    }
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Starts a session: authorizes the REST API, opens the realtime
    /// connection and restores the user's saved filters.
    pub async fn connect(
        &self,
        user_id: UserId,
        display_name: impl Into<String>,
        token: Secret<String>,
    ) -> Result<(), ConnectionError> {
        self.api.set_token(Some(token.clone()));
        self.connection.connect(user_id, display_name, token).await?;

        if let Err(err) = self.filters.restore().await {
            warn!("Failed to restore the saved filters: {err}");
        }
        Ok(())
    }

    /// Ends the session and drops all session-scoped state.
    pub async fn disconnect(&self) {
        self.connection.disconnect().await;
        self.api.set_token(None);
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.connection.connection_state()
    }
}
