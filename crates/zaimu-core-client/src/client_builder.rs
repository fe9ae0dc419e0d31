// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::{anyhow, Result};
use tracing::error;
use url::Url;

use zaimu_realtime::{ConnectorProvider, EndpointResolver, ReconnectStrategy, SystemTimeProvider};

use crate::app::deps::{AppConfig, AppContext, AppDependencies, DynIdProvider, DynTimeProvider};
use crate::app::event_handlers::{
    ClientEventDispatcher, ConnectionEventHandler, MessagesEventHandler, RoomsEventHandler,
    ServerEventHandler, ServerEventHandlerQueue, TasksEventHandler,
};
use crate::app::services::{
    ChatService, ConnectionService, FiltersService, RoomsService, TasksService,
};
use crate::client::{Client, ClientInner};
use crate::infra::general::NanoIdProvider;
use crate::infra::platform_dependencies::PlatformDependencies;
use crate::infra::realtime::parse_event;
use crate::infra::rest::RestApiClient;
use crate::ClientDelegate;

pub struct ClientBuilder {
    api_base_url: Option<Url>,
    origin: Option<Url>,
    socket_endpoint_override: Option<Url>,
    connector_provider: Option<ConnectorProvider>,
    reconnect_strategy: ReconnectStrategy,
    config: AppConfig,
    delegate: Option<Box<dyn ClientDelegate>>,
    id_provider: DynIdProvider,
    time_provider: DynTimeProvider,
}

impl ClientBuilder {
    pub(crate) fn new() -> Self {
        Self {
            api_base_url: None,
            origin: None,
            socket_endpoint_override: None,
            connector_provider: None,
            reconnect_strategy: ReconnectStrategy::default(),
            config: AppConfig::default(),
            delegate: None,
            id_provider: Arc::new(NanoIdProvider::default()),
            time_provider: Arc::new(SystemTimeProvider::default()),
        }
    }

    /// The base URL of the REST API, e.g. `https://app.zaimu.jp`.
    pub fn set_api_base_url(mut self, url: Url) -> Self {
        self.api_base_url = Some(url);
        self
    }

    /// The origin the app is served from. The socket endpoint is derived
    /// from it unless an override is set.
    pub fn set_origin(mut self, origin: Url) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn set_socket_endpoint_override(mut self, endpoint: Url) -> Self {
        self.socket_endpoint_override = Some(endpoint);
        self
    }

    pub fn set_connector_provider(mut self, connector_provider: ConnectorProvider) -> Self {
        self.connector_provider = Some(connector_provider);
        self
    }

    pub fn set_reconnect_strategy(mut self, strategy: ReconnectStrategy) -> Self {
        self.reconnect_strategy = strategy;
        self
    }

    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn set_delegate(mut self, delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }

    pub fn set_id_provider(mut self, id_provider: impl zaimu_realtime::IdProvider + 'static) -> Self {
        self.id_provider = Arc::new(id_provider);
        self
    }

    pub fn set_time_provider(
        mut self,
        time_provider: impl zaimu_realtime::TimeProvider + 'static,
    ) -> Self {
        self.time_provider = Arc::new(time_provider);
        self
    }

    pub fn build(self) -> Result<Client> {
        let api_base_url = self
            .api_base_url
            .ok_or_else(|| anyhow!("ClientBuilder is missing the API base URL."))?;
        let origin = self
            .origin
            .ok_or_else(|| anyhow!("ClientBuilder is missing the app origin."))?;
        let connector_provider = self
            .connector_provider
            .ok_or_else(|| anyhow!("ClientBuilder is missing a connector provider."))?;

        let handler_queue = Arc::new(ServerEventHandlerQueue::new());

        let realtime_client = {
            let handler_queue = handler_queue.clone();
            Arc::new(
                zaimu_realtime::Client::builder()
                    .set_connector_provider(connector_provider)
                    .set_reconnect_strategy(self.reconnect_strategy)
                    .set_event_handler(move |_, event| {
                        let handler_queue = handler_queue.clone();
                        async move {
                            match parse_event(event) {
                                Ok(Some(event)) => handler_queue.handle_event(event).await,
                                Ok(None) => (),
                                Err(err) => error!("Failed to parse server event: {err}"),
                            }
                        }
                    })
                    .build(),
            )
        };

        let mut socket_endpoint = EndpointResolver::new(origin);
        if let Some(endpoint) = self.socket_endpoint_override {
            socket_endpoint = socket_endpoint.with_override(endpoint);
        }

        let client_event_dispatcher = Arc::new(ClientEventDispatcher::new(self.delegate));
        let api = Arc::new(RestApiClient::new(api_base_url));

        let dependencies: AppDependencies = PlatformDependencies {
            ctx: Arc::new(AppContext::new(socket_endpoint, self.config)),
            client_event_dispatcher: client_event_dispatcher.clone(),
            id_provider: self.id_provider,
            time_provider: self.time_provider,
            realtime_client,
            api: api.clone(),
        }
        .into();

        handler_queue.set_handlers(vec![
            Box::new(ConnectionEventHandler::from(&dependencies)) as Box<dyn ServerEventHandler>,
            Box::new(MessagesEventHandler::from(&dependencies)),
            Box::new(RoomsEventHandler::from(&dependencies)),
            Box::new(TasksEventHandler::from(&dependencies)),
        ]);

        let client_inner = Arc::new(ClientInner {
            chat: ChatService::from(&dependencies),
            filters: FiltersService::from(&dependencies),
            rooms: RoomsService::from(&dependencies),
            tasks: TasksService::from(&dependencies),
            connection: ConnectionService::from(&dependencies),
            api,
        });

        client_event_dispatcher.set_client_inner(Arc::downgrade(&client_inner));

        Ok(Client::from(client_inner))
    }
}
