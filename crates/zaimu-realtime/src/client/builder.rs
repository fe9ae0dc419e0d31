// zaimu-core-client/zaimu-realtime
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use secrecy::Secret;
use url::Url;

use crate::client::context::ClientContext;
use crate::client::reconnect::ReconnectStrategy;
use crate::client::{Client, EventHandler};
use crate::connector::{Connection, ConnectionError, ConnectionEventHandler, Connector};
use crate::connector::ConnectorProvider;
use crate::event::Event;
use crate::packet::Packet;
use crate::state::ConnectionState;
use crate::util::PinnedFuture;

pub struct UndefinedConnector {}
pub struct UndefinedConnection {}

pub struct ClientBuilder {
    connector_provider: ConnectorProvider,
    strategy: ReconnectStrategy,
    event_handler: EventHandler,
}

impl ClientBuilder {
    pub(super) fn new() -> Self {
        ClientBuilder {
            connector_provider: Box::new(|| Box::new(UndefinedConnector {})),
            strategy: ReconnectStrategy::default(),
            event_handler: Box::new(|_, _| Box::pin(async {}) as PinnedFuture<_>),
        }
    }

    pub fn set_connector_provider(mut self, connector_provider: ConnectorProvider) -> Self {
        self.connector_provider = connector_provider;
        self
    }

    pub fn set_reconnect_strategy(mut self, strategy: ReconnectStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn set_event_handler<T>(
        mut self,
        handler: impl Fn(Client, Event) -> T + Send + Sync + 'static,
    ) -> Self
    where
        T: Future<Output = ()> + Send + 'static,
    {
        self.event_handler = Box::new(move |client, event| {
            let fut = handler(client, event);
            Box::pin(async move { fut.await }) as PinnedFuture<_>
        });
        self
    }

    pub fn build(self) -> Client {
        let (state_tx, _) = tokio::sync::watch::channel(ConnectionState::Disconnected);

        Client {
            ctx: Arc::new(ClientContext {
                connector_provider: self.connector_provider,
                strategy: self.strategy,
                connection: Default::default(),
                credentials: Default::default(),
                state_tx,
                reconnect_attempts: Default::default(),
                connection_generation: Default::default(),
                reconnect_task: Default::default(),
                next_ack_id: Default::default(),
                pending_acks: Default::default(),
                event_handler: self.event_handler,
            }),
        }
    }
}

#[async_trait]
impl Connector for UndefinedConnector {
    async fn connect(
        &self,
        _url: &Url,
        _token: Secret<String>,
        _event_handler: ConnectionEventHandler,
    ) -> Result<Box<dyn Connection>, ConnectionError> {
        panic!("Client doesn't have a connector. Provide one before calling connect()")
    }
}

impl Connection for UndefinedConnection {
    fn send_packet(&self, _packet: Packet) -> Result<()> {
        panic!("Calling send_packet on UndefinedConnection is illegal.")
    }

    fn disconnect(&self) {
        panic!("Calling disconnect on UndefinedConnection is illegal.")
    }
}
