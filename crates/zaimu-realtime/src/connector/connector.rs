// zaimu-core-client/zaimu-realtime
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use secrecy::Secret;
use url::Url;

use crate::packet::Packet;
use crate::util::PinnedFuture;

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ConnectionError {
    #[error("Timed out")]
    TimedOut,
    #[error("Invalid token")]
    InvalidToken,
    #[error("{msg}")]
    Generic { msg: String },
}

pub type ConnectionEventHandler =
    Box<dyn Fn(ConnectionEvent) -> PinnedFuture<()> + Send + Sync>;

pub type ConnectorProvider = Box<dyn Fn() -> Box<dyn Connector> + Send + Sync>;

#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(
        &self,
        url: &Url,
        token: Secret<String>,
        event_handler: ConnectionEventHandler,
    ) -> Result<Box<dyn Connection>, ConnectionError>;
}

#[derive(Debug)]
pub enum ConnectionEvent {
    Disconnected { error: Option<ConnectionError> },
    Packet(Packet),
}

pub trait Connection: Send + Sync {
    fn send_packet(&self, packet: Packet) -> Result<()>;
    fn disconnect(&self);
}
