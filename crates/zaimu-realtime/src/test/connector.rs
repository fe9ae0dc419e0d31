// zaimu-core-client/zaimu-realtime
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::VecDeque;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;
use secrecy::Secret;
use url::Url;

use crate::connector::ConnectorProvider;
use crate::connector::{
    Connection as ConnectionTrait, ConnectionError, ConnectionEvent, ConnectionEventHandler,
    Connector as ConnectorTrait,
};
use crate::packet::{Ack, EventName, Packet};

pub struct Connector {
    connection: Arc<Connection>,
}

impl Connector {
    pub fn provider(connection: Arc<Connection>) -> ConnectorProvider {
        Box::new(move || {
            Box::new(Connector {
                connection: connection.clone(),
            })
        })
    }
}

#[async_trait]
impl ConnectorTrait for Connector {
    async fn connect(
        &self,
        _url: &Url,
        _token: Secret<String>,
        event_handler: ConnectionEventHandler,
    ) -> Result<Box<dyn ConnectionTrait>, ConnectionError> {
        self.connection.inner.connect_attempts.lock().push(());

        if let Some(error) = self.connection.inner.connect_failures.lock().pop_front() {
            return Err(error);
        }

        *self.connection.inner.event_handler.lock() = Some(event_handler);
        Ok(Box::new(self.connection.clone()))
    }
}

pub type SentPacketHandler = dyn FnMut(&Packet) -> Vec<Packet> + Send;

#[derive(Default, Clone)]
pub struct Connection {
    inner: Arc<ConnectionInner>,
}

#[derive(Default)]
struct ConnectionInner {
    connect_attempts: Mutex<Vec<()>>,
    connect_failures: Mutex<VecDeque<ConnectionError>>,
    sent_packets: Mutex<Vec<Packet>>,
    packet_handler: Mutex<Option<Box<SentPacketHandler>>>,
    event_handler: Mutex<Option<ConnectionEventHandler>>,
}

impl Connection {
    /// Queues connect outcomes. Each queued error fails one connect call,
    /// afterwards connects succeed again.
    pub fn push_connect_failure(&self, error: ConnectionError) {
        self.inner.connect_failures.lock().push_back(error);
    }

    pub fn connect_attempts(&self) -> usize {
        self.inner.connect_attempts.lock().len()
    }

    /// Registers a handler that inspects each sent packet and answers with
    /// zero or more server packets.
    pub fn set_packet_handler<F>(&self, handler: F)
    where
        F: FnMut(&Packet) -> Vec<Packet> + Send + 'static,
    {
        *self.inner.packet_handler.lock() = Some(Box::new(handler))
    }

    pub fn sent_packets(&self) -> Vec<Packet> {
        self.inner.sent_packets.lock().clone()
    }

    /// Simulates an incoming server packet.
    pub fn receive_packet(&self, packet: Packet) {
        self.send_event(ConnectionEvent::Packet(packet));
    }

    /// Simulates an unexpected connection loss.
    pub fn fail_connection(&self, error: Option<ConnectionError>) {
        self.send_event(ConnectionEvent::Disconnected { error });
    }

    pub fn reset(&self) {
        self.inner.sent_packets.lock().clear();
        self.inner.connect_attempts.lock().clear();
    }

    fn send_event(&self, event: ConnectionEvent) {
        if let Some(event_handler) = &*self.inner.event_handler.lock() {
            let fut = (event_handler)(event);
            tokio::spawn(async move { fut.await });
        }
    }

    /// Replies to a packet's ack request.
    pub fn ack(packet: &Packet, ack: Ack) -> Option<Packet> {
        let ack_id = packet.ack_id?;
        Some(
            Packet::new(
                EventName::Ack,
                serde_json::to_value(ack).unwrap_or_default(),
            )
            .with_ack_id(ack_id),
        )
    }
}

impl ConnectionTrait for Arc<Connection> {
    fn send_packet(&self, packet: Packet) -> Result<()> {
        let responses = if let Some(handler) = self.inner.packet_handler.lock().as_mut() {
            (handler)(&packet)
        } else {
            vec![]
        };

        if let Some(event_handler) = &*self.inner.event_handler.lock() {
            for response in responses {
                let fut = (event_handler)(ConnectionEvent::Packet(response));
                tokio::spawn(async move { fut.await });
            }
        }

        self.inner.sent_packets.lock().push(packet);
        Ok(())
    }

    fn disconnect(&self) {}
}
