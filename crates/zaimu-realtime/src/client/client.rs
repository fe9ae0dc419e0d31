// zaimu-core-client/zaimu-realtime
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use secrecy::Secret;
use serde_json::Value;
use tokio::sync::{oneshot, watch};
use tracing::{info, warn};
use url::Url;

use crate::client::builder::ClientBuilder;
use crate::client::context::{ClientContext, Credentials};
use crate::connector::{ConnectionError, ConnectionEvent};
use crate::event::Event;
use crate::packet::{Ack, EventName, Packet};
use crate::state::ConnectionState;
use crate::util::{EmitError, PinnedFuture, RequestError};

const ACK_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Clone)]
pub struct Client {
    pub(super) ctx: Arc<ClientContext>,
}

impl Debug for Client {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish()
    }
}

impl From<Arc<ClientContext>> for Client {
    fn from(ctx: Arc<ClientContext>) -> Self {
        Client { ctx }
    }
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Establishes a connection, tearing down any existing one first.
    /// A failed dial schedules reconnection attempts before returning
    /// the error.
    pub async fn connect(
        &self,
        url: &Url,
        token: Secret<String>,
    ) -> Result<(), ConnectionError> {
        self.teardown();

        self.ctx.credentials.write().replace(Credentials {
            url: url.clone(),
            token,
        });

        self.ctx.set_state(ConnectionState::Connecting);

        if let Err(error) = Self::dial(self.ctx.clone()).await {
            Self::schedule_reconnect(self.ctx.clone(), error.clone());
            return Err(error);
        }

        Ok(())
    }

    /// Starts a fresh dial with the stored credentials when the connection
    /// sits in a terminal state, with a reset retry budget. A no-op while
    /// connecting, reconnecting or connected, and after a clean disconnect.
    pub fn reconnect(&self) {
        match self.state() {
            ConnectionState::Disconnected | ConnectionState::Failed => (),
            _ => return,
        }
        if self.ctx.credentials.read().is_none() {
            return;
        }

        self.ctx.reconnect_attempts.store(0, Ordering::SeqCst);
        self.ctx.set_state(ConnectionState::Connecting);

        let ctx = self.ctx.clone();
        tokio::spawn(async move {
            if let Err(error) = Self::dial(ctx.clone()).await {
                Self::schedule_reconnect(ctx, error);
            }
        });
    }

    /// Drops the connection and forgets the credentials. No reconnection
    /// attempts are made afterwards.
    pub fn disconnect(&self) {
        self.teardown();
        self.ctx.set_state(ConnectionState::Disconnected);
    }

    pub fn state(&self) -> ConnectionState {
        self.ctx.state()
    }

    pub fn state_stream(&self) -> watch::Receiver<ConnectionState> {
        self.ctx.state_tx.subscribe()
    }

    /// Waits until the connection is established or the timeout elapses.
    pub async fn wait_until_connected(&self, timeout: Duration) -> bool {
        let mut stream = self.state_stream();
        tokio::time::timeout(timeout, stream.wait_for(|state| state.is_connected()))
            .await
            .map(|result| result.is_ok())
            .unwrap_or(false)
    }

    /// Fire-and-forget send.
    pub fn emit(&self, event: EventName, payload: Value) -> Result<(), EmitError> {
        let connection = self.ctx.connection.read();
        let Some(connection) = connection.as_ref() else {
            return Err(EmitError::NotConnected);
        };
        connection.send_packet(Packet::new(event, payload))?;
        Ok(())
    }

    /// Sends a packet and awaits the matching ack. A failure ack becomes
    /// `RequestError::Rejected` carrying the server's message.
    pub async fn request(&self, event: EventName, payload: Value) -> Result<Ack, RequestError> {
        let ack_id = self.ctx.next_ack_id();
        let (tx, rx) = oneshot::channel();
        self.ctx.pending_acks.lock().insert(ack_id, tx);

        if let Err(err) = self.send_with_ack_id(event, payload, ack_id) {
            self.ctx.pending_acks.lock().remove(&ack_id);
            return Err(err.into());
        }

        let ack = match tokio::time::timeout(ACK_TIMEOUT, rx).await {
            Ok(Ok(ack)) => ack,
            Ok(Err(_)) => return Err(RequestError::Disconnected),
            Err(_) => {
                self.ctx.pending_acks.lock().remove(&ack_id);
                return Err(RequestError::TimedOut);
            }
        };

        if !ack.is_success() {
            return Err(RequestError::Rejected {
                message: ack
                    .message
                    .unwrap_or_else(|| "Request was rejected".to_string()),
            });
        }

        Ok(ack)
    }

    fn send_with_ack_id(
        &self,
        event: EventName,
        payload: Value,
        ack_id: u64,
    ) -> Result<(), EmitError> {
        let connection = self.ctx.connection.read();
        let Some(connection) = connection.as_ref() else {
            return Err(EmitError::NotConnected);
        };
        connection.send_packet(Packet::new(event, payload).with_ack_id(ack_id))?;
        Ok(())
    }

    fn teardown(&self) {
        self.ctx.credentials.write().take();
        self.ctx.bump_generation();
        self.ctx.abort_reconnect_timer();
        self.ctx.reconnect_attempts.store(0, Ordering::SeqCst);
        self.ctx.clear_pending_acks();
        self.ctx.drop_connection();
    }

    async fn dial(ctx: Arc<ClientContext>) -> Result<(), ConnectionError> {
        let Some(credentials) = ctx.credentials.read().clone() else {
            return Err(ConnectionError::Generic {
                msg: "Missing credentials".to_string(),
            });
        };

        let generation = ctx.bump_generation();
        let handler_ctx = ctx.clone();

        let connection = (ctx.connector_provider)()
            .connect(
                &credentials.url,
                credentials.token,
                Box::new(move |event| {
                    let ctx = handler_ctx.clone();
                    Box::pin(async move { Self::handle_connection_event(ctx, generation, event) })
                        as PinnedFuture<_>
                }),
            )
            .await?;

        // A concurrent connect or disconnect superseded this dial.
        if generation != ctx.current_generation() {
            connection.disconnect();
            return Ok(());
        }

        ctx.connection.write().replace(connection);
        ctx.reconnect_attempts.store(0, Ordering::SeqCst);
        ctx.set_state(ConnectionState::Connected);
        ctx.dispatch_event(Event::Connected);

        Ok(())
    }

    fn handle_connection_event(ctx: Arc<ClientContext>, generation: u64, event: ConnectionEvent) {
        if generation != ctx.current_generation() {
            return;
        }

        match event {
            ConnectionEvent::Packet(packet) => {
                if packet.is_ack() {
                    Self::handle_ack(&ctx, packet);
                } else {
                    ctx.dispatch_event(Event::Packet(packet));
                }
            }
            ConnectionEvent::Disconnected { error } => {
                ctx.drop_connection();
                ctx.clear_pending_acks();
                ctx.dispatch_event(Event::Disconnected {
                    error: error.clone(),
                });

                let error = error.unwrap_or(ConnectionError::Generic {
                    msg: "Connection lost".to_string(),
                });
                Self::schedule_reconnect(ctx, error);
            }
        }
    }

    fn handle_ack(ctx: &Arc<ClientContext>, packet: Packet) {
        let Some(ack_id) = packet.ack_id else {
            warn!("Received ack without an ack_id. Dropping it.");
            return;
        };

        let ack = match serde_json::from_value::<Ack>(packet.payload) {
            Ok(ack) => ack,
            Err(err) => {
                warn!("Failed to parse ack {ack_id}. {err}");
                return;
            }
        };

        let Some(tx) = ctx.pending_acks.lock().remove(&ack_id) else {
            // The request timed out or the caller went away.
            return;
        };
        _ = tx.send(ack);
    }

    fn schedule_reconnect(ctx: Arc<ClientContext>, error: ConnectionError) {
        if ctx.credentials.read().is_none() {
            return;
        }

        let attempt = ctx.reconnect_attempts.fetch_add(1, Ordering::SeqCst) + 1;

        let Some(delay) = ctx.strategy.delay(attempt) else {
            info!("Giving up on reconnecting after {} attempts.", attempt - 1);
            ctx.set_state(ConnectionState::Failed);
            ctx.dispatch_event(Event::ConnectionFailed { error });
            return;
        };

        info!("Reconnecting in {:?} (attempt {attempt})…", delay);
        ctx.set_state(ConnectionState::Reconnecting);
        ctx.dispatch_event(Event::Reconnecting { attempt });

        let task_ctx = ctx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            if task_ctx.credentials.read().is_none() {
                return;
            }

            if let Err(error) = Self::dial(task_ctx.clone()).await {
                Self::schedule_reconnect(task_ctx, error);
            }
        })
        .abort_handle();

        ctx.reconnect_task.lock().replace(handle);
    }
}
